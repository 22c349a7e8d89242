//! Side panel host: collaborator interfaces, their file-backed
//! implementations, and the session that executes core effects.
mod persist;
mod session;
mod source;
mod store;
mod viewport;

pub use persist::{ensure_data_dir, read_if_exists, AtomicFileWriter, PersistError};
pub use session::{IdSource, Notice, Session};
pub use source::{BookmarkSource, ChromiumBookmarksFile, SourceError, StaticBookmarkSource};
pub use store::{
    decode_settings, encode_setting, FileSettingsStore, MemorySettingsStore, SettingKey,
    SettingsMap, SettingsStore, StoreError, SETTINGS_FILENAME,
};
pub use viewport::{PageAccessError, ViewportEvent, ViewportHost};
