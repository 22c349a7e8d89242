use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sidepanel_core::DEFAULT_HOMEPAGE;

use super::logging::LogDestination;

pub const DEFAULT_CONFIG_PATH: &str = "./sidepanel.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding `settings.json`.
    pub data_dir: PathBuf,
    /// Homepage used until stored settings arrive.
    pub initial_homepage: String,
    /// Chromium profile `Bookmarks` file to mirror, if any.
    pub native_bookmarks: Option<PathBuf>,
    pub log_destination: LogDestination,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./sidepanel_data"),
            initial_homepage: DEFAULT_HOMEPAGE.to_string(),
            native_bookmarks: None,
            log_destination: LogDestination::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the config at `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("reading config {}", path.display()))
            }
        };
        ron::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::load(&temp.path().join("absent.ron")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sidepanel.ron");
        fs::write(
            &path,
            r#"(initial_homepage: "https://start.example", log_destination: Both)"#,
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.initial_homepage, "https://start.example");
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.data_dir, PathBuf::from("./sidepanel_data"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sidepanel.ron");
        fs::write(&path, "(initial_homepage: ").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("parsing config"));
    }
}
