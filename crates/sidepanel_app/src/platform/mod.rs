mod app;
mod commands;
mod config;
mod logging;
mod terminal;

pub use app::run_app;
