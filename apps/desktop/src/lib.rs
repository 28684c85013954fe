pub mod cli;
pub mod commands;
pub mod error;
pub mod notes;
pub mod settings;
pub mod state;

use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use cli::run;
pub use state::AppState;

/// Environment variable overriding the settings file location.
pub const SETTINGS_PATH_ENV: &str = "FLASHCARD_NOTES_SETTINGS";

/// Where the settings file lives.
pub fn settings_path() -> PathBuf {
    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        return PathBuf::from(path);
    }

    // Use the config directory when known, fallback to current dir
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flashcard-notes")
        .join("settings.json")
}

/// Install the global tracing subscriber, filtered by `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
