//! User settings persisted as a JSON document.
//!
//! Keys missing from the file fall back to their defaults, nested shortcut
//! keys included, and the merged document is written back on load.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

const MAX_RECENT_DIRECTORIES: usize = 10;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no notes directory configured")]
    NoDirectoryConfigured,
}

/// Keyboard shortcuts, in accelerator notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shortcuts {
    pub open_command_palette: String,
    pub save_note: String,
    pub refresh_notes: String,
    pub open_settings: String,
    pub toggle_sidebar: String,
}

impl Default for Shortcuts {
    fn default() -> Self {
        Self {
            open_command_palette: "CommandOrControl+K".to_string(),
            save_note: "CommandOrControl+S".to_string(),
            refresh_notes: "CommandOrControl+R".to_string(),
            open_settings: "CommandOrControl+,".to_string(),
            toggle_sidebar: "CommandOrControl+B".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub shortcuts: Shortcuts,
    pub theme: Theme,
    pub font_size: u32,
    pub notes_directory: Option<PathBuf>,
    pub recent_directories: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shortcuts: Shortcuts::default(),
            theme: Theme::default(),
            font_size: 14,
            notes_directory: None,
            recent_directories: Vec::new(),
        }
    }
}

/// Partial shortcut update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShortcutsPatch {
    pub open_command_palette: Option<String>,
    pub save_note: Option<String>,
    pub refresh_notes: Option<String>,
    pub open_settings: Option<String>,
    pub toggle_sidebar: Option<String>,
}

/// Partial settings update. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub shortcuts: Option<ShortcutsPatch>,
    pub theme: Option<Theme>,
    pub font_size: Option<u32>,
    pub notes_directory: Option<PathBuf>,
    pub recent_directories: Option<Vec<PathBuf>>,
}

impl Settings {
    /// Apply a patch over these settings.
    pub fn merge(&self, patch: SettingsPatch) -> Self {
        let shortcuts = match patch.shortcuts {
            Some(s) => Shortcuts {
                open_command_palette: s
                    .open_command_palette
                    .unwrap_or_else(|| self.shortcuts.open_command_palette.clone()),
                save_note: s.save_note.unwrap_or_else(|| self.shortcuts.save_note.clone()),
                refresh_notes: s
                    .refresh_notes
                    .unwrap_or_else(|| self.shortcuts.refresh_notes.clone()),
                open_settings: s
                    .open_settings
                    .unwrap_or_else(|| self.shortcuts.open_settings.clone()),
                toggle_sidebar: s
                    .toggle_sidebar
                    .unwrap_or_else(|| self.shortcuts.toggle_sidebar.clone()),
            },
            None => self.shortcuts.clone(),
        };

        Self {
            shortcuts,
            theme: patch.theme.unwrap_or(self.theme),
            font_size: patch.font_size.unwrap_or(self.font_size),
            notes_directory: patch.notes_directory.or_else(|| self.notes_directory.clone()),
            recent_directories: patch
                .recent_directories
                .unwrap_or_else(|| self.recent_directories.clone()),
        }
    }
}

/// Settings backed by a JSON file.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or unreadable. The merged result is written back.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();

        let settings = match fs::read_to_string(&path).await {
            Ok(data) => match serde_json::from_str::<Settings>(&data) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Invalid settings in {}, using defaults: {}", path.display(), e);
                    Settings::default()
                }
            },
            Err(_) => {
                tracing::info!("Settings file created with defaults at {}", path.display());
                Settings::default()
            }
        };

        let store = Self { path, settings };
        store.save().await?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The configured notes directory.
    pub fn notes_dir(&self) -> Result<PathBuf, SettingsError> {
        self.settings
            .notes_directory
            .clone()
            .ok_or(SettingsError::NoDirectoryConfigured)
    }

    pub async fn update(&mut self, patch: SettingsPatch) -> Result<&Settings, SettingsError> {
        self.settings = self.settings.merge(patch);
        self.save().await?;
        Ok(&self.settings)
    }

    pub async fn reset(&mut self) -> Result<&Settings, SettingsError> {
        self.settings = Settings::default();
        self.save().await?;
        Ok(&self.settings)
    }

    /// Select the notes directory and move it to the front of the recents.
    pub async fn set_notes_directory(
        &mut self,
        dir: impl Into<PathBuf>,
    ) -> Result<&Settings, SettingsError> {
        let dir = dir.into();
        let recent = &mut self.settings.recent_directories;
        recent.retain(|d| d != &dir);
        recent.insert(0, dir.clone());
        recent.truncate(MAX_RECENT_DIRECTORIES);
        self.settings.notes_directory = Some(dir);

        self.save().await?;
        Ok(&self.settings)
    }

    async fn save(&self) -> Result<(), SettingsError> {
        let io_err = |source| SettingsError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(io_err)?;
        }
        let data = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.path, data).await.map_err(io_err)
    }
}
