use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{DEFAULT_BASE_PATH, DEFAULT_PROGRAM};
use crate::core::{FolderLayout, TitleOptions};
use crate::error::ConfigError;
use crate::launch::LaunchTarget;

/// User preferences, read once per invocation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct Preferences {
    #[serde(alias = "base_path")]
    pub(crate) base_path: String,
    #[serde(alias = "program_name")]
    pub(crate) program_name: String,
    #[serde(alias = "add_year_to_path")]
    pub(crate) add_year_to_path: bool,
    #[serde(alias = "add_month_day_to_path")]
    pub(crate) add_month_day_to_path: bool,
    #[serde(alias = "sanitize_path_name")]
    pub(crate) sanitize_path_name: bool,
    #[serde(alias = "truncate_path_name")]
    pub(crate) truncate_path_name: bool,
    #[serde(alias = "terminal_preset")]
    pub(crate) terminal_preset: Option<String>,
    #[serde(alias = "custom_terminal_command")]
    pub(crate) custom_terminal_command: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            program_name: DEFAULT_PROGRAM.to_string(),
            add_year_to_path: true,
            add_month_day_to_path: true,
            sanitize_path_name: true,
            truncate_path_name: true,
            terminal_preset: None,
            custom_terminal_command: None,
        }
    }
}

impl Preferences {
    /// Load from `explicit` if given, otherwise from the first readable default location
    pub(crate) fn load(explicit: Option<&Path>) -> Self {
        let candidates = match explicit {
            Some(path) => vec![path.to_path_buf()],
            None => Self::get_config_paths(),
        };

        for path in candidates {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Preferences>(&content) {
                    Ok(prefs) => {
                        tracing::debug!(path = %path.display(), "loaded preferences");
                        return prefs;
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "failed to parse preferences");
                    }
                }
            } else if explicit.is_some() {
                tracing::warn!(path = %path.display(), "config file not readable, using defaults");
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/code-in-folder/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(
                home.join(".config")
                    .join("code-in-folder")
                    .join("config.toml"),
            );
        }

        // 2. Platform config dir (macOS: ~/Library/Application Support)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("code-in-folder").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.code-in-folder.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".code-in-folder.toml"));
        }

        paths
    }

    pub(crate) fn title_options(&self) -> TitleOptions {
        TitleOptions {
            sanitize: self.sanitize_path_name,
            truncate: self.truncate_path_name,
        }
    }

    pub(crate) fn layout(&self) -> FolderLayout {
        FolderLayout {
            add_year: self.add_year_to_path,
            add_month_day: self.add_month_day_to_path,
        }
    }

    pub(crate) fn launch_target(&self) -> Result<LaunchTarget, ConfigError> {
        LaunchTarget::new(
            &self.program_name,
            self.terminal_preset.as_deref(),
            self.custom_terminal_command.as_deref(),
        )
    }
}
