use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;

/// Settings file in the user's home directory
const SETTINGS_FILE: &str = ".gitwc.json";

fn default_commit_message() -> String {
    "Work in progress".to_string()
}

/// User-facing options, all optional in the file
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Settings {
    /// Pre-filled value for the commit message prompt
    #[serde(default = "default_commit_message")]
    pub default_commit_message: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_commit_message: default_commit_message(),
        }
    }
}

impl Settings {
    /// Loads settings from the per-user file, falling back to defaults when
    /// the file is missing or empty
    pub fn load() -> Result<Settings, AppError> {
        Self::load_from(&settings_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Settings, AppError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no settings file at {}, using defaults", path.display());
                return Ok(Settings::default());
            }
            Err(err) => return Err(err.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Settings::default());
        }

        Ok(serde_json::from_str(&contents)?)
    }
}

/// Gets the path to the settings file
fn settings_path() -> Result<PathBuf, AppError> {
    let home_dir: PathBuf = dirs::home_dir().ok_or(AppError::HomeDirNotFound)?;
    Ok(home_dir.join(SETTINGS_FILE))
}
