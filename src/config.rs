use crate::error::ConfigReadError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(windows)]
const CONFIG_PATH: &str = r"C:\ProgramData\ente-tray\config.json";
#[cfg(not(windows))]
const CONFIG_PATH: &str = "/etc/ente-tray/config.json";

/// Read-only override file. Only `ente_auth_executable` is recognized.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct TrayConfig {
    #[serde(default)]
    pub ente_auth_executable: Option<String>,
}

impl TrayConfig {
    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_PATH)
    }

    /// `Ok(None)` when there is no file at `path`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigReadError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = serde_json::from_str(&content).map_err(|source| ConfigReadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Some(config))
    }

    pub fn executable_override(&self) -> Option<PathBuf> {
        self.ente_auth_executable
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }
}
