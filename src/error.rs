use std::path::PathBuf;
use thiserror::Error;

/// The config file exists but could not be used. Treated as "no override".
#[derive(Debug, Error)]
pub enum ConfigReadError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
#[error(
    "Cannot find Ente Auth executable.\n\n\
     Please create a config file with the following format:\n\
     {config_path}\n\n\
     {{\n  \"ente_auth_executable\": \"full_path_to_EnteAuth_executable\"\n}}"
)]
pub struct ResolutionError {
    pub config_path: PathBuf,
}

#[derive(Debug, Error)]
#[error("Failed to launch Ente Auth ({path}): {source}")]
pub struct LaunchError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

/// Anything that stops the process before the tray comes up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}
