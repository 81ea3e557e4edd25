use crate::config::TrayConfig;
use crate::error::ResolutionError;
use log::{debug, info, warn};
use std::fmt;
use std::path::{Path, PathBuf};

/// Built-in install locations, keyed by `std::env::consts::OS`.
const PLATFORM_DEFAULTS: &[(&str, &str)] = &[
    ("windows", r"C:\Program Files\Ente Auth\auth.exe"),
    ("linux", "/usr/local/bin/ente-auth"),
];

pub fn platform_default(os: &str) -> Option<&'static str> {
    PLATFORM_DEFAULTS
        .iter()
        .find(|(key, _)| *key == os)
        .map(|(_, path)| *path)
}

/// Executable path that was a regular file when it was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutablePath(PathBuf);

impl ExecutablePath {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ExecutablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

pub struct Resolver {
    config_path: PathBuf,
    default_path: Option<PathBuf>,
}

impl Resolver {
    pub fn new(config_path: PathBuf, default_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            default_path,
        }
    }

    pub fn for_current_platform() -> Self {
        Self::new(
            TrayConfig::config_path(),
            platform_default(std::env::consts::OS).map(PathBuf::from),
        )
    }

    /// Config file first, then the platform default.
    pub fn resolve(&self) -> Result<ExecutablePath, ResolutionError> {
        if let Some(path) = self.from_config() {
            info!("Using Ente Auth from config file: {}", path.display());
            return Ok(ExecutablePath::new(path));
        }

        if let Some(path) = self.default_path.as_ref().filter(|p| p.is_file()) {
            info!("Using default Ente Auth location: {}", path.display());
            return Ok(ExecutablePath::new(path.clone()));
        }

        Err(ResolutionError {
            config_path: self.config_path.clone(),
        })
    }

    fn from_config(&self) -> Option<PathBuf> {
        let config = match TrayConfig::load_from(&self.config_path) {
            Ok(Some(config)) => config,
            Ok(None) => {
                debug!("No config file at {}", self.config_path.display());
                return None;
            }
            Err(e) => {
                warn!("{}", e);
                return None;
            }
        };

        let path = config.executable_override()?;
        if path.is_file() {
            Some(path)
        } else {
            warn!(
                "Configured Ente Auth executable does not exist: {}",
                path.display()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        dir: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                dir: TempDir::new().unwrap(),
            }
        }

        fn config_path(&self) -> PathBuf {
            self.dir.path().join("config.json")
        }

        fn touch(&self, name: &str) -> PathBuf {
            let path = self.dir.path().join(name);
            fs::write(&path, b"").unwrap();
            path
        }

        fn write_config(&self, exe: &Path) {
            let body = serde_json::json!({ "ente_auth_executable": exe });
            fs::write(self.config_path(), body.to_string()).unwrap();
        }

        fn resolver(&self, default: Option<PathBuf>) -> Resolver {
            Resolver::new(self.config_path(), default)
        }
    }

    #[test]
    fn platform_defaults_cover_windows_and_linux_only() {
        assert_eq!(
            platform_default("windows"),
            Some(r"C:\Program Files\Ente Auth\auth.exe")
        );
        assert_eq!(platform_default("linux"), Some("/usr/local/bin/ente-auth"));
        assert_eq!(platform_default("macos"), None);
        assert_eq!(platform_default("freebsd"), None);
    }

    #[test]
    fn config_wins_over_existing_default() {
        let fx = Fixture::new();
        let configured = fx.touch("real_exe");
        let default = fx.touch("default_exe");
        fx.write_config(&configured);

        let resolved = fx.resolver(Some(default)).resolve().unwrap();
        assert_eq!(resolved.as_path(), configured.as_path());
    }

    #[test]
    fn missing_config_falls_back_to_default() {
        let fx = Fixture::new();
        let default = fx.touch("default_exe");

        let resolved = fx.resolver(Some(default.clone())).resolve().unwrap();
        assert_eq!(resolved.as_path(), default.as_path());
    }

    #[test]
    fn malformed_config_falls_back_to_default() {
        let fx = Fixture::new();
        let default = fx.touch("default_exe");
        fs::write(fx.config_path(), "{ \"ente_auth_executable\": ").unwrap();

        let resolved = fx.resolver(Some(default.clone())).resolve().unwrap();
        assert_eq!(resolved.as_path(), default.as_path());
    }

    #[test]
    fn nonexistent_configured_path_is_rejected() {
        let fx = Fixture::new();
        let default = fx.touch("default_exe");
        fx.write_config(&fx.dir.path().join("gone"));

        let resolved = fx.resolver(Some(default.clone())).resolve().unwrap();
        assert_eq!(resolved.as_path(), default.as_path());
    }

    #[test]
    fn configured_directory_is_rejected() {
        let fx = Fixture::new();
        fx.write_config(fx.dir.path());

        assert!(fx.resolver(None).resolve().is_err());
    }

    #[test]
    fn nothing_found_reports_config_location_and_shape() {
        let fx = Fixture::new();
        let missing_default = fx.dir.path().join("not_installed");

        let err = fx.resolver(Some(missing_default)).resolve().unwrap_err();
        let message = err.to_string();
        assert!(message.contains(&fx.config_path().display().to_string()));
        assert!(message
            .contains("{\n  \"ente_auth_executable\": \"full_path_to_EnteAuth_executable\"\n}"));
    }

    #[test]
    fn unsupported_platform_goes_straight_to_failure() {
        let fx = Fixture::new();
        assert!(fx.resolver(None).resolve().is_err());
    }

    #[test]
    fn resolve_is_idempotent() {
        let fx = Fixture::new();
        let configured = fx.touch("real_exe");
        fx.write_config(&configured);

        let resolver = fx.resolver(None);
        assert_eq!(resolver.resolve().unwrap(), resolver.resolve().unwrap());
    }
}
