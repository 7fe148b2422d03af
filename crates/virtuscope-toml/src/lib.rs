#![doc = include_str!("../README.md")]

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "virtuscope.toml";

/// Environment variable overriding the configuration path.
pub const CONFIG_ENV_VAR: &str = "VIRTUSCOPE_CONFIG";

#[derive(Debug, Error)]
pub enum SiteConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Contact form settings.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// How long the simulated submission takes, in milliseconds.
    pub submit_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
        }
    }
}

/// Translation settings.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct I18nSettings {
    /// Log a warning in debug builds when a key is missing from every locale.
    pub warn_missing_keys: bool,
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            warn_missing_keys: true,
        }
    }
}

/// The configuration for the site.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Path of the file persisting the selected language.
    pub store_path: PathBuf,
    pub contact: ContactConfig,
    pub i18n: I18nSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(".virtuscope/preferences.toml"),
            contact: ContactConfig::default(),
            i18n: I18nSettings::default(),
        }
    }
}

impl SiteConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, SiteConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SiteConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs_err::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&content)?;

        Ok(config)
    }

    /// Returns the path the configuration is read from.
    ///
    /// `VIRTUSCOPE_CONFIG` wins over `virtuscope.toml` in `base_dir`.
    pub fn config_path(base_dir: &Path) -> PathBuf {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => base_dir.join(CONFIG_FILE_NAME),
        }
    }

    /// Reads the configuration for `base_dir`, or the defaults when there is none.
    pub fn discover(base_dir: &Path) -> Result<Self, SiteConfigError> {
        match Self::read_from_path(Self::config_path(base_dir)) {
            Err(SiteConfigError::NotFound(_)) => Ok(Self::default()),
            result => result,
        }
    }

    /// Returns `store_path` resolved against `base_dir` when it is relative.
    pub fn store_path_from_base(&self, base_dir: &Path) -> PathBuf {
        if self.store_path.is_absolute() {
            self.store_path.clone()
        } else {
            base_dir.join(&self.store_path)
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.contact.submit_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_from_path_success() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        let config_content = r#"
store_path = "prefs.toml"

[contact]
submit_delay_ms = 50
"#;

        fs::write(&config_path, config_content).unwrap();

        let config = SiteConfig::read_from_path(&config_path).unwrap();
        assert_eq!(config.store_path, PathBuf::from("prefs.toml"));
        assert_eq!(config.submit_delay(), Duration::from_millis(50));
        assert!(config.i18n.warn_missing_keys);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "").unwrap();

        let config = SiteConfig::read_from_path(&config_path).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.submit_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_read_from_path_file_not_found() {
        let result = SiteConfig::read_from_path("/non/existent/path/virtuscope.toml");
        assert!(matches!(result, Err(SiteConfigError::NotFound(_))));
    }

    #[rstest]
    #[case::language_key("default_language = \"rw\"\n")]
    #[case::unknown_field("colour = \"blue\"\n")]
    #[case::wrong_type("[contact]\nsubmit_delay_ms = \"soon\"\n")]
    #[case::broken_syntax("store_path = \n")]
    fn test_read_from_path_invalid(#[case] content: &str) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, content).unwrap();

        let result = SiteConfig::read_from_path(&config_path);
        assert!(matches!(result, Err(SiteConfigError::ParseError(_))));
    }

    #[test]
    fn test_store_path_from_base() {
        let base = Path::new("/srv/site");
        let relative = SiteConfig::default();
        assert_eq!(
            relative.store_path_from_base(base),
            PathBuf::from("/srv/site/.virtuscope/preferences.toml")
        );

        let absolute = SiteConfig {
            store_path: PathBuf::from("/var/lib/virtuscope/prefs.toml"),
            ..SiteConfig::default()
        };
        assert_eq!(
            absolute.store_path_from_base(base),
            PathBuf::from("/var/lib/virtuscope/prefs.toml")
        );
    }

    #[test]
    #[serial]
    fn test_discover_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        temp_env::with_var_unset(CONFIG_ENV_VAR, || {
            let config = SiteConfig::discover(temp_dir.path()).unwrap();
            assert_eq!(config, SiteConfig::default());
        });
    }

    #[test]
    #[serial]
    fn test_discover_honours_env_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom = temp_dir.path().join("custom.toml");
        fs::write(&custom, "[contact]\nsubmit_delay_ms = 10\n").unwrap();

        temp_env::with_var(CONFIG_ENV_VAR, Some(&custom), || {
            let config = SiteConfig::discover(Path::new("/nowhere")).unwrap();
            assert_eq!(config.submit_delay(), Duration::from_millis(10));
        });
    }

    #[test]
    #[serial]
    fn test_discover_reports_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "store_path = 5\n",
        )
        .unwrap();

        temp_env::with_var_unset(CONFIG_ENV_VAR, || {
            let result = SiteConfig::discover(temp_dir.path());
            assert!(matches!(result, Err(SiteConfigError::ParseError(_))));
        });
    }
}
