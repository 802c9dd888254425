//! Configuration loading.
//!
//! Values come from a config file (`$HOME/.tks.yaml` unless `--config` names
//! another one) and are then overridden by command-line flags or their
//! environment variables.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;
use tracing::debug;

use crate::error::CliError;

/// File name looked up in the home directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = ".tks.yaml";

/// Resolved client settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Address of the cluster-info service.
    #[serde(rename = "tksInfoUrl", alias = "tksinfourl", default)]
    pub tks_info_url: String,
    /// Contract whose resources are managed.
    #[serde(rename = "contractId", alias = "contractid", default)]
    pub contract_id: String,
}

impl Settings {
    /// Load settings from a config file.
    ///
    /// An explicit `path` must exist. Without one the default file in the
    /// home directory is read if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing (explicit path only),
    /// unreadable, or malformed.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let builder = match path {
            Some(path) => Config::builder().add_source(File::from(path).required(true)),
            None => match default_config_path() {
                Some(path) => Config::builder().add_source(File::from(path).required(false)),
                None => Config::builder(),
            },
        };

        let settings: Self = builder.build()?.try_deserialize()?;
        debug!(
            tks_info_url = %settings.tks_info_url,
            contract_id = %settings.contract_id,
            "Loaded configuration"
        );
        Ok(settings)
    }

    /// Apply command-line overrides on top of file values.
    #[must_use]
    pub fn with_overrides(mut self, tks_info_url: Option<&str>, contract_id: Option<&str>) -> Self {
        if let Some(url) = tks_info_url {
            self.tks_info_url = url.to_string();
        }
        if let Some(id) = contract_id {
            self.contract_id = id.to_string();
        }
        self
    }

    /// The service address.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no address is set.
    pub fn endpoint(&self) -> Result<&str, CliError> {
        let url = self.tks_info_url.trim();
        if url.is_empty() {
            return Err(CliError::Config(
                "You must specify tksInfoUrl at config file".into(),
            ));
        }
        Ok(url)
    }

    /// The contract identifier.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no contract is set.
    pub fn contract_id(&self) -> Result<&str, CliError> {
        let id = self.contract_id.trim();
        if id.is_empty() {
            return Err(CliError::Config(
                "You must specify contractId at config file".into(),
            ));
        }
        Ok(id)
    }
}

/// Default config file location, if a home directory is known.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(name: &str, contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create config");
        file.write_all(contents.as_bytes()).expect("write config");
        (dir, path)
    }

    #[test]
    fn load_yaml_file() {
        let (_dir, path) = write_config(
            "tks.yaml",
            "tksInfoUrl: \"127.0.0.1:9111\"\ncontractId: \"P0123456\"\n",
        );

        let settings = Settings::load(Some(&path)).expect("should load");
        assert_eq!(settings.tks_info_url, "127.0.0.1:9111");
        assert_eq!(settings.contract_id, "P0123456");
    }

    #[test]
    fn load_toml_file() {
        let (_dir, path) = write_config(
            "tks.toml",
            "tksInfoUrl = \"http://info:9111\"\ncontractId = \"P1\"\n",
        );

        let settings = Settings::load(Some(&path)).expect("should load");
        assert_eq!(settings.tks_info_url, "http://info:9111");
        assert_eq!(settings.contract_id, "P1");
    }

    #[test]
    fn load_partial_file_defaults_missing_keys() {
        let (_dir, path) = write_config("tks.yaml", "tksInfoUrl: \"info:9111\"\n");

        let settings = Settings::load(Some(&path)).expect("should load");
        assert_eq!(settings.tks_info_url, "info:9111");
        assert!(settings.contract_id.is_empty());
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.yaml");

        let result = Settings::load(Some(&path));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn load_malformed_file_fails() {
        let (_dir, path) = write_config("tks.yaml", "tksInfoUrl: [unterminated\n");

        let result = Settings::load(Some(&path));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn overrides_win_over_file_values() {
        let settings = Settings {
            tks_info_url: "file:9111".into(),
            contract_id: "P-file".into(),
        }
        .with_overrides(Some("flag:9111"), None);

        assert_eq!(settings.tks_info_url, "flag:9111");
        assert_eq!(settings.contract_id, "P-file");
    }

    #[test]
    fn endpoint_missing_is_config_error() {
        let settings = Settings::default();
        let err = settings.endpoint().expect_err("should fail");
        assert!(err.to_string().contains("tksInfoUrl"));
    }

    #[test]
    fn endpoint_blank_is_config_error() {
        let settings = Settings::default().with_overrides(Some("   "), None);
        assert!(matches!(settings.endpoint(), Err(CliError::Config(_))));
    }

    #[test]
    fn contract_missing_is_config_error() {
        let settings = Settings::default().with_overrides(Some("info:9111"), None);
        assert_eq!(settings.endpoint().expect("endpoint set"), "info:9111");
        let err = settings.contract_id().expect_err("should fail");
        assert!(err.to_string().contains("contractId"));
    }

    #[test]
    fn default_path_uses_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with(DEFAULT_CONFIG_FILE));
        }
    }
}
