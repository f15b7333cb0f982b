//! Application configuration.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// Name of the directory under `$HOME` holding the CLI state.
const CONFIG_DIR: &str = ".courier-admin";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the admin API. Empty means "use the environment default".
    #[serde(default)]
    pub api_url: String,
    /// Bearer token sent with every request. Empty means anonymous.
    #[serde(default)]
    pub auth_token: String,
}

impl Config {
    /// Create Config with the given API URL and token.
    #[allow(unused)]
    pub fn new(api_url: String, auth_token: String) -> Self {
        Config {
            api_url,
            auth_token,
        }
    }

    /// The configured API URL, if one was set.
    pub fn api_url(&self) -> Option<&str> {
        Some(self.api_url.as_str()).filter(|url| !url.trim().is_empty())
    }

    /// The configured bearer token, if one was set.
    pub fn auth_token(&self) -> Option<&str> {
        Some(self.auth_token.as_str()).filter(|token| !token.trim().is_empty())
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration if the file exists, otherwise returns the default.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        if !path.ends_with("config.json") {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path must end with config.json",
            ));
        }
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(path)
    }
}

/// Location of the configuration file, `~/.courier-admin/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine the home directory",
        )
    })?;
    Ok(home.join(CONFIG_DIR).join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::new("http://localhost:3000".to_string(), "secret".to_string());
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = Config::new("http://localhost:3000".to_string(), String::new());
        let result = config.save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        assert!(Config::load_from_file(&path).is_err());
    }

    #[test]
    // Older files without the token key still load.
    fn test_missing_fields_default_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"api_url":"http://x"}"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.api_url(), Some("http://x"));
        assert_eq!(config.auth_token(), None);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_clear_removes_file_and_tolerates_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().save(&path).unwrap();

        Config::clear(&path).unwrap();
        assert!(!path.exists());
        assert!(Config::clear(&path).is_ok());
    }

    #[test]
    fn test_clear_refuses_other_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "keep me").unwrap();

        assert!(Config::clear(&path).is_err());
        assert!(path.exists());
    }
}
