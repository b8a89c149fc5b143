use crate::error::{BlogError, Result, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_POSTS_FILE: &str = "masterblog_posts.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Configuration for masterblog, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogConfig {
    /// Name of the posts file inside the data directory
    #[serde(default = "default_posts_file")]
    pub posts_file: String,

    /// Pretty-print the posts file
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Fallback log filter when MASTERBLOG_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_posts_file() -> String {
    DEFAULT_POSTS_FILE.to_string()
}

fn default_pretty() -> bool {
    true
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            posts_file: default_posts_file(),
            pretty: default_pretty(),
            log_level: default_log_level(),
        }
    }
}

impl BlogConfig {
    pub const KEYS: [&'static str; 3] = ["posts-file", "pretty", "log-level"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StorageError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            BlogError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StorageError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(StorageError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(StorageError::Io)?;
        Ok(())
    }

    pub fn posts_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.posts_file)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "posts-file" => Some(self.posts_file.clone()),
            "pretty" => Some(self.pretty.to_string()),
            "log-level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "posts-file" => self.set_posts_file(value),
            "pretty" => {
                self.pretty = match value {
                    "true" | "yes" | "on" => true,
                    "false" | "no" | "off" => false,
                    other => {
                        return Err(BlogError::Config(format!(
                            "pretty expects true or false, got '{}'",
                            other
                        )))
                    }
                };
                Ok(())
            }
            "log-level" => {
                let level = value.to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(BlogError::Config(format!(
                        "log-level must be one of {}, got '{}'",
                        LOG_LEVELS.join(", "),
                        value
                    )));
                }
                self.log_level = level;
                Ok(())
            }
            other => Err(BlogError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// Set the posts file name (normalizes to end in `.json`)
    fn set_posts_file(&mut self, name: &str) -> Result<()> {
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(BlogError::Config(format!(
                "posts-file must be a plain file name, got '{}'",
                name
            )));
        }
        self.posts_file = if name.ends_with(".json") {
            name.to_string()
        } else {
            format!("{}.json", name)
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BlogConfig::default();
        assert_eq!(config.posts_file, "masterblog_posts.json");
        assert!(config.pretty);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_set_posts_file_adds_extension() {
        let mut config = BlogConfig::default();
        config.set("posts-file", "journal").unwrap();
        assert_eq!(config.posts_file, "journal.json");
        config.set("posts-file", "blog.json").unwrap();
        assert_eq!(config.posts_file, "blog.json");
    }

    #[test]
    fn test_set_rejects_paths_and_bad_values() {
        let mut config = BlogConfig::default();
        assert!(config.set("posts-file", "../escape").is_err());
        assert!(config.set("pretty", "maybe").is_err());
        assert!(config.set("log-level", "loud").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, BlogConfig::default());
    }

    #[test]
    fn test_get_formats_values() {
        let mut config = BlogConfig::default();
        config.set("pretty", "off").unwrap();
        config.set("log-level", "DEBUG").unwrap();
        assert_eq!(config.get("pretty").as_deref(), Some("false"));
        assert_eq!(config.get("log-level").as_deref(), Some("debug"));
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = BlogConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, BlogConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("nested");

        let mut config = BlogConfig::default();
        config.set("posts-file", "other").unwrap();
        config.save(&nested).unwrap();

        let loaded = BlogConfig::load(&nested).unwrap();
        assert_eq!(loaded.posts_file, "other.json");
        assert_eq!(loaded.posts_path(&nested), nested.join("other.json"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"pretty": false}"#).unwrap();

        let config = BlogConfig::load(temp_dir.path()).unwrap();
        assert!(!config.pretty);
        assert_eq!(config.posts_file, "masterblog_posts.json");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{not json").unwrap();

        let err = BlogConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, BlogError::Config(_)));
    }
}
