//! Configuration management
//!
//! Settings live in `settings.json` inside the remarks directory:
//! ```json
//! {
//!   "scan": { "extensions": ["rs", "go"], "ignoreDirs": ["target"] },
//!   "notifications": { "channel": "email" }
//! }
//! ```
//! Keys the library does not manage are preserved when saving.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::result::Result;
use crate::domain::Channel;

/// File extensions scanned for markers when nothing else is configured
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "rs", "go", "py", "c", "h", "cc", "cpp", "hpp", "java", "js", "ts", "kt", "cs", "php",
];

/// Directories never descended into during a scan
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[".git", "target", "node_modules", "vendor", "__pycache__"];

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    scan: ScanSettings,
    #[serde(default)]
    notifications: NotificationSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScanSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extensions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ignore_dirs: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotificationSettings {
    #[serde(default)]
    channel: Channel,
}

/// Remarks configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    /// Extensions (without the dot) eligible for scanning
    pub extensions: Vec<String>,
    pub ignore_dirs: Vec<String>,
    pub channel: Channel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect(),
            channel: Channel::default(),
        }
    }
}

impl Config {
    /// Load config from the remarks directory
    ///
    /// A missing or unreadable settings file yields defaults. Environment
    /// overrides (for CI/testing):
    /// - `REMARKS_NOTIFY_CHANNEL`: `email`, `sms` or `push`
    /// - `REMARKS_SCAN_EXTENSIONS`: comma separated, e.g. `rs,go`
    pub fn load(remarks_dir: &Path) -> Result<Self> {
        let settings_path = remarks_dir.join(SETTINGS_FILE);

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %settings_path.display(), error = %e, "ignoring malformed settings file");
                SettingsFile::default()
            })
        } else {
            SettingsFile::default()
        };

        let mut config = Config::default();
        if let Some(extensions) = raw.scan.extensions {
            config.extensions = normalize_extensions(extensions);
        }
        if let Some(ignore_dirs) = raw.scan.ignore_dirs {
            config.ignore_dirs = ignore_dirs;
        }
        config.channel = raw.notifications.channel;

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `REMARKS_*` overrides looked up through `var`
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(channel) = var("REMARKS_NOTIFY_CHANNEL") {
            self.channel = channel.parse()?;
        }
        if let Some(extensions) = var("REMARKS_SCAN_EXTENSIONS") {
            self.extensions = normalize_extensions(extensions.split(',').map(String::from));
        }
        Ok(())
    }

    /// Save config to the remarks directory
    /// Preserves other settings that the library doesn't manage
    pub fn save(&self, remarks_dir: &Path) -> Result<()> {
        let settings_path = remarks_dir.join(SETTINGS_FILE);

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.scan.extensions = Some(self.extensions.clone());
        settings.scan.ignore_dirs = Some(self.ignore_dirs.clone());
        settings.notifications.channel = self.channel;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Whether a file with this extension should be scanned
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }

    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignore_dirs.iter().any(|d| d == name)
    }
}

fn normalize_extensions(raw: impl IntoIterator<Item = String>) -> Vec<String> {
    raw.into_iter()
        .map(|e| e.trim().trim_start_matches('.').to_string())
        .filter(|e| !e.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_settings_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(config.accepts_extension("rs"));
        assert!(config.accepts_extension("GO"));
        assert!(!config.accepts_extension("md"));
        assert!(config.is_ignored_dir("target"));
    }

    #[test]
    fn test_settings_file_values() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"scan": {"extensions": [".py", " go "], "ignoreDirs": ["build"]}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.extensions, vec!["py", "go"]);
        assert_eq!(config.ignore_dirs, vec!["build"]);
        assert!(!config.is_ignored_dir("target"));
    }

    #[test]
    fn test_malformed_settings_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{not json").unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.channel, Channel::Email);
        assert!(config.accepts_extension("cpp"));
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(|key| match key {
                "REMARKS_NOTIFY_CHANNEL" => Some("sms".to_string()),
                "REMARKS_SCAN_EXTENSIONS" => Some("rs, .go,".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.channel, Channel::Sms);
        assert_eq!(config.extensions, vec!["rs", "go"]);

        let err = config
            .apply_overrides(|key| (key == "REMARKS_NOTIFY_CHANNEL").then(|| "fax".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("fax"));
    }

    #[test]
    fn test_save_preserves_unmanaged_keys() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"theme": "dark", "notifications": {"channel": "email"}}"#,
        )
        .unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        config.extensions = vec!["rs".to_string()];
        config.save(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["scan"]["extensions"][0], "rs");

        let reloaded = Config::load(dir.path()).unwrap();
        assert_eq!(reloaded.extensions, vec!["rs"]);
    }
}
