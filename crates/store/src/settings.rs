//! Generator settings management
//!
//! This module provides settings persistence, loading, and updating
//! for the document generator.

use crate::export::ExportOptions;
use crate::file_io::{DirectoryTarget, OverwritePolicy};
use crate::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings file used when none is given explicitly
pub const DEFAULT_SETTINGS_FILE: &str = "will-me.json";

/// Keys accepted by [`GeneratorSettings::set`]
pub const SETTING_KEYS: [&str; 5] = [
    "output.directory",
    "output.overwrite",
    "document.author",
    "document.font-family",
    "document.font-size",
];

/// Main settings container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Where generated files go
    pub output: OutputSettings,
    /// Package-level document settings
    pub document: DocumentSettings,
}

impl GeneratorSettings {
    /// Export options derived from the document settings
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            creator: self.document.author.clone(),
            created: None,
            font_family: self.document.default_font_family.clone(),
            font_size: self.document.default_font_size,
        }
    }

    /// Change one setting by its dotted key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |reason: &str| StoreError::InvalidSetting {
            key: key.to_string(),
            reason: reason.to_string(),
        };

        match key {
            "output.directory" => {
                if value.trim().is_empty() {
                    return Err(invalid("directory must not be empty"));
                }
                self.output.directory = PathBuf::from(value);
            }
            "output.overwrite" => {
                self.output.overwrite = match value {
                    "keep-both" => OverwritePolicy::KeepBoth,
                    "replace" => OverwritePolicy::Replace,
                    "fail" => OverwritePolicy::Fail,
                    _ => return Err(invalid("expected keep-both, replace or fail")),
                };
            }
            "document.author" => self.document.author = value.to_string(),
            "document.font-family" => {
                if value.trim().is_empty() {
                    return Err(invalid("font family must not be empty"));
                }
                self.document.default_font_family = value.to_string();
            }
            "document.font-size" => {
                let size: f32 = value
                    .parse()
                    .map_err(|_| invalid("expected a number of points"))?;
                if !(1.0..=1638.0).contains(&size) {
                    return Err(invalid("size must be between 1 and 1638 points"));
                }
                self.document.default_font_size = size;
            }
            _ => {
                return Err(invalid(&format!("known keys are {}", SETTING_KEYS.join(", "))));
            }
        }
        Ok(())
    }

    /// Directory target configured from the output settings
    pub fn directory_target(&self) -> DirectoryTarget {
        DirectoryTarget::new(self.output.directory.clone()).with_policy(self.output.overwrite)
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory generated documents are saved into
    pub directory: PathBuf,
    /// Behavior when a file with the same name already exists
    pub overwrite: OverwritePolicy,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            overwrite: OverwritePolicy::KeepBoth,
        }
    }
}

/// Document settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DocumentSettings {
    /// Author recorded in the document properties
    pub author: String,
    /// Default font family for text without explicit formatting
    pub default_font_family: String,
    /// Default font size in points
    pub default_font_size: f32,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            author: "Will-Me".to_string(),
            default_font_family: "Arial".to_string(),
            default_font_size: 12.0,
        }
    }
}

/// Settings manager for loading, saving, and updating settings
pub struct SettingsManager {
    /// Path to the settings file
    settings_path: PathBuf,
    /// Current settings (cached)
    current: GeneratorSettings,
}

impl SettingsManager {
    /// Create a settings manager for a settings file
    pub fn with_path(settings_path: PathBuf) -> Self {
        Self {
            settings_path,
            current: GeneratorSettings::default(),
        }
    }

    /// Get the path to the settings file
    pub fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    /// Load settings from disk, or return defaults if file doesn't exist
    pub async fn load(&mut self) -> Result<&GeneratorSettings> {
        self.current = if self.settings_path.exists() {
            let content = tokio::fs::read_to_string(&self.settings_path).await?;
            parse_or_default(&content)
        } else {
            GeneratorSettings::default()
        };
        Ok(&self.current)
    }

    /// Save current settings to disk
    pub async fn save(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(&self.current)?;
        tokio::fs::write(&self.settings_path, content).await?;
        tracing::debug!("Saved settings to {:?}", self.settings_path);
        Ok(())
    }

    /// Get current settings
    pub fn get(&self) -> &GeneratorSettings {
        &self.current
    }

    /// Update settings and save to disk
    pub async fn update(&mut self, settings: GeneratorSettings) -> Result<()> {
        self.current = settings;
        self.save().await
    }

    /// Reset settings to defaults and save
    pub async fn reset(&mut self) -> Result<&GeneratorSettings> {
        self.current = GeneratorSettings::default();
        self.save().await?;
        Ok(&self.current)
    }
}

fn parse_or_default(content: &str) -> GeneratorSettings {
    match serde_json::from_str::<GeneratorSettings>(content) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to parse settings file, using defaults: {}", e);
            GeneratorSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = GeneratorSettings::default();

        assert_eq!(settings.output.directory, PathBuf::from("."));
        assert_eq!(settings.output.overwrite, OverwritePolicy::KeepBoth);
        assert_eq!(settings.document.author, "Will-Me");
        assert_eq!(settings.document.default_font_family, "Arial");
        assert_eq!(settings.document.default_font_size, 12.0);
    }

    #[test]
    fn test_export_options_follow_document_settings() {
        let mut settings = GeneratorSettings::default();
        settings.document.author = "Smith & Co".to_string();
        settings.document.default_font_size = 11.0;

        let options = settings.export_options();
        assert_eq!(options.creator, "Smith & Co");
        assert_eq!(options.font_size, 11.0);
        assert_eq!(options.created, None);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: GeneratorSettings =
            serde_json::from_str(r#"{"output":{"overwrite":"replace"}}"#).unwrap();
        assert_eq!(parsed.output.overwrite, OverwritePolicy::Replace);
        assert_eq!(parsed.output.directory, PathBuf::from("."));
        assert_eq!(parsed.document, DocumentSettings::default());
    }

    #[tokio::test]
    async fn test_invalid_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_SETTINGS_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        let mut manager = SettingsManager::with_path(path);
        assert_eq!(manager.load().await.unwrap(), &GeneratorSettings::default());
    }

    #[tokio::test]
    async fn test_settings_manager_update_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(DEFAULT_SETTINGS_FILE);
        let mut manager = SettingsManager::with_path(path.clone());

        assert_eq!(manager.load().await.unwrap(), &GeneratorSettings::default());

        let mut new_settings = GeneratorSettings::default();
        new_settings.output.directory = PathBuf::from("/tmp/wills");
        new_settings.output.overwrite = OverwritePolicy::Fail;
        new_settings.document.default_font_family = "Calibri".to_string();
        manager.update(new_settings).await.unwrap();

        let mut manager2 = SettingsManager::with_path(path);
        let loaded = manager2.load().await.unwrap();
        assert_eq!(loaded.output.directory, PathBuf::from("/tmp/wills"));
        assert_eq!(loaded.output.overwrite, OverwritePolicy::Fail);
        assert_eq!(loaded.document.default_font_family, "Calibri");
    }

    #[tokio::test]
    async fn test_settings_manager_reset() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_SETTINGS_FILE);
        let mut manager = SettingsManager::with_path(path.clone());

        let mut new_settings = GeneratorSettings::default();
        new_settings.document.author = "Someone".to_string();
        manager.update(new_settings).await.unwrap();

        let settings = manager.reset().await.unwrap();
        assert_eq!(settings.document.author, "Will-Me");
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains(r#""author": "Will-Me""#));
    }

    #[test]
    fn test_set_by_key() {
        let mut settings = GeneratorSettings::default();
        settings.set("output.directory", "wills").unwrap();
        settings.set("output.overwrite", "replace").unwrap();
        settings.set("document.author", "Smith & Co").unwrap();
        settings.set("document.font-family", "Calibri").unwrap();
        settings.set("document.font-size", "11").unwrap();

        assert_eq!(settings.output.directory, PathBuf::from("wills"));
        assert_eq!(settings.output.overwrite, OverwritePolicy::Replace);
        assert_eq!(settings.document.author, "Smith & Co");
        assert_eq!(settings.document.default_font_family, "Calibri");
        assert_eq!(settings.document.default_font_size, 11.0);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut settings = GeneratorSettings::default();
        for (key, value) in [
            ("output.overwrite", "sometimes"),
            ("document.font-size", "big"),
            ("document.font-size", "0"),
            ("output.directory", " "),
            ("output.colour", "red"),
        ] {
            assert!(
                matches!(settings.set(key, value), Err(StoreError::InvalidSetting { .. })),
                "{} = {} accepted",
                key,
                value
            );
        }
        assert_eq!(settings, GeneratorSettings::default());
    }
}
