//! Application state

use std::path::{Path, PathBuf};
use store::{DirectoryTarget, GeneratorSettings, SettingsManager};
use templates::Registry;

/// Everything a command needs: the template registry and effective settings
pub struct AppState {
    pub registry: Registry,
    pub settings: GeneratorSettings,
}

impl AppState {
    /// Load settings from an optional settings file.
    ///
    /// Without a file the built-in defaults apply.
    pub async fn load(config: Option<&Path>) -> store::Result<Self> {
        let settings = match config {
            Some(path) => {
                let mut manager = SettingsManager::with_path(path.to_path_buf());
                manager.load().await?.clone()
            }
            None => GeneratorSettings::default(),
        };
        Ok(Self {
            registry: Registry::builtin(),
            settings,
        })
    }

    /// Apply a command-line output directory override
    pub fn with_output_dir(mut self, out: Option<PathBuf>) -> Self {
        if let Some(dir) = out {
            self.settings.output.directory = dir;
        }
        self
    }

    pub fn target(&self) -> DirectoryTarget {
        self.settings.directory_target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_without_config_uses_defaults() {
        let state = AppState::load(None).await.unwrap();
        assert_eq!(state.settings, GeneratorSettings::default());
        assert_eq!(state.registry.list_templates().len(), 2);
    }

    #[tokio::test]
    async fn test_load_config_and_override_output() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("will-me.json");
        std::fs::write(&path, r#"{"document": {"author": "Smith & Co"}}"#).unwrap();

        let state = AppState::load(Some(&path))
            .await
            .unwrap()
            .with_output_dir(Some(temp_dir.path().join("out")));

        assert_eq!(state.settings.document.author, "Smith & Co");
        assert_eq!(state.target().directory(), temp_dir.path().join("out"));
    }
}
