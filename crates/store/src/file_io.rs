//! Save targets for generated artifacts
//!
//! A save target is whatever receives the finished file: a directory on
//! disk for the CLI, or an in-memory sink for tests and embedding hosts.

use crate::export::ExportArtifact;
use crate::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What to do when the destination file already exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverwritePolicy {
    /// Keep the old file and save as "name (1).docx", "name (2).docx", ...
    #[default]
    KeepBoth,
    /// Replace the existing file
    Replace,
    /// Refuse to save
    Fail,
}

/// Where and under which name an artifact ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArtifact {
    pub file_name: String,
    /// Full path for disk targets
    pub location: Option<PathBuf>,
    pub size: usize,
}

/// Host-side receiver of a finished artifact
pub trait SaveTarget {
    fn save(&mut self, artifact: &ExportArtifact) -> Result<SavedArtifact>;
}

/// Saves artifacts into a directory
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    directory: PathBuf,
    policy: OverwritePolicy,
}

impl DirectoryTarget {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            policy: OverwritePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: OverwritePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Pick the final path for a suggested file name
    pub fn resolve_path(&self, suggested: &str) -> Result<PathBuf> {
        let name = sanitize_file_name(suggested)?;
        let candidate = self.directory.join(&name);
        if !candidate.exists() {
            return Ok(candidate);
        }

        match self.policy {
            OverwritePolicy::Replace => Ok(candidate),
            OverwritePolicy::Fail => Err(StoreError::AlreadyExists(candidate.display().to_string())),
            OverwritePolicy::KeepBoth => {
                let path = Path::new(&name);
                let stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| name.clone());
                let extension = path.extension().map(|e| e.to_string_lossy().into_owned());

                let mut counter = 1u32;
                loop {
                    let numbered = match extension {
                        Some(ref ext) => format!("{} ({}).{}", stem, counter, ext),
                        None => format!("{} ({})", stem, counter),
                    };
                    let candidate = self.directory.join(numbered);
                    if !candidate.exists() {
                        return Ok(candidate);
                    }
                    counter += 1;
                }
            }
        }
    }

    /// Save asynchronously
    pub async fn save_async(&self, artifact: &ExportArtifact) -> Result<SavedArtifact> {
        tokio::fs::create_dir_all(&self.directory).await?;
        let path = self.resolve_path(&artifact.file_name)?;
        let partial = partial_path(&path);

        tokio::fs::write(&partial, &artifact.bytes).await?;
        if let Err(e) = tokio::fs::rename(&partial, &path).await {
            let _ = tokio::fs::remove_file(&partial).await;
            return Err(e.into());
        }

        Ok(saved(&path, artifact))
    }
}

impl SaveTarget for DirectoryTarget {
    fn save(&mut self, artifact: &ExportArtifact) -> Result<SavedArtifact> {
        std::fs::create_dir_all(&self.directory)?;
        let path = self.resolve_path(&artifact.file_name)?;
        let partial = partial_path(&path);

        std::fs::write(&partial, &artifact.bytes)?;
        if let Err(e) = std::fs::rename(&partial, &path) {
            let _ = std::fs::remove_file(&partial);
            return Err(e.into());
        }

        Ok(saved(&path, artifact))
    }
}

/// Keeps artifacts in memory
#[derive(Debug, Default)]
pub struct MemoryTarget {
    saved: Vec<ExportArtifact>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn artifacts(&self) -> &[ExportArtifact] {
        &self.saved
    }

    pub fn last(&self) -> Option<&ExportArtifact> {
        self.saved.last()
    }

    pub fn take(&mut self) -> Vec<ExportArtifact> {
        std::mem::take(&mut self.saved)
    }
}

impl SaveTarget for MemoryTarget {
    fn save(&mut self, artifact: &ExportArtifact) -> Result<SavedArtifact> {
        self.saved.push(artifact.clone());
        Ok(SavedArtifact {
            file_name: artifact.file_name.clone(),
            location: None,
            size: artifact.len(),
        })
    }
}

/// Hand an artifact to a save target; the artifact is released afterwards
pub fn trigger_download<T: SaveTarget + ?Sized>(
    artifact: ExportArtifact,
    target: &mut T,
) -> Result<SavedArtifact> {
    let saved = target.save(&artifact)?;
    log_saved(&saved);
    Ok(saved)
}

/// Async variant of [`trigger_download`] for directory targets
pub async fn trigger_download_async(
    artifact: ExportArtifact,
    target: &DirectoryTarget,
) -> Result<SavedArtifact> {
    let saved = target.save_async(&artifact).await?;
    log_saved(&saved);
    Ok(saved)
}

/// Make a suggested name safe to use as a single path component
pub fn sanitize_file_name(name: &str) -> Result<String> {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed = replaced
        .trim_start_matches(|c: char| c == '.' || c.is_whitespace())
        .trim_end_matches(|c: char| c == '.' || c.is_whitespace());

    if trimmed.is_empty() {
        return Err(StoreError::InvalidFileName(name.to_string()));
    }
    Ok(trimmed.to_string())
}

fn partial_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.part", name))
}

fn saved(path: &Path, artifact: &ExportArtifact) -> SavedArtifact {
    SavedArtifact {
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| artifact.file_name.clone()),
        location: Some(path.to_path_buf()),
        size: artifact.len(),
    }
}

fn log_saved(saved: &SavedArtifact) {
    match saved.location {
        Some(ref path) => tracing::info!("Saved {} ({} bytes)", path.display(), saved.size),
        None => tracing::info!("Saved {} in memory ({} bytes)", saved.file_name, saved.size),
    }
}
