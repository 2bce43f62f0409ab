use std::io::ErrorKind;
use std::path::Path;

use super::error::{InvokerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    File,
    Directory,
}

/// A search target that existed when it was validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// The path exactly as the caller gave it; this is what grep receives.
    pub path: String,
    pub kind: TargetKind,
}

impl Target {
    pub fn is_dir(&self) -> bool {
        self.kind == TargetKind::Directory
    }
}

/// Stat `path` (relative paths resolve against the current directory) and classify it.
pub async fn validate_target(path: &str) -> Result<Target> {
    if path.is_empty() {
        return Err(InvokerError::PathNotFound(path.to_string()));
    }
    let resolved = std::path::absolute(Path::new(path))
        .map_err(|_| InvokerError::InvalidPath(path.to_string()))?;

    match tokio::fs::metadata(&resolved).await {
        Ok(meta) => Ok(Target {
            path: path.to_string(),
            kind: if meta.is_dir() {
                TargetKind::Directory
            } else {
                TargetKind::File
            },
        }),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(InvokerError::PathNotFound(path.to_string()))
        }
        Err(err) => {
            log::debug!("stat {} failed: {err}", resolved.display());
            Err(InvokerError::InvalidPath(path.to_string()))
        }
    }
}

/// Like [`validate_target`], but only directories are accepted.
pub async fn validate_directory(path: &str) -> Result<Target> {
    let target = validate_target(path).await?;
    if !target.is_dir() {
        return Err(InvokerError::NotADirectory(target.path));
    }
    Ok(target)
}
