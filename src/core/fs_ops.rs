// src/core/fs_ops.rs
//! File system helpers with error context.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::app_log;

pub struct FsOps;

impl FsOps {
    /// Ensure directory exists
    pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            app_log!(info, "Created directory: {}", path.display());
        }
        Ok(())
    }

    pub async fn read_file_safe(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Write file, creating parent directories as needed
    pub async fn write_file_safe(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Self::ensure_dir_exists(parent).await?;
        }

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        app_log!(info, "Written file: {}", path.display());
        Ok(())
    }

    /// Immediate subdirectories of `dir`, empty when `dir` does not exist.
    pub async fn list_subdirs(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();

        if !dir.exists() {
            app_log!(warn, "Directory does not exist: {}", dir.display());
            return Ok(dirs);
        }

        let mut entries = fs::read_dir(dir)
            .await
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.is_dir() {
                dirs.push(path);
            }
        }

        dirs.sort();
        Ok(dirs)
    }

    /// Resolve `relative` against `base` unless it is already absolute
    pub fn normalize_path(base: &Path, relative: &Path) -> PathBuf {
        if relative.is_absolute() {
            relative.to_path_buf()
        } else {
            base.join(relative)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/resume.tex");
        FsOps::write_file_safe(&path, "\\documentclass{article}").await.unwrap();
        assert_eq!(
            FsOps::read_file_safe(&path).await.unwrap(),
            "\\documentclass{article}"
        );
    }

    #[tokio::test]
    async fn test_list_subdirs_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FsOps::list_subdirs(&dir.path().join("nope")).await.unwrap().is_empty());
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            FsOps::normalize_path(Path::new("/srv"), Path::new("templates")),
            PathBuf::from("/srv/templates")
        );
        assert_eq!(
            FsOps::normalize_path(Path::new("/srv"), Path::new("/opt/t")),
            PathBuf::from("/opt/t")
        );
    }
}
