//! Initialize data directory use case

use crate::domain::LogHistory;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, LogStore, Workspace};
use std::fs;
use std::path::Path;

/// Initialize a new lifeos data directory at the specified path.
pub fn init(path: &Path) -> Result<FileSystemRepository> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let mut repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new())?;
    repo.replace_all(LogHistory::new())?;

    tracing::info!(root = %path.display(), "Initialized lifeos directory");
    Ok(repo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_config_and_empty_log() {
        let temp = TempDir::new().unwrap();
        let repo = init(temp.path()).unwrap();

        assert!(temp.path().join(".lifeos/config.toml").exists());
        assert!(temp.path().join(".lifeos/logs.json").exists());
        assert!(repo.get_all().unwrap().is_empty());
        assert_eq!(repo.load_config().unwrap().chart_days, 30);
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("nested").join("life");

        init(&target).unwrap();
        assert!(target.join(".lifeos").is_dir());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
