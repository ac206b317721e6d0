//! File system repository

use crate::domain::{DailyEntry, LogHistory};
use crate::error::{LifeosError, Result};
use crate::infrastructure::config::{CONFIG_FILE, DATA_DIR};
use crate::infrastructure::{Config, LogStore};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOGS_FILE: &str = "logs.json";
pub const ROOT_ENV: &str = "LIFEOS_ROOT";

/// Abstract repository for workspace-level operations
pub trait Workspace {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .lifeos/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .lifeos/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .lifeos directory exists
    fn is_initialized(&self) -> bool;

    /// Create .lifeos directory structure
    fn initialize(&self) -> Result<()>;
}

/// Logs and config stored under `<root>/.lifeos/`
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the data root: LIFEOS_ROOT first, then walk up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                tracing::debug!(root = %path.display(), "Using LIFEOS_ROOT");
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(LifeosError::Config(format!(
                    "LIFEOS_ROOT is set to '{}' but no .lifeos directory found. \
                    Run 'lifeos init' in that directory or unset LIFEOS_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the data root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_data_dir(&current) {
                tracing::debug!(root = %current.display(), "Discovered lifeos directory");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(LifeosError::NotLifeosDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }

    pub fn logs_path(&self) -> PathBuf {
        self.root.join(DATA_DIR).join(LOGS_FILE)
    }

    /// Write to a temp file next to the destination, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the destination is removed first.
    fn write_atomic(path: &Path, content: &str) -> Result<()> {
        let tmp_name = format!(
            "{}.lifeos-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or(LOGS_FILE),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl Workspace for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let data_dir = self.root.join(DATA_DIR);

        if data_dir.exists() {
            return Err(LifeosError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&data_dir)?;
        Ok(())
    }
}

impl LogStore for FileSystemRepository {
    /// A missing logs file reads as an empty history
    fn get_all(&self) -> Result<LogHistory> {
        if !Self::has_data_dir(&self.root) {
            return Err(LifeosError::NotLifeosDirectory(self.root.clone()));
        }

        let path = self.logs_path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(LogHistory::new()),
            Err(e) => return Err(LifeosError::Io(e)),
        };

        if contents.trim().is_empty() {
            return Ok(LogHistory::new());
        }

        let entries: Vec<DailyEntry> = serde_json::from_str(&contents)?;
        tracing::debug!(entries = entries.len(), "Loaded log history");
        Ok(LogHistory::from_entries(entries))
    }

    fn replace_all(&mut self, history: LogHistory) -> Result<()> {
        if !Self::has_data_dir(&self.root) {
            return Err(LifeosError::NotLifeosDirectory(self.root.clone()));
        }

        let contents = serde_json::to_string_pretty(&history)?;
        Self::write_atomic(&self.logs_path(), &contents)?;
        tracing::debug!(entries = history.len(), "Saved log history");
        Ok(())
    }
}
