//! Path management for budget-pacer
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_PACER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budget-pacer` or `~/.config/budget-pacer`
//! 3. Windows: `%APPDATA%\budget-pacer`

use std::path::PathBuf;

use crate::error::{PacerError, PacerResult};

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "BUDGET_PACER_DATA_DIR";

/// Manages all paths used by budget-pacer
#[derive(Debug, Clone)]
pub struct PacerPaths {
    base_dir: PathBuf,
}

impl PacerPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> PacerResult<Self> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PacerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Ledger files live here
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    pub fn income_file(&self) -> PathBuf {
        self.data_dir().join("income.json")
    }

    /// Saving goals and their deposits
    pub fn savings_file(&self) -> PathBuf {
        self.data_dir().join("savings.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> PacerResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PacerError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PacerError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Whether `pacer init` has written a config file here
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> PacerResult<PathBuf> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                PacerError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("budget-pacer"))
}

#[cfg(windows)]
fn resolve_default_path() -> PacerResult<PathBuf> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PacerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("budget-pacer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PacerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = PacerPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PacerPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PacerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let data = temp_dir.path().join("data");

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(paths.categories_file(), data.join("categories.json"));
        assert_eq!(paths.income_file(), data.join("income.json"));
        assert_eq!(paths.savings_file(), data.join("savings.json"));
    }
}
