//! Path management for Budget Pro
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGETPRO_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budgetpro` or `~/.config/budgetpro`
//! 3. Windows: `%APPDATA%\budgetpro`

use std::path::PathBuf;

use crate::error::BudgetError;

/// Manages all paths used by Budget Pro
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Base directory for all Budget Pro data
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Create a new BudgetPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = if let Ok(custom) = std::env::var("BUDGETPRO_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/budgetpro/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/budgetpro/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to demandes.json
    pub fn demandes_file(&self) -> PathBuf {
        self.data_dir().join("demandes.json")
    }

    /// Get the path to depenses.json
    pub fn depenses_file(&self) -> PathBuf {
        self.data_dir().join("depenses.json")
    }

    /// Get the path to operations.json
    pub fn operations_file(&self) -> PathBuf {
        self.data_dir().join("operations.json")
    }

    /// Get the path to campagnes.json
    pub fn campagnes_file(&self) -> PathBuf {
        self.data_dir().join("campagnes.json")
    }

    /// Get the path to services.json
    pub fn services_file(&self) -> PathBuf {
        self.data_dir().join("services.json")
    }

    /// Get the path to utilisateurs.json
    pub fn utilisateurs_file(&self) -> PathBuf {
        self.data_dir().join("utilisateurs.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Budget Pro has been initialized (referential data exists)
    pub fn is_initialized(&self) -> bool {
        self.services_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| BudgetError::Config("Could not determine home directory".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("budgetpro"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BudgetError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("budgetpro"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.demandes_file(), temp_dir.path().join("data/demandes.json"));
        assert_eq!(paths.depenses_file(), temp_dir.path().join("data/depenses.json"));
        assert_eq!(
            paths.utilisateurs_file(),
            temp_dir.path().join("data/utilisateurs.json")
        );
    }
}
