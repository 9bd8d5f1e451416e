//! Process configuration
//!
//! The only configuration surface for the store is the deployment-mode
//! switch, which selects the database path. The config is built once at
//! startup in the CLI layer and passed by reference; there is no global
//! mutable state.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Default database path when running under the production mode.
pub const PRODUCTION_DB_PATH: &str = "/var/local/jsonbox/box.db";

/// Default database path when running locally.
pub const DEVELOPMENT_DB_PATH: &str = "box.db";

/// Deployment mode selecting where the database file lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeploymentMode {
    /// Local development: database in the working directory
    Development,
    /// Deployed service: database under /var/local
    Production,
}

impl DeploymentMode {
    /// Returns the default database path for this mode
    pub fn default_db_path(&self) -> PathBuf {
        match self {
            DeploymentMode::Development => PathBuf::from(DEVELOPMENT_DB_PATH),
            DeploymentMode::Production => PathBuf::from(PRODUCTION_DB_PATH),
        }
    }
}

/// Resolved process configuration
#[derive(Debug, Clone)]
pub struct Config {
    mode: DeploymentMode,
    db_path: PathBuf,
}

impl Config {
    /// Create a config for the given mode with its default database path
    pub fn for_mode(mode: DeploymentMode) -> Self {
        Self {
            mode,
            db_path: mode.default_db_path(),
        }
    }

    /// Create a config, honoring an explicit database path override
    pub fn resolve(mode: DeploymentMode, db_override: Option<PathBuf>) -> Self {
        Self {
            mode,
            db_path: db_override.unwrap_or_else(|| mode.default_db_path()),
        }
    }

    /// Returns the deployment mode
    pub fn mode(&self) -> DeploymentMode {
        self.mode
    }

    /// Returns the database file path
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}
