//! CLI command dispatch
//!
//! `init` prepares the database and exits; `serve` prepares the database,
//! installs the tracing subscriber, and runs the HTTP server on a tokio
//! runtime until interrupted.

use std::fs;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;
use crate::http::{HttpServer, HttpServerConfig};
use crate::store::DropStore;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Init { mode, db } => init(Config::resolve(mode, db)),
        Command::Serve { mode, db, port } => serve(Config::resolve(mode, db), port),
    }
}

/// Create the database file and ensure the schema
fn init(config: Config) -> CliResult<()> {
    prepare_store(&config)?;
    println!("initialized drop database at {}", config.db_path().display());
    Ok(())
}

/// Start the HTTP server
fn serve(config: Config, port: u16) -> CliResult<()> {
    init_tracing();

    let store = prepare_store(&config)?;
    tracing::info!(
        db = %config.db_path().display(),
        mode = ?config.mode(),
        "drop database ready"
    );

    let server = HttpServer::with_config(store, HttpServerConfig::with_port(port));
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}

/// Resolve the database path, create its parent directory if needed, and
/// ensure the schema before any operation runs
fn prepare_store(config: &Config) -> CliResult<DropStore> {
    if let Some(parent) = config.db_path().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let store = DropStore::new(config);
    store.ensure_schema()?;
    Ok(store)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeploymentMode;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_store_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let config = Config::resolve(
            DeploymentMode::Development,
            Some(dir.path().join("nested/deep/box.db")),
        );

        prepare_store(&config).unwrap();
        assert!(dir.path().join("nested/deep").is_dir());
    }

    #[test]
    fn test_prepare_store_is_repeatable() {
        let dir = TempDir::new().unwrap();
        let config = Config::resolve(DeploymentMode::Development, Some(dir.path().join("box.db")));

        prepare_store(&config).unwrap();
        prepare_store(&config).unwrap();
    }
}
