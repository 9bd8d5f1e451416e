//! CLI argument definitions using clap
//!
//! Commands:
//! - jsonbox init [--mode <mode>] [--db <path>]
//! - jsonbox serve [--mode <mode>] [--db <path>] [--port <port>]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DeploymentMode;

/// jsonbox - a minimal, self-hostable JSON drop box
#[derive(Parser, Debug)]
#[command(name = "jsonbox")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database file and ensure the drops table exists
    Init {
        /// Deployment mode selecting the default database path
        #[arg(long, value_enum, default_value = "development")]
        mode: DeploymentMode,

        /// Explicit database path, overriding the mode default
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Start the HTTP server
    Serve {
        /// Deployment mode selecting the default database path
        #[arg(long, value_enum, default_value = "development")]
        mode: DeploymentMode,

        /// Explicit database path, overriding the mode default
        #[arg(long)]
        db: Option<PathBuf>,

        /// Port to listen on
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
