//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the workspace
    Build {
        /// Path to the workspace (discovered from the current directory if
        /// not given)
        workspace: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        match self {
            Self::Build { workspace } => build::execute(workspace).await,
        }
    }
}
