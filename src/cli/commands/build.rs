//! Build command implementation
//!
//! Implements `wsbuild build`: locate the workspace, scaffold the install
//! destination, and drive the pipeline to completion.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::output::{self, status};
use crate::core::pipeline::Pipeline;
use crate::core::workspace;
use crate::error::WorkspaceError;

/// Execute the build command
pub async fn execute(workspace_arg: Option<PathBuf>) -> Result<()> {
    let workspace_root = match workspace_arg {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            workspace::find_workspace_root(&cwd)
                .ok_or(WorkspaceError::NotAWorkspace { path: cwd })?
        }
    };
    tracing::info!(
        "Starting build process in workspace: {}",
        workspace_root.display()
    );

    let mut pipeline = Pipeline::new(&workspace_root)
        .with_context(|| format!("Failed to set up workspace {}", workspace_root.display()))?;

    let order = pipeline.prepare()?;
    tracing::info!("Build order determined: {:?}", order.names());

    let bar = output::create_build_bar(order.len() as u64);
    while let Some(name) = pipeline.process_next()? {
        bar.set_message(name);
        bar.inc(1);
    }
    pipeline.finish()?;
    bar.finish_and_clear();

    println!("{} Build complete!", status::SUCCESS);
    println!("  Packages built: {}", pipeline.order().len());
    println!(
        "  Source {} to use the workspace",
        pipeline.install_dir().join("setup.bash").display()
    );

    Ok(())
}
