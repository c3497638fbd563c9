//! Workspace activation script generation
//!
//! After the whole pipeline succeeds, a `setup.bash` is written into the
//! install destination. Sourcing it extends the runtime search paths with the
//! destination's binary, library, and python package locations.

use std::path::{Path, PathBuf};

use crate::config::defaults::{PYTHON_SITE_PACKAGES, SETUP_SCRIPT};
use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Generate the activation script into the install destination
///
/// Called exactly once, after every package has built and installed
/// successfully. Returns the script path.
pub fn generate_setup_script(
    workspace_root: &Path,
    install_dir: &Path,
) -> Result<PathBuf, FilesystemError> {
    let script_path = install_dir.join(SETUP_SCRIPT);
    let content = render_setup_script(workspace_root);

    filesystem::write_file(&script_path, &content)?;
    filesystem::set_executable(&script_path)?;

    tracing::info!("Generated {}", script_path.display());
    Ok(script_path)
}

fn render_setup_script(workspace_root: &Path) -> String {
    format!(
        r#"#!/bin/bash

WORKSPACE_ROOT="{root}"
INSTALL_DIR="$WORKSPACE_ROOT/install"

if [ -z "$ROS_DISTRO" ]; then
    echo "Warning: ROS 2 environment not sourced"
fi

export PATH="$INSTALL_DIR/bin:$PATH"
export LD_LIBRARY_PATH="$INSTALL_DIR/lib:$LD_LIBRARY_PATH"
export PYTHONPATH="$INSTALL_DIR/{site_packages}:$PYTHONPATH"

for setup_file in "$INSTALL_DIR"/share/*/local_setup.bash; do
    if [ -f "$setup_file" ]; then
        source "$setup_file"
    fi
done
"#,
        root = workspace_root.display(),
        site_packages = PYTHON_SITE_PACKAGES,
    )
}
