//! Workspace root discovery and layout scaffolding
//!
//! A workspace is any directory containing a `src/` subtree. Packages live
//! under `src/`; build artifacts are installed into a shared `install/`
//! destination next to it.

use std::path::{Path, PathBuf};

use crate::config::defaults::{INSTALL_DIR, SRC_DIR};
use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Find the workspace root by walking upward until a directory containing
/// `src/` is found
pub fn find_workspace_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(SRC_DIR).is_dir() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Source subtree of a workspace
pub fn src_dir(workspace_root: &Path) -> PathBuf {
    workspace_root.join(SRC_DIR)
}

/// Install destination of a workspace
pub fn install_dir(workspace_root: &Path) -> PathBuf {
    workspace_root.join(INSTALL_DIR)
}

/// Create the install destination, returning its path
///
/// The destination is shared by all packages and persists after the run.
pub fn setup_workspace(workspace_root: &Path) -> Result<PathBuf, FilesystemError> {
    let install = install_dir(workspace_root);
    filesystem::create_dir_all(&install)?;
    Ok(install)
}
