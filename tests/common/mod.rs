//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// Test workspace context
///
/// Creates a temporary workspace directory and provides utilities for
/// populating its source tree with packages.
pub struct TestWorkspace {
    /// Temporary directory for the workspace
    pub dir: TempDir,
}

impl TestWorkspace {
    /// Create a new empty workspace with a `src/` subtree
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        std::fs::create_dir_all(dir.path().join("src")).expect("Failed to create src");
        Self { dir }
    }

    /// Get the path to the workspace root
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Add a package under `src/` with the given dependencies and marker files
    pub fn add_package(&self, name: &str, deps: &[&str], markers: &[&str]) {
        let pkg_dir = self.dir.path().join("src").join(name);
        std::fs::create_dir_all(&pkg_dir).expect("Failed to create package dir");

        let depends: String = deps
            .iter()
            .map(|d| format!("  <depend>{d}</depend>\n"))
            .collect();
        let manifest = format!(
            "<?xml version=\"1.0\"?>\n<package format=\"3\">\n  <name>{name}</name>\n{depends}</package>\n"
        );
        std::fs::write(pkg_dir.join("package.xml"), manifest).expect("Failed to write manifest");

        for marker in markers {
            std::fs::write(pkg_dir.join(marker), "").expect("Failed to write marker");
        }
    }

    /// Write a raw file into the workspace
    pub fn create_file(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the workspace
    pub fn file_exists(&self, rel: &str) -> bool {
        self.dir.path().join(rel).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
