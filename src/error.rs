//! Error types for wsbuild
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::package::Backend;

/// Workspace discovery and layout errors
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// The path is not inside a workspace (no `src/` directory found upward)
    #[error("Not in a workspace (no 'src' directory found from '{path}'). Run from within a workspace or pass a path.")]
    NotAWorkspace { path: PathBuf },

    /// No packages were discovered under the source tree
    #[error("No packages found in '{path}'")]
    NoPackagesFound { path: PathBuf },
}

/// Manifest (package.xml) errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest exists but cannot be read or parsed
    #[error("Failed to parse package.xml in '{path}': {error}")]
    Parse { path: PathBuf, error: String },
}

/// Dependency resolution errors
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Circular or otherwise unresolvable dependency set
    #[error("Circular or unresolvable dependencies among packages: {}", .packages.join(", "))]
    CircularDependency { packages: Vec<String> },
}

/// Build and install step errors
#[derive(Error, Debug)]
pub enum BuildError {
    /// Package has no recognized build backend
    #[error("Unsupported build backend for package '{package}' at '{path}'")]
    UnsupportedBackend { package: String, path: PathBuf },

    /// External build command exited non-zero (exit code -1: killed by signal)
    #[error("Build failed for package '{package}' ({backend}, exit code {code}):\n{output}", code = .exit_code.unwrap_or(-1))]
    BuildFailed {
        package: String,
        backend: Backend,
        exit_code: Option<i32>,
        output: String,
    },

    /// External install command exited non-zero (exit code -1: killed by signal)
    #[error("Install failed for package '{package}' ({backend}, exit code {code}):\n{output}", code = .exit_code.unwrap_or(-1))]
    InstallFailed {
        package: String,
        backend: Backend,
        exit_code: Option<i32>,
        output: String,
    },

    /// External command could not be started at all
    #[error("Failed to run '{command}' for package '{package}': {error}")]
    Spawn {
        package: String,
        command: String,
        error: String,
    },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to set file permissions
    #[error("Failed to set permissions on '{path}': {error}")]
    SetPermissions { path: PathBuf, error: String },
}

/// Top-level wsbuild error type
#[derive(Error, Debug)]
pub enum WsbuildError {
    /// Workspace error
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    /// Manifest error
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Resolver error
    #[error(transparent)]
    Resolver(#[from] ResolverError),

    /// Build error
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Filesystem error
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}
