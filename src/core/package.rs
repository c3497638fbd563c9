//! Package model and build backend detection
//!
//! A package is identified by its filesystem location; its display name is
//! the final path component. The declared dependency list is read from the
//! manifest exactly once, at discovery time. The build backend is detected
//! lazily from marker files and memoized.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::config::defaults::{CMAKE_MARKER, PYTHON_MARKERS};
use crate::core::manifest;
use crate::error::ManifestError;

/// Build backend of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// CMake project (CMakeLists.txt)
    CMake,
    /// Python build script (setup.py or pyproject.toml)
    PythonSetup,
    /// No recognized build descriptor
    Unknown,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::CMake => write!(f, "cmake"),
            Backend::PythonSetup => write!(f, "python"),
            Backend::Unknown => write!(f, "unknown"),
        }
    }
}

/// A discovered workspace package
#[derive(Debug, Clone)]
pub struct Package {
    path: PathBuf,
    name: String,
    dependencies: Vec<String>,
    backend: OnceLock<Backend>,
}

impl Package {
    /// Discover a package at a location returned by the scanner
    ///
    /// Reads the manifest once; the dependency list is reused for the rest
    /// of the run.
    pub fn discover(path: PathBuf) -> Result<Self, ManifestError> {
        let dependencies = manifest::read_dependencies(&path)?;
        let name = display_name(&path);
        tracing::debug!("Dependencies of {name}: {dependencies:?}");
        Ok(Self {
            path,
            name,
            dependencies,
            backend: OnceLock::new(),
        })
    }

    /// Package location (unique key)
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display name, derived from the location
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared dependency names, in manifest order
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Detected build backend, computed once and memoized
    pub fn backend(&self) -> Backend {
        *self.backend.get_or_init(|| detect_backend(&self.path))
    }

    #[cfg(test)]
    pub(crate) fn for_tests(name: &str, dependencies: &[&str]) -> Self {
        Self {
            path: PathBuf::from(format!("/ws/src/{name}")),
            name: name.to_string(),
            dependencies: dependencies.iter().map(ToString::to_string).collect(),
            backend: OnceLock::new(),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Classify a package location by marker-file presence, first match wins
fn detect_backend(path: &Path) -> Backend {
    if path.join(CMAKE_MARKER).is_file() {
        tracing::debug!("CMake backend detected for {}", path.display());
        return Backend::CMake;
    }
    if PYTHON_MARKERS.iter().any(|m| path.join(m).is_file()) {
        tracing::debug!("Python backend detected for {}", path.display());
        return Backend::PythonSetup;
    }
    tracing::debug!("No build backend detected for {}", path.display());
    Backend::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn package_with_files(files: &[&str]) -> (TempDir, Package) {
        let dir = TempDir::new().expect("Failed to create temp directory");
        std::fs::write(dir.path().join("package.xml"), "<package/>")
            .expect("Failed to write manifest");
        for file in files {
            std::fs::write(dir.path().join(file), "").expect("Failed to write marker");
        }
        let pkg = Package::discover(dir.path().to_path_buf()).expect("discover should succeed");
        (dir, pkg)
    }

    #[test]
    fn test_cmake_backend_detected() {
        let (_dir, pkg) = package_with_files(&["CMakeLists.txt"]);
        assert_eq!(pkg.backend(), Backend::CMake);
    }

    #[test]
    fn test_python_backend_detected() {
        let (_dir, pkg) = package_with_files(&["setup.py"]);
        assert_eq!(pkg.backend(), Backend::PythonSetup);

        let (_dir, pkg) = package_with_files(&["pyproject.toml"]);
        assert_eq!(pkg.backend(), Backend::PythonSetup);
    }

    #[test]
    fn test_cmake_takes_priority_over_python() {
        let (_dir, pkg) = package_with_files(&["CMakeLists.txt", "setup.py", "pyproject.toml"]);
        assert_eq!(pkg.backend(), Backend::CMake);
    }

    #[test]
    fn test_no_marker_is_unknown() {
        let (_dir, pkg) = package_with_files(&[]);
        assert_eq!(pkg.backend(), Backend::Unknown);
    }

    #[test]
    fn test_backend_is_memoized() {
        let (dir, pkg) = package_with_files(&["CMakeLists.txt"]);
        assert_eq!(pkg.backend(), Backend::CMake);

        // Removing the marker after the first query must not change the answer.
        std::fs::remove_file(dir.path().join("CMakeLists.txt")).expect("Failed to remove marker");
        assert_eq!(pkg.backend(), Backend::CMake);
    }

    #[test]
    fn test_display_name_from_location() {
        let (_dir, pkg) = package_with_files(&[]);
        assert_eq!(pkg.name(), pkg.path().file_name().unwrap().to_str().unwrap());
    }
}
