//! Build pipeline orchestration
//!
//! Drives scanning, resolution, and per-package build+install in resolved
//! order. The pipeline is a one-directional state machine:
//!
//! ```text
//! Scanning -> Resolving -> Processing(i) -> Done
//!                  \            \--------> Failed
//!                   \---------------------> Failed
//! ```
//!
//! The first failure aborts the whole run: no later package is processed and
//! nothing already installed is rolled back. The activation script is
//! generated exactly once, after every package has succeeded.

use std::path::{Path, PathBuf};

use crate::core::environment;
use crate::core::executor;
use crate::core::package::{Backend, Package};
use crate::core::resolver::{self, BuildOrder};
use crate::core::scanner;
use crate::core::workspace;
use crate::error::{BuildError, WorkspaceError, WsbuildError};

/// Pipeline state, advanced by [`Pipeline::prepare`], [`Pipeline::process_next`]
/// and [`Pipeline::finish`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Discovering packages under the source tree
    Scanning,
    /// Computing the build order
    Resolving,
    /// Building and installing package at this position of the order
    Processing(usize),
    /// All packages processed and the activation script written
    Done,
    /// Aborted; the error was returned to the caller
    Failed,
}

/// Sequential build pipeline over one workspace
#[derive(Debug)]
pub struct Pipeline {
    workspace_root: PathBuf,
    install_dir: PathBuf,
    state: PipelineState,
    order: BuildOrder,
    next: usize,
}

impl Pipeline {
    /// Create a pipeline, scaffolding the install destination
    pub fn new(workspace_root: &Path) -> Result<Self, WsbuildError> {
        let install_dir = workspace::setup_workspace(workspace_root)?;
        Ok(Self {
            workspace_root: workspace_root.to_path_buf(),
            install_dir,
            state: PipelineState::Scanning,
            order: BuildOrder::default(),
            next: 0,
        })
    }

    /// Current state
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Shared install destination
    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// Resolved build order; empty until [`Pipeline::prepare`] succeeds
    pub fn order(&self) -> &BuildOrder {
        &self.order
    }

    /// Scan the source tree and resolve the build order
    ///
    /// Zero discovered packages, a manifest parse failure, or an
    /// unresolvable dependency set each fail the run before any build
    /// starts.
    pub fn prepare(&mut self) -> Result<&BuildOrder, WsbuildError> {
        debug_assert_eq!(self.state, PipelineState::Scanning);

        let src = workspace::src_dir(&self.workspace_root);
        let locations = scanner::scan_packages(&src);
        if locations.is_empty() {
            self.state = PipelineState::Failed;
            return Err(WorkspaceError::NoPackagesFound { path: src }.into());
        }
        tracing::info!("Found {} packages", locations.len());

        let mut packages = Vec::with_capacity(locations.len());
        for location in locations {
            match Package::discover(location) {
                Ok(package) => packages.push(package),
                Err(e) => {
                    self.state = PipelineState::Failed;
                    return Err(e.into());
                }
            }
        }

        self.state = PipelineState::Resolving;
        match resolver::resolve(packages) {
            Ok(order) => {
                self.order = order;
                self.state = PipelineState::Processing(0);
                Ok(&self.order)
            }
            Err(e) => {
                self.state = PipelineState::Failed;
                Err(e.into())
            }
        }
    }

    /// Build and install the next package in the order
    ///
    /// Returns the processed package's name, or `None` when every package
    /// has been processed. Backend detection fails fast on an unknown
    /// backend, before anything is spawned.
    pub fn process_next(&mut self) -> Result<Option<String>, WsbuildError> {
        let Some(resolved) = self.order.get(self.next) else {
            return Ok(None);
        };
        let package = &resolved.package;
        tracing::info!(
            "Processing package {}/{}: {}",
            self.next + 1,
            self.order.len(),
            package.name()
        );

        if package.backend() == Backend::Unknown {
            self.state = PipelineState::Failed;
            return Err(BuildError::UnsupportedBackend {
                package: package.name().to_string(),
                path: package.path().to_path_buf(),
            }
            .into());
        }

        if let Err(e) = executor::build_package(package, &self.install_dir) {
            self.state = PipelineState::Failed;
            return Err(e.into());
        }
        if let Err(e) = executor::install_package(package, &self.install_dir) {
            self.state = PipelineState::Failed;
            return Err(e.into());
        }

        let name = package.name().to_string();
        tracing::info!("Successfully completed {name}");
        self.next += 1;
        self.state = PipelineState::Processing(self.next);
        Ok(Some(name))
    }

    /// Write the activation script once everything has been processed
    pub fn finish(&mut self) -> Result<(), WsbuildError> {
        debug_assert_eq!(self.next, self.order.len());
        environment::generate_setup_script(&self.workspace_root, &self.install_dir)?;
        self.state = PipelineState::Done;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn workspace_with_packages(defs: &[(&str, &[&str], &[&str])]) -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp directory");
        for (name, deps, markers) in defs {
            let pkg_dir = dir.path().join("src").join(name);
            std::fs::create_dir_all(&pkg_dir).expect("Failed to create package dir");
            let depends: String = deps
                .iter()
                .map(|d| format!("<depend>{d}</depend>"))
                .collect();
            std::fs::write(
                pkg_dir.join("package.xml"),
                format!("<package format=\"3\"><name>{name}</name>{depends}</package>"),
            )
            .expect("Failed to write manifest");
            for marker in *markers {
                std::fs::write(pkg_dir.join(marker), "").expect("Failed to write marker");
            }
        }
        dir
    }

    #[test]
    fn test_empty_workspace_fails_with_no_packages() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        std::fs::create_dir_all(dir.path().join("src")).expect("Failed to create src");

        let mut pipeline = Pipeline::new(dir.path()).expect("pipeline should construct");
        let err = pipeline.prepare().expect_err("no packages should fail");
        assert!(matches!(
            err,
            WsbuildError::Workspace(WorkspaceError::NoPackagesFound { .. })
        ));
        assert_eq!(pipeline.state(), PipelineState::Failed);
    }

    #[test]
    fn test_resolution_error_prevents_processing() {
        let dir = workspace_with_packages(&[
            ("a", &["b"], &["CMakeLists.txt"]),
            ("b", &["a"], &["CMakeLists.txt"]),
        ]);

        let mut pipeline = Pipeline::new(dir.path()).expect("pipeline should construct");
        let err = pipeline.prepare().expect_err("cycle should fail resolution");
        assert!(matches!(err, WsbuildError::Resolver(_)));
        assert_eq!(pipeline.state(), PipelineState::Failed);
        assert!(pipeline.order().is_empty());
    }

    #[test]
    fn test_manifest_error_fails_before_resolving() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let pkg_dir = dir.path().join("src").join("broken");
        std::fs::create_dir_all(&pkg_dir).expect("Failed to create package dir");
        std::fs::write(pkg_dir.join("package.xml"), "<package><depend>oops")
            .expect("Failed to write manifest");

        let mut pipeline = Pipeline::new(dir.path()).expect("pipeline should construct");
        let err = pipeline.prepare().expect_err("malformed manifest should fail");
        assert!(matches!(err, WsbuildError::Manifest(_)));
        assert_eq!(pipeline.state(), PipelineState::Failed);
    }

    #[test]
    fn test_unknown_backend_fails_fast_and_stops_pipeline() {
        // no_backend resolves first (discovery order tie-break is walk order,
        // but the dependency makes it unambiguous): it must fail before the
        // second package is ever touched.
        let dir = workspace_with_packages(&[
            ("no_backend", &[], &[]),
            ("later", &["no_backend"], &["CMakeLists.txt"]),
        ]);

        let mut pipeline = Pipeline::new(dir.path()).expect("pipeline should construct");
        pipeline.prepare().expect("resolution should succeed");
        assert_eq!(pipeline.order().len(), 2);

        let err = pipeline
            .process_next()
            .expect_err("unknown backend should fail fast");
        assert!(matches!(
            err,
            WsbuildError::Build(BuildError::UnsupportedBackend { .. })
        ));
        assert!(err.to_string().contains("no_backend"));
        assert_eq!(pipeline.state(), PipelineState::Failed);

        // No activation script: the pipeline never reached finish().
        assert!(!pipeline.install_dir().join("setup.bash").exists());
    }

    #[test]
    fn test_prepare_reports_build_order() {
        let dir = workspace_with_packages(&[
            ("app", &["lib"], &["CMakeLists.txt"]),
            ("lib", &[], &["CMakeLists.txt"]),
        ]);

        let mut pipeline = Pipeline::new(dir.path()).expect("pipeline should construct");
        let order = pipeline.prepare().expect("resolution should succeed");
        assert_eq!(order.names(), vec!["lib", "app"]);
        assert_eq!(pipeline.state(), PipelineState::Processing(0));
    }
}
