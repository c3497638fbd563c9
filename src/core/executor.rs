//! Backend build/install execution
//!
//! Translates (package, backend, install destination) into the backend's
//! external command sequences and drives them through [`crate::infra::process`].
//! Command construction is pure and separately testable; nothing is spawned
//! for an unknown backend.
//!
//! Backend asymmetry: the python build step writes its artifacts directly
//! into the install destination (`--build-lib`), so the python install step
//! is a no-op. Only the cmake backend has a distinct install invocation,
//! against the same build tree the build step used.

use std::path::Path;

use crate::config::defaults::{BUILD_DIR, PYTHON_SITE_PACKAGES};
use crate::core::package::{Backend, Package};
use crate::error::BuildError;
use crate::infra::process::{self, CommandSpec};

/// Build command sequence for a package
///
/// Fails with [`BuildError::UnsupportedBackend`] for an unknown backend,
/// before any process is spawned.
pub fn build_commands(package: &Package, install_dir: &Path) -> Result<Vec<CommandSpec>, BuildError> {
    let build_dir = package.path().join(BUILD_DIR);
    match package.backend() {
        Backend::CMake => Ok(vec![
            CommandSpec::new(
                "cmake",
                vec![
                    package.path().display().to_string(),
                    "-B".to_string(),
                    build_dir.display().to_string(),
                    format!("-DCMAKE_INSTALL_PREFIX={}", install_dir.display()),
                ],
                package.path(),
            ),
            CommandSpec::new(
                "cmake",
                vec!["--build".to_string(), build_dir.display().to_string()],
                package.path(),
            ),
        ]),
        Backend::PythonSetup => Ok(vec![CommandSpec::new(
            "python",
            vec![
                "setup.py".to_string(),
                "build".to_string(),
                "--build-base".to_string(),
                build_dir.display().to_string(),
                "--build-lib".to_string(),
                install_dir.join(PYTHON_SITE_PACKAGES).display().to_string(),
            ],
            package.path(),
        )]),
        Backend::Unknown => Err(BuildError::UnsupportedBackend {
            package: package.name().to_string(),
            path: package.path().to_path_buf(),
        }),
    }
}

/// Install command sequence for a package
///
/// Empty for the python backend (see module docs); fails for an unknown
/// backend before any process is spawned.
pub fn install_commands(
    package: &Package,
    _install_dir: &Path,
) -> Result<Vec<CommandSpec>, BuildError> {
    let build_dir = package.path().join(BUILD_DIR);
    match package.backend() {
        Backend::CMake => Ok(vec![CommandSpec::new(
            "cmake",
            vec!["--install".to_string(), build_dir.display().to_string()],
            package.path(),
        )]),
        Backend::PythonSetup => Ok(Vec::new()),
        Backend::Unknown => Err(BuildError::UnsupportedBackend {
            package: package.name().to_string(),
            path: package.path().to_path_buf(),
        }),
    }
}

/// Run the build step for a package
pub fn build_package(package: &Package, install_dir: &Path) -> Result<(), BuildError> {
    tracing::info!("Building {} package: {}", package.backend(), package.name());
    for spec in build_commands(package, install_dir)? {
        let run = run_step(package, &spec)?;
        if !run.success() {
            return Err(BuildError::BuildFailed {
                package: package.name().to_string(),
                backend: package.backend(),
                exit_code: run.exit_code,
                output: run.output,
            });
        }
        tracing::debug!("Build output:\n{}", run.output);
    }
    Ok(())
}

/// Run the install step for a package
pub fn install_package(package: &Package, install_dir: &Path) -> Result<(), BuildError> {
    let steps = install_commands(package, install_dir)?;
    if steps.is_empty() {
        tracing::debug!("Install is a no-op for {}", package.name());
        return Ok(());
    }
    tracing::info!("Installing {} package: {}", package.backend(), package.name());
    for spec in steps {
        let run = run_step(package, &spec)?;
        if !run.success() {
            return Err(BuildError::InstallFailed {
                package: package.name().to_string(),
                backend: package.backend(),
                exit_code: run.exit_code,
                output: run.output,
            });
        }
        tracing::debug!("Install output:\n{}", run.output);
    }
    Ok(())
}

fn run_step(package: &Package, spec: &CommandSpec) -> Result<process::CapturedRun, BuildError> {
    process::run(spec).map_err(|e| BuildError::Spawn {
        package: package.name().to_string(),
        command: spec.display(),
        error: e.to_string(),
    })
}
