//! Core business logic module
//!
//! This module contains the build pipeline's business logic. External side
//! effects (process spawning, filesystem mutation) go through [`crate::infra`].
//!
//! # Submodules
//!
//! - [`workspace`] - Workspace root discovery and layout scaffolding
//! - [`scanner`] - Package discovery under the source tree
//! - [`manifest`] - Manifest (package.xml) reading
//! - [`package`] - Package model and build backend detection
//! - [`resolver`] - Dependency resolution and build ordering
//! - [`executor`] - Backend build/install command execution
//! - [`pipeline`] - Build pipeline orchestration
//! - [`environment`] - Workspace activation script generation

pub mod environment;
pub mod executor;
pub mod manifest;
pub mod package;
pub mod pipeline;
pub mod resolver;
pub mod scanner;
pub mod workspace;
