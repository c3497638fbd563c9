//! wsbuild - Lightweight workspace build tool for ROS 2-style source trees
//!
//! This library provides the core functionality for building a multi-package
//! source workspace: package discovery, dependency-ordered resolution, and
//! sequential build/install orchestration into a shared install destination.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (resolution, orchestration)
//! - [`infra`] - Infrastructure layer (filesystem, external processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
