//! Infrastructure layer
//!
//! Handles all I/O side effects: filesystem mutation and external processes.

pub mod filesystem;
pub mod process;
