//! External process invocation
//!
//! Each build or install step is a scoped spawn-wait-capture: the child is
//! spawned with a fixed working directory, the orchestrator blocks until it
//! exits, and stdout/stderr are fully captured before the exit status is
//! classified. The process handle is released on every path, including
//! failure.

use std::path::PathBuf;
use std::process::Command;

/// A fully-specified external command: program, arguments, working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program name, resolved via PATH
    pub program: String,
    /// Arguments, in order
    pub args: Vec<String>,
    /// Working directory for the child process
    pub cwd: PathBuf,
}

impl CommandSpec {
    /// Create a new command spec
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = String>,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().collect(),
            cwd: cwd.into(),
        }
    }

    /// Render the command line for logs and error messages
    pub fn display(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Outcome of a completed external command
#[derive(Debug)]
pub struct CapturedRun {
    /// Exit code, or `None` if the process was killed by a signal
    pub exit_code: Option<i32>,
    /// Combined captured output: stdout followed by stderr
    pub output: String,
}

impl CapturedRun {
    /// Whether the process exited with status zero
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Run a command to completion, capturing its output
///
/// Returns `Err` only when the process could not be started; a non-zero
/// exit is a successful capture and is classified by the caller.
pub fn run(spec: &CommandSpec) -> std::io::Result<CapturedRun> {
    tracing::debug!(command = %spec.display(), cwd = %spec.cwd.display(), "Running command");

    let output = Command::new(&spec.program)
        .args(&spec.args)
        .current_dir(&spec.cwd)
        .output()?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok(CapturedRun {
        exit_code: output.status.code(),
        output: combined,
    })
}
