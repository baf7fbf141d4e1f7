//! External program execution.
//!
//! Every tool fontcull drives (`brew`, `magick`, `rg`, `fd`, the document
//! opener) is spawned directly with an argv vector, never through a shell,
//! so package names and label text need no quoting.

use crate::error::{FontcullError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Result of executing an external program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Non-empty trimmed stdout lines.
    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Data written to the child's stdin, which is closed afterwards.
    pub stdin: Option<String>,

    /// Append stdout and stderr to this file instead of capturing them.
    pub log_file: Option<PathBuf>,
}

/// Render an argv vector for messages and logs.
pub fn display_command(program: &str, args: &[&str]) -> String {
    let mut parts = vec![program.to_string()];
    for arg in args {
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            parts.push(format!("{:?}", arg));
        } else {
            parts.push((*arg).to_string());
        }
    }
    parts.join(" ")
}

/// Run `program` with `args` and wait for it to finish.
///
/// A non-zero exit is reported through [`CommandResult::success`], not as an
/// error. `Err` means the program could not be started at all.
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let shown = display_command(program, args);
    tracing::debug!("Executing: {}", shown);

    let mut cmd = Command::new(program);
    cmd.args(args);

    let logging = match &options.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let err_file = file.try_clone()?;
            cmd.stdout(Stdio::from(file));
            cmd.stderr(Stdio::from(err_file));
            true
        }
        None => {
            cmd.stdout(Stdio::piped());
            cmd.stderr(Stdio::piped());
            false
        }
    };

    if options.stdin.is_some() {
        cmd.stdin(Stdio::piped());
    } else {
        cmd.stdin(Stdio::null());
    }

    let mut child = cmd.spawn().map_err(|e| {
        tracing::debug!("Failed to spawn {}: {}", program, e);
        FontcullError::CommandFailed {
            command: shown.clone(),
            code: None,
        }
    })?;

    // Written while the child's output is being read
    let writer = match (&options.stdin, child.stdin.take()) {
        (Some(input), Some(mut pipe)) => {
            let input = input.clone();
            Some(thread::spawn(move || pipe.write_all(input.as_bytes())))
        }
        _ => None,
    };

    let output = child
        .wait_with_output()
        .map_err(|_| FontcullError::CommandFailed {
            command: shown.clone(),
            code: None,
        })?;

    if let Some(handle) = writer {
        // Broken pipe when the child exits without reading all input
        if let Ok(Err(e)) = handle.join() {
            tracing::debug!("Writing stdin to {} failed: {}", program, e);
        }
    }

    let duration = start.elapsed();
    let (stdout, stderr) = if logging {
        (String::new(), String::new())
    } else {
        (
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    };

    tracing::debug!(
        "{} exited with {:?} after {:?}",
        shown,
        output.status.code(),
        duration
    );

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Run a program and require a zero exit status.
pub fn execute_checked(
    program: &str,
    args: &[&str],
    options: &CommandOptions,
) -> Result<CommandResult> {
    let result = execute(program, args, options)?;
    if result.success {
        Ok(result)
    } else {
        Err(FontcullError::CommandFailed {
            command: display_command(program, args),
            code: result.exit_code,
        })
    }
}
