//! Tool lookup on PATH.
//!
//! Homebrew's `bin` directory is frequently missing from PATH in
//! non-login shells, so the probe searches it in addition to the
//! system PATH.
//!
//! # Example
//!
//! ```no_run
//! use fontcull::requirements::probe::ToolProbe;
//! use std::path::PathBuf;
//!
//! let probe = ToolProbe::new(vec![PathBuf::from("/opt/homebrew/bin")]);
//! if let Some(path) = probe.locate("brew") {
//!     println!("brew at {}", path.display());
//! }
//! ```

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command, whose behavior varies across systems.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Looks tools up on the system PATH plus extra directories.
#[derive(Debug, Clone)]
pub struct ToolProbe {
    search_path: Vec<PathBuf>,
}

impl ToolProbe {
    /// Probe the system PATH followed by `extra` directories.
    pub fn new(extra: Vec<PathBuf>) -> Self {
        let mut search_path = parse_system_path();
        for dir in extra {
            if !search_path.contains(&dir) {
                search_path.push(dir);
            }
        }
        Self { search_path }
    }

    /// Probe exactly the given directories (for testing).
    pub fn with_path(search_path: Vec<PathBuf>) -> Self {
        Self { search_path }
    }

    /// Directories searched, in order.
    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// Find `tool`, or `None` if it is not installed.
    pub fn locate(&self, tool: &str) -> Option<PathBuf> {
        let found = resolve_tool_path(tool, &self.search_path);
        tracing::debug!("Probe for '{}': {:?}", tool, found);
        found
    }
}
