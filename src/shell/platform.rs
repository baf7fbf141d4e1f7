//! Platform detection and the default document opener.

use std::path::Path;

use crate::error::{FontcullError, Result};

use super::command::{display_command, execute};
use super::CommandOptions;

/// Check if running in a CI environment.
///
/// Used to auto-detect CI and force non-interactive mode in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Check if running as root/admin.
///
/// Homebrew refuses to run as root, so preflight warns about it.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(windows)]
    {
        std::env::var("ADMIN").is_ok()
    }

    #[cfg(not(any(unix, windows)))]
    {
        false
    }
}

/// Program used to hand a document to the desktop's default handler.
pub fn opener_program() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Opens generated documents for the user.
pub trait DocumentOpener {
    /// Open `path` in the user's default viewer.
    fn open(&self, path: &Path) -> Result<()>;
}

/// Opens documents with `open` (macOS) or `xdg-open`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl DocumentOpener for SystemOpener {
    fn open(&self, path: &Path) -> Result<()> {
        let program = opener_program();
        let target = path.to_string_lossy();
        let result = execute(program, &[target.as_ref()], &CommandOptions::default())?;
        if result.success {
            Ok(())
        } else {
            Err(FontcullError::CommandFailed {
                command: display_command(program, &[target.as_ref()]),
                code: result.exit_code,
            })
        }
    }
}
