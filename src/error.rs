//! Error types for fontcull operations.
//!
//! This module defines [`FontcullError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Per-package failures (a cask that will not install, a cask with no font
//!   files) are caught at the loop that owns them and reported as warnings
//! - Everything else propagates with `?` and aborts the run with exit code 1
//! - Use `anyhow::Error` (via `FontcullError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fontcull operations.
#[derive(Debug, Error)]
pub enum FontcullError {
    /// A required external tool is not installed and was not installed for us.
    #[error("Missing required tool '{tool}': {message}")]
    ToolMissing { tool: String, message: String },

    /// An external command could not be spawned or exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// `brew install --cask` failed for a single package.
    #[error("Failed to install '{package}' (see {log})")]
    InstallFailed { package: String, log: PathBuf },

    /// A package had font files but none of them could be rendered.
    #[error("No preview images were rendered for '{package}'")]
    RenderFailed { package: String },

    /// No package produced a montage.
    #[error("Nothing to preview: no font previews were generated")]
    NothingToPreview,

    /// Invalid command-line or environment configuration.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A prompt was required but the session cannot ask it.
    #[error("Cannot prompt for '{key}' in non-interactive mode (no default value)")]
    PromptUnavailable { key: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for fontcull operations.
pub type Result<T> = std::result::Result<T, FontcullError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_missing_displays_tool_and_message() {
        let err = FontcullError::ToolMissing {
            tool: "magick".into(),
            message: "installation declined".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("magick"));
        assert!(msg.contains("installation declined"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = FontcullError::CommandFailed {
            command: "brew list --cask -1".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("brew list --cask -1"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn install_failed_points_at_log() {
        let err = FontcullError::InstallFailed {
            package: "font-fira-mono".into(),
            log: PathBuf::from("/tmp/fontcull-install-errors.log"),
        };
        let msg = err.to_string();
        assert!(msg.contains("font-fira-mono"));
        assert!(msg.contains("/tmp/fontcull-install-errors.log"));
    }

    #[test]
    fn render_failed_displays_package() {
        let err = FontcullError::RenderFailed {
            package: "font-iosevka-mono".into(),
        };
        assert!(err.to_string().contains("font-iosevka-mono"));
    }

    #[test]
    fn nothing_to_preview_mentions_previews() {
        assert!(FontcullError::NothingToPreview
            .to_string()
            .contains("Nothing to preview"));
    }

    #[test]
    fn prompt_unavailable_displays_key() {
        let err = FontcullError::PromptUnavailable {
            key: "install_fd".into(),
        };
        assert!(err.to_string().contains("install_fd"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: FontcullError = io_err.into();
        assert!(matches!(err, FontcullError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: FontcullError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
