//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, PreviewArgs};
use crate::error::{FontcullError, Result};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand means `preview` with its defaults.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Preview(args)) => {
                super::preview::PreviewCommand::new(args.clone()).execute(ui)
            }
            Some(Commands::Doctor(args)) => {
                super::doctor::DoctorCommand::new(args.clone()).execute(ui)
            }
            Some(Commands::List(args)) => super::list::ListCommand::new(args.clone()).execute(ui),
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::preview::PreviewCommand::new(default_preview_args()?).execute(ui),
        }
    }
}

/// Preview arguments when no subcommand was given, honoring env fallbacks.
fn default_preview_args() -> Result<PreviewArgs> {
    use clap::{Args, FromArgMatches};

    let command = PreviewArgs::augment_args(clap::Command::new("preview"));
    command
        .try_get_matches_from(["preview"])
        .and_then(|matches| PreviewArgs::from_arg_matches(&matches))
        .map_err(|e| FontcullError::ConfigValidationError {
            message: clap_message(&e),
        })
}

/// First line of a clap error, without its `error: ` prefix.
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.trim_start_matches("error: ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn default_preview_args_use_defaults() {
        let args = default_preview_args().unwrap();
        assert!(!args.skip_install);
        assert!(!args.pick);
        assert!(args.html.is_none());
    }

    #[test]
    fn clap_message_keeps_first_line_only() {
        use clap::Args;

        let err = PreviewArgs::augment_args(clap::Command::new("preview"))
            .try_get_matches_from(["preview", "--pointsize", "big"])
            .unwrap_err();
        let message = clap_message(&err);
        assert!(message.starts_with("invalid value 'big'"));
        assert!(!message.contains('\n'));
    }
}
