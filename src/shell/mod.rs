//! External program execution and platform helpers.

pub mod command;
pub mod platform;

pub use command::{
    display_command, execute, execute_checked, CommandOptions, CommandResult,
};
pub use platform::{is_ci, is_elevated, opener_program, DocumentOpener, SystemOpener};
