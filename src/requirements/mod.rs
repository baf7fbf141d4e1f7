//! Preflight checks for the external tools fontcull drives.
//!
//! # Modules
//!
//! - [`registry`] - The required tools and the formulas that provide them
//! - [`probe`] - PATH lookup
//! - [`checker`] - Side-effect-free tool checks
//! - [`installer`] - Interactive remediation of missing tools
//! - [`status`] - Tool status types

pub mod checker;
pub mod installer;
pub mod probe;
pub mod registry;
pub mod status;

pub use checker::{check_all, parse_brew_version};
pub use installer::{run_preflight, PreflightContext};
pub use probe::ToolProbe;
pub use status::{ResolvedTools, ToolReport, ToolStatus};
