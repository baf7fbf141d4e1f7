//! Wiring preflight to the real system.

use std::path::Path;

use crate::error::Result;
use crate::inventory::{brew_version, install_formula};
use crate::requirements::{run_preflight, PreflightContext, ResolvedTools, ToolProbe};
use crate::shell::is_elevated;
use crate::ui::UserInterface;

/// Probe `PATH` and `<prefix>/bin`, offering to install missing tools.
pub fn resolve_tools(ui: &mut dyn UserInterface, prefix: &Path) -> Result<ResolvedTools> {
    let probe = ToolProbe::new(vec![prefix.join("bin")]);

    let locate = |tool: &str| probe.locate(tool);
    let install = |formula: &str| match probe.locate("brew") {
        Some(brew) => match install_formula(&brew, formula) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("brew install {} failed: {}", formula, e);
                false
            }
        },
        None => false,
    };
    let version = || probe.locate("brew").and_then(|brew| brew_version(&brew));

    let ctx = PreflightContext {
        locate: &locate,
        install_formula: &install,
        brew_version: &version,
        elevated: is_elevated(),
    };
    run_preflight(ui, &ctx)
}
