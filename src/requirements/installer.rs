//! Preflight: required tools, with a one-shot install offer.
//!
//! `brew` must already exist. For every other missing tool the user is
//! asked once whether to `brew install` it; declining, or an install
//! that fails or leaves the tool unfindable, aborts the run.

use std::path::PathBuf;

use crate::error::{FontcullError, Result};
use crate::requirements::checker::check_tool;
use crate::requirements::registry::{ToolDef, REQUIRED_TOOLS};
use crate::requirements::status::{ResolvedTools, ToolReport, ToolStatus};
use crate::ui::UserInterface;

/// Mockable dependencies for preflight.
pub struct PreflightContext<'a> {
    /// Find a tool, returning its path.
    pub locate: &'a dyn Fn(&str) -> Option<PathBuf>,
    /// Install a Homebrew formula, returning true on success.
    pub install_formula: &'a dyn Fn(&str) -> bool,
    /// Report `brew --version`, if it runs.
    pub brew_version: &'a dyn Fn() -> Option<String>,
    /// Whether the process runs as root.
    pub elevated: bool,
}

/// Check every required tool, offering to install missing ones.
///
/// Returns the resolved executables, or `ToolMissing` for the first tool
/// that could not be made available.
pub fn run_preflight(
    ui: &mut dyn UserInterface,
    ctx: &PreflightContext<'_>,
) -> Result<ResolvedTools> {
    if ctx.elevated {
        ui.warning("Running as root: Homebrew refuses to install as root.");
    }

    let mut reports = Vec::with_capacity(REQUIRED_TOOLS.len());
    for def in REQUIRED_TOOLS {
        let report = check_tool(def, ctx.locate);
        let report = match report.status {
            ToolStatus::Missing { .. } => remediate(def, ui, ctx)?,
            _ => report,
        };

        if def.name == "brew" {
            match (ctx.brew_version)() {
                Some(version) => tracing::debug!("Homebrew version {}", version),
                None => ui.warning("Could not determine the Homebrew version."),
            }
        }

        reports.push(report);
    }

    ResolvedTools::from_reports(&reports).ok_or_else(|| FontcullError::ToolMissing {
        tool: "unknown".to_string(),
        message: "preflight did not resolve every tool".to_string(),
    })
}

fn remediate(
    def: &ToolDef,
    ui: &mut dyn UserInterface,
    ctx: &PreflightContext<'_>,
) -> Result<ToolReport> {
    let Some(formula) = def.formula else {
        return Err(FontcullError::ToolMissing {
            tool: def.name.to_string(),
            message: format!(
                "{} is required ({}). Install it from https://brew.sh",
                def.name, def.purpose
            ),
        });
    };

    ui.warning(&format!(
        "'{}' is not installed (needed for {}).",
        def.name, def.purpose
    ));

    let confirmed = ui.confirm(
        &format!("install_{}", def.name),
        &format!("Install {} with `brew install {}`?", def.name, formula),
        true,
    )?;

    if !confirmed {
        return Err(FontcullError::ToolMissing {
            tool: def.name.to_string(),
            message: format!("installation declined; run `brew install {}`", formula),
        });
    }

    let mut spinner = ui.start_spinner(&format!("Installing {}...", formula));
    if !(ctx.install_formula)(formula) {
        spinner.finish_error(&format!("brew install {} failed", formula));
        return Err(FontcullError::ToolMissing {
            tool: def.name.to_string(),
            message: format!("`brew install {}` failed", formula),
        });
    }

    match (ctx.locate)(def.name) {
        Some(path) => {
            spinner.finish_success(&format!("Installed {}", def.name));
            Ok(ToolReport {
                tool: def.name.to_string(),
                status: ToolStatus::Installed { path },
            })
        }
        None => {
            spinner.finish_error(&format!("{} still not found", def.name));
            Err(FontcullError::ToolMissing {
                tool: def.name.to_string(),
                message: format!(
                    "installed '{}' but '{}' is not on PATH; a shell restart may help",
                    formula, def.name
                ),
            })
        }
    }
}
