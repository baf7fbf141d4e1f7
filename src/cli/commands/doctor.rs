//! Doctor command implementation.
//!
//! The `fontcull doctor` command reports the external tools fontcull
//! drives, optionally installing the missing ones.

use crate::cli::args::DoctorArgs;
use crate::error::Result;
use crate::requirements::registry::REQUIRED_TOOLS;
use crate::requirements::{check_all, ToolProbe, ToolReport, ToolStatus};
use crate::ui::theme::FontcullTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::tools::resolve_tools;

/// The doctor command implementation.
pub struct DoctorCommand {
    args: DoctorArgs,
}

impl DoctorCommand {
    /// Create a new doctor command.
    pub fn new(args: DoctorArgs) -> Self {
        Self { args }
    }
}

/// One report line.
pub fn describe(report: &ToolReport) -> String {
    let purpose = REQUIRED_TOOLS
        .iter()
        .find(|def| def.name == report.tool)
        .map(|def| def.purpose)
        .unwrap_or_default();
    match &report.status {
        ToolStatus::Found { path } | ToolStatus::Installed { path } => {
            format!("{:<7} {} ({})", report.tool, path.display(), purpose)
        }
        ToolStatus::Missing {
            formula: Some(formula),
        } => format!(
            "{:<7} missing, install with `brew install {}`",
            report.tool, formula
        ),
        ToolStatus::Missing { formula: None } => {
            format!("{:<7} missing, see https://brew.sh", report.tool)
        }
    }
}

impl Command for DoctorCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Required tools");

        if self.args.fix {
            resolve_tools(ui, &self.args.prefix)?;
            ui.success("All required tools are available");
            return Ok(CommandResult::success());
        }

        let probe = ToolProbe::new(vec![self.args.prefix.join("bin")]);
        let reports = check_all(&|tool: &str| probe.locate(tool));
        let theme = FontcullTheme::detect();

        let mut missing = 0;
        for report in &reports {
            if report.status.is_available() {
                ui.message(&theme.format_success(&describe(report)));
            } else {
                missing += 1;
                ui.message(&theme.format_error(&describe(report)));
            }
        }

        if missing == 0 {
            ui.success("All required tools are available");
            Ok(CommandResult::success())
        } else {
            ui.show_hint("Run `fontcull doctor --fix` to install the missing tools");
            Ok(CommandResult::failure(1))
        }
    }
}
