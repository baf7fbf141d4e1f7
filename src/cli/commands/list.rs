//! List command implementation.
//!
//! The `fontcull list` command prints installed, available and missing
//! font casks for a keyword.

use crate::cli::args::ListArgs;
use crate::error::{FontcullError, Result};
use crate::inventory::{take_inventory, BrewRepository, Inventory};
use crate::requirements::ToolProbe;
use crate::ui::theme::FontcullTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

/// Print an inventory for people.
pub fn show_inventory(ui: &mut dyn UserInterface, inventory: &Inventory) {
    let theme = FontcullTheme::detect();
    let installed = |name: &String| inventory.installed.binary_search(name).is_ok();

    ui.show_header(&format!("Font casks matching '{}'", inventory.keyword));
    for name in &inventory.available {
        if installed(name) {
            ui.message(&theme.format_success(name));
        } else {
            ui.message(&theme.format_skipped(name));
        }
    }
    // Installed casks outside the searchable set still count
    for name in &inventory.installed {
        if inventory.available.binary_search(name).is_err() {
            ui.message(&theme.format_success(name));
        }
    }
    ui.message(&format!(
        "{} installed, {} available, {} missing",
        inventory.installed.len(),
        inventory.available.len(),
        inventory.missing.len()
    ));
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.args.to_config()?;

        let probe = ToolProbe::new(vec![config.brew_bin()]);
        let locate = |tool: &str| {
            probe.locate(tool).ok_or_else(|| FontcullError::ToolMissing {
                tool: tool.to_string(),
                message: "run `fontcull doctor` for details".to_string(),
            })
        };
        let repo = BrewRepository::new(locate("brew")?, locate("rg")?);

        let inventory = take_inventory(&repo, &config)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&inventory).map_err(anyhow::Error::from)?;
            println!("{}", json);
        } else {
            show_inventory(ui, &inventory);
        }

        Ok(CommandResult::success())
    }
}
