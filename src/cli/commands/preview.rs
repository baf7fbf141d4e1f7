//! Preview command implementation.
//!
//! The `fontcull preview` command runs the whole pipeline against the
//! real tools: preflight, inventory, installs, rendering, gallery.

use crate::cli::args::PreviewArgs;
use crate::error::Result;
use crate::inventory::BrewRepository;
use crate::render::{FdLocator, MagickRasterizer};
use crate::runner::{pick_for_removal, run_preview, PreviewOutcome, Services};
use crate::shell::SystemOpener;
use crate::ui::{FontcullTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::tools::resolve_tools;

/// The preview command implementation.
pub struct PreviewCommand {
    args: PreviewArgs,
}

impl PreviewCommand {
    /// Create a new preview command.
    pub fn new(args: PreviewArgs) -> Self {
        Self { args }
    }
}

impl Command for PreviewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.args.to_config()?;
        let tools = resolve_tools(ui, &config.brew_prefix)?;

        let repo = BrewRepository::new(tools.brew, tools.rg);
        let locator = FdLocator::new(tools.fd);
        let rasterizer = MagickRasterizer::new(tools.magick);
        let opener = SystemOpener;
        let services = Services {
            repo: &repo,
            locator: &locator,
            rasterizer: &rasterizer,
            opener: &opener,
        };

        match run_preview(&config, &services, ui)? {
            PreviewOutcome::Declined => {
                ui.message("Nothing to preview.");
            }
            PreviewOutcome::Published { state, .. } => {
                if self.args.pick && ui.is_interactive() {
                    let selection = pick_for_removal(ui, &state.montages)?;
                    if selection.is_empty() {
                        ui.message("No fonts picked.");
                    } else {
                        let theme = FontcullTheme::detect();
                        let command = theme.command.apply_to(selection.command());
                        ui.message(&command.to_string());
                    }
                }
            }
        }

        Ok(CommandResult::success())
    }
}
