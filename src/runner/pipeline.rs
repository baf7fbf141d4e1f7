//! The preview pipeline: inventory, install, render, publish.

use crate::config::Config;
use crate::error::Result;
use crate::gallery::{write_gallery, Selection};
use crate::install::install_missing;
use crate::inventory::{normalize, take_inventory, PackageRepository};
use crate::render::{render_previews, FontLocator, Montage, Rasterizer};
use crate::shell::DocumentOpener;
use crate::ui::{Prompt, PromptOption, PromptType, UserInterface};

use super::state::{PreviewOutcome, RunState};

/// Prompt key for previewing installed fonts after every install failed.
pub const PREVIEW_INSTALLED_KEY: &str = "preview_installed";

/// Prompt key for the terminal removal picker.
pub const PICK_KEY: &str = "remove";

/// External capabilities the pipeline drives.
pub struct Services<'a> {
    /// Package listing and installation.
    pub repo: &'a dyn PackageRepository,
    /// Font file discovery.
    pub locator: &'a dyn FontLocator,
    /// Sample rendering and montage.
    pub rasterizer: &'a dyn Rasterizer,
    /// Opens the finished gallery.
    pub opener: &'a dyn DocumentOpener,
}

/// List casks and choose the initial preview set.
pub fn plan(
    config: &Config,
    repo: &dyn PackageRepository,
    ui: &mut dyn UserInterface,
) -> Result<RunState> {
    let inventory = take_inventory(repo, config)?;
    ui.message(&format!(
        "{} installed, {} available, {} missing",
        inventory.installed.len(),
        inventory.available.len(),
        inventory.missing.len()
    ));
    if ui.output_mode().shows_details() {
        for name in &inventory.missing {
            ui.message(&format!("  missing: {}", name));
        }
    }

    let preview = if config.install_missing {
        inventory.available.clone()
    } else {
        inventory.installed.clone()
    };
    Ok(RunState::new(inventory, preview))
}

/// Install missing casks, dropping failures from the preview set.
///
/// Returns `false` when every install failed and the user declined to
/// preview the installed fonts instead.
pub fn install(
    config: &Config,
    repo: &dyn PackageRepository,
    ui: &mut dyn UserInterface,
    state: &mut RunState,
) -> Result<bool> {
    if !config.install_missing {
        tracing::debug!("Skipping installs");
        return Ok(true);
    }
    if state.inventory.is_complete() {
        ui.message("Every matching font is already installed");
        return Ok(true);
    }

    state.installs = install_missing(
        repo,
        ui,
        &state.inventory.missing,
        &mut state.preview,
        &config.log_file,
    )?;

    if !state.installs.all_failed() {
        return Ok(true);
    }

    ui.warning(&format!(
        "None of the {} missing fonts could be installed (see {})",
        state.installs.attempted(),
        config.log_file.display()
    ));
    let fallback = ui.confirm(
        PREVIEW_INSTALLED_KEY,
        "Preview the fonts that are already installed instead?",
        false,
    )?;
    if !fallback {
        return Ok(false);
    }

    state.preview = normalize(repo.installed(&config.installed_pattern())?);
    Ok(true)
}

/// Render every package in the preview set.
pub fn render(
    config: &Config,
    services: &Services<'_>,
    ui: &mut dyn UserInterface,
    state: &mut RunState,
) -> Result<()> {
    state.montages = render_previews(
        config,
        &state.preview,
        services.locator,
        services.rasterizer,
        ui,
    )?;
    Ok(())
}

/// Write the gallery and hand it to the opener.
pub fn publish(
    config: &Config,
    opener: &dyn DocumentOpener,
    ui: &mut dyn UserInterface,
    state: &RunState,
) -> Result<()> {
    write_gallery(&config.html_file, &config.keyword, &state.montages)?;
    ui.success(&format!(
        "Gallery of {} fonts written to {}",
        state.montages.len(),
        config.html_file.display()
    ));

    if config.open_gallery {
        if let Err(e) = opener.open(&config.html_file) {
            tracing::debug!("Opening gallery failed: {}", e);
            ui.warning(&format!(
                "Could not open the gallery; open {} in a browser",
                config.html_file.display()
            ));
        }
    }

    ui.show_hint("Check the fonts to remove, copy the command, and run it in a terminal");
    Ok(())
}

/// Run the whole pipeline.
pub fn run_preview(
    config: &Config,
    services: &Services<'_>,
    ui: &mut dyn UserInterface,
) -> Result<PreviewOutcome> {
    ui.show_header(&format!("Previewing {} fonts", config.keyword));

    let mut state = plan(config, services.repo, ui)?;
    if !install(config, services.repo, ui, &mut state)? {
        return Ok(PreviewOutcome::Declined);
    }
    render(config, services, ui, &mut state)?;
    publish(config, services.opener, ui, &state)?;

    Ok(PreviewOutcome::Published {
        html: config.html_file.clone(),
        state,
    })
}

/// Ask which previewed fonts to remove, in the terminal.
pub fn pick_for_removal(ui: &mut dyn UserInterface, montages: &[Montage]) -> Result<Selection> {
    let prompt = Prompt {
        key: PICK_KEY.to_string(),
        question: "Fonts to uninstall".to_string(),
        prompt_type: PromptType::MultiSelect {
            options: montages
                .iter()
                .map(|m| PromptOption {
                    label: m.package.clone(),
                    value: m.package.clone(),
                })
                .collect(),
        },
        default: None,
    };
    let picked = ui.prompt(&prompt)?.into_strings();

    // Only names that were offered can be selected
    Ok(picked
        .iter()
        .filter(|name| montages.iter().any(|m| &m.package == *name))
        .collect())
}
