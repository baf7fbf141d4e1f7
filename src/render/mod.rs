//! Preview rendering.
//!
//! For each package: find its font files, draw one glyph sample per file
//! into a per-package staging directory, then stack the samples into a
//! single montage at `<output_dir>/<package>.png`. Only montages survive.
//!
//! - [`locator`] - The [`FontLocator`] capability and its `fd` implementation
//! - [`rasterizer`] - The [`Rasterizer`] capability and its `magick` implementation

pub mod locator;
pub mod rasterizer;

pub use locator::{FdLocator, FontLocator, FONT_EXTENSIONS};
pub use rasterizer::{escape_label, MagickRasterizer, Rasterizer, GLYPH_SAMPLE, MONTAGE_GAP};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{FontcullError, Result};
use crate::ui::UserInterface;

/// The final preview image of one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Montage {
    /// Cask name.
    pub package: String,
    /// Montage image path.
    pub image: PathBuf,
}

/// Remove and recreate the staging directory.
pub fn reset_staging(dir: &Path) -> Result<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir)?;
    }
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Pick a sample file name for `font`, unique within one package.
///
/// The stem doubles as the montage label, so it is kept when possible.
fn sample_name(font: &Path, used: &mut HashSet<String>) -> String {
    let stem = font
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "font".to_string());

    let mut name = stem.clone();
    let mut n = 2;
    while !used.insert(name.clone()) {
        name = format!("{}-{}", stem, n);
        n += 1;
    }
    format!("{}.png", name)
}

/// Render and montage one package.
///
/// Returns `Ok(None)` when the package has no font files.
pub fn render_package(
    config: &Config,
    package: &str,
    locator: &dyn FontLocator,
    rasterizer: &dyn Rasterizer,
    ui: &mut dyn UserInterface,
) -> Result<Option<Montage>> {
    let fonts = locator.locate(&config.install_dir(package))?;
    let mut spinner = ui.start_spinner(&format!("Rendering {}...", package));
    if fonts.is_empty() {
        spinner.finish_skipped(&format!("Skipped {}", package));
        ui.warning(&format!("No font files found for {}, skipping", package));
        return Ok(None);
    }

    let staging = config.staging_dir(package);
    std::fs::create_dir_all(&staging)?;

    let mut used = HashSet::new();
    let mut images = Vec::with_capacity(fonts.len());
    let mut failures = Vec::new();

    for font in &fonts {
        let image = staging.join(sample_name(font, &mut used));
        spinner.set_message(&format!("Rendering {} ({})", package, image.display()));
        match rasterizer.render_sample(font, &config.style, &image) {
            Ok(()) => images.push(image),
            Err(e) => {
                tracing::debug!("Rendering {} failed: {}", font.display(), e);
                failures.push(font);
            }
        }
    }

    if images.is_empty() {
        spinner.finish_error(&format!("Could not render {}", package));
        return Err(FontcullError::RenderFailed {
            package: package.to_string(),
        });
    }

    let output = config.montage_path(package);
    if let Err(e) = rasterizer.montage(&images, &output) {
        spinner.finish_error(&format!("Could not assemble {}", package));
        return Err(e);
    }
    std::fs::remove_dir_all(&staging)?;

    spinner.finish_success(&format!("Rendered {} ({} fonts)", package, images.len()));
    for font in failures {
        ui.warning(&format!("Could not render {}", font.display()));
    }

    Ok(Some(Montage {
        package: package.to_string(),
        image: output,
    }))
}

/// Render every package in `preview`, in order.
///
/// Fails with `RenderFailed` if a package has fonts but no sample renders,
/// and with `NothingToPreview` if no package produced a montage.
pub fn render_previews(
    config: &Config,
    preview: &[String],
    locator: &dyn FontLocator,
    rasterizer: &dyn Rasterizer,
    ui: &mut dyn UserInterface,
) -> Result<Vec<Montage>> {
    reset_staging(&config.output_dir)?;

    let mut montages = Vec::with_capacity(preview.len());
    for package in preview {
        if let Some(montage) = render_package(config, package, locator, rasterizer, ui)? {
            montages.push(montage);
        }
    }

    if montages.is_empty() {
        return Err(FontcullError::NothingToPreview);
    }
    tracing::info!("Rendered {} of {} packages", montages.len(), preview.len());
    Ok(montages)
}
