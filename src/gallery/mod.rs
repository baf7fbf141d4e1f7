//! The HTML gallery.
//!
//! A single static page: one section per montage with a checkbox, and a
//! script that turns the checked boxes into an uninstall command.

pub mod html;
pub mod selection;

pub use html::{escape_html, render_gallery};
pub use selection::{Selection, UNINSTALL_COMMAND};

use std::path::Path;

use crate::error::Result;
use crate::render::Montage;

/// Write the gallery page for `montages` to `path`.
pub fn write_gallery(path: &Path, keyword: &str, montages: &[Montage]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_gallery(keyword, montages))?;
    tracing::debug!("Wrote gallery to {}", path.display());
    Ok(())
}
