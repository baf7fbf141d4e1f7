//! State carried between pipeline phases.

use std::path::PathBuf;

use crate::install::InstallReport;
use crate::inventory::Inventory;
use crate::render::Montage;

/// Everything a preview run has learned so far.
///
/// Each phase takes the state by value or `&mut` and hands it on; no
/// phase keeps its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    /// Installed, available and missing casks.
    pub inventory: Inventory,
    /// Packages to render, in order.
    pub preview: Vec<String>,
    /// Results of the install pass, empty when it was skipped.
    pub installs: InstallReport,
    /// Rendered montages, filled by the render phase.
    pub montages: Vec<Montage>,
}

impl RunState {
    /// Start from an inventory with an initial preview set.
    pub fn new(inventory: Inventory, preview: Vec<String>) -> Self {
        Self {
            inventory,
            preview,
            installs: InstallReport::default(),
            montages: Vec::new(),
        }
    }
}

/// How a preview run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// No install succeeded and the user declined to preview installed fonts.
    Declined,
    /// The gallery was written.
    Published {
        /// Gallery page path.
        html: PathBuf,
        /// Final run state.
        state: RunState,
    },
}
