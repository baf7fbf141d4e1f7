//! Font cask inventory.
//!
//! - [`repository`] - The [`PackageRepository`] capability
//! - [`brew`] - Its Homebrew implementation
//! - [`differ`] - Installed/available/missing set arithmetic

pub mod brew;
pub mod differ;
pub mod repository;

pub use brew::{brew_version, install_formula, BrewRepository};
pub use differ::{missing, normalize, Inventory};
pub use repository::PackageRepository;

use crate::config::Config;
use crate::error::Result;

/// List installed and available casks for the configured keyword.
pub fn take_inventory(repo: &dyn PackageRepository, config: &Config) -> Result<Inventory> {
    let installed = repo.installed(&config.installed_pattern())?;
    let available = repo.available(&config.available_pattern())?;
    let inventory = Inventory::new(&config.keyword, installed, available);
    tracing::debug!(
        "Inventory: {} installed, {} available, {} missing",
        inventory.installed.len(),
        inventory.available.len(),
        inventory.missing.len()
    );
    Ok(inventory)
}
