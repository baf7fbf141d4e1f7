//! The package manager as seen by the pipeline.

use std::path::Path;

use crate::error::Result;

/// Listing and installing font casks.
///
/// The production implementation is [`super::BrewRepository`]; tests
/// substitute in-memory fakes.
pub trait PackageRepository {
    /// Installed cask names matching `pattern`, in any order.
    fn installed(&self, pattern: &str) -> Result<Vec<String>>;

    /// Searchable cask names matching `pattern`, in any order.
    fn available(&self, pattern: &str) -> Result<Vec<String>>;

    /// Install one cask, appending its output to `log_file`.
    ///
    /// Failure is reported as `InstallFailed`; the caller decides whether it is fatal.
    fn install(&self, package: &str, log_file: &Path) -> Result<()>;
}
