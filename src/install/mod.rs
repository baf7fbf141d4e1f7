//! Installing missing font casks.
//!
//! Individual failures are tolerated: the package is reported, its output
//! stays in the install log, and it is dropped from the preview set.

use std::fs::File;
use std::path::Path;

use crate::error::{FontcullError, Result};
use crate::inventory::PackageRepository;
use crate::ui::UserInterface;

/// Outcome of one install pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Packages that installed.
    pub succeeded: Vec<String>,
    /// Packages whose install failed.
    pub failed: Vec<String>,
}

impl InstallReport {
    /// Number of packages attempted.
    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// Whether packages were attempted and none of them installed.
    pub fn all_failed(&self) -> bool {
        self.attempted() > 0 && self.succeeded.is_empty()
    }
}

/// Truncate (or create) the install log.
pub fn reset_log(log_file: &Path) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    File::create(log_file)?;
    Ok(())
}

/// Remove `package` from `preview` by exact name.
///
/// ```
/// use fontcull::install::exclude;
///
/// let mut preview = vec!["font-a-mono".to_string(), "font-a-mono-nerd".to_string()];
/// exclude(&mut preview, "font-a-mono");
/// assert_eq!(preview, vec!["font-a-mono-nerd"]);
/// ```
pub fn exclude(preview: &mut Vec<String>, package: &str) {
    preview.retain(|name| name != package);
}

/// Install every package in `missing`, shrinking `preview` on failure.
///
/// Errors other than a failed install (the log cannot be written, `brew`
/// cannot be spawned) abort the pass.
pub fn install_missing(
    repo: &dyn PackageRepository,
    ui: &mut dyn UserInterface,
    missing: &[String],
    preview: &mut Vec<String>,
    log_file: &Path,
) -> Result<InstallReport> {
    reset_log(log_file)?;

    let mut report = InstallReport::default();
    let total = missing.len();

    for (index, package) in missing.iter().enumerate() {
        let mut spinner =
            ui.start_spinner(&format!("[{}/{}] Installing {}...", index + 1, total, package));

        match repo.install(package, log_file) {
            Ok(()) => {
                spinner.finish_success(&format!("Installed {}", package));
                report.succeeded.push(package.clone());
            }
            Err(FontcullError::InstallFailed { package, log }) => {
                spinner.finish_error(&format!("Failed to install {}", package));
                ui.warning(&format!(
                    "Skipping {} in the preview (details in {})",
                    package,
                    log.display()
                ));
                tracing::debug!("Install of {} failed", package);
                exclude(preview, &package);
                report.failed.push(package);
            }
            Err(e) => {
                spinner.finish_error(&format!("Failed to install {}", package));
                return Err(e);
            }
        }
    }

    tracing::info!(
        "Installed {} of {} missing casks",
        report.succeeded.len(),
        total
    );
    Ok(report)
}
