//! Homebrew-backed [`PackageRepository`].
//!
//! Listings come from `brew` and are filtered through `rg`, so the
//! name patterns are ripgrep regexes.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{FontcullError, Result};
use crate::shell::{display_command, execute, execute_checked, CommandOptions};

use super::repository::PackageRepository;

/// Drives `brew` and `rg`.
#[derive(Debug, Clone)]
pub struct BrewRepository {
    brew: PathBuf,
    rg: PathBuf,
}

impl BrewRepository {
    /// Create a repository using the given executables.
    pub fn new(brew: PathBuf, rg: PathBuf) -> Self {
        Self { brew, rg }
    }

    fn brew(&self, args: &[&str]) -> Result<String> {
        run_brew(&self.brew, args)
    }

    /// Keep the lines of `listing` matching `pattern`.
    fn filter(&self, listing: String, pattern: &str) -> Result<Vec<String>> {
        let rg = self.rg.to_string_lossy();
        let args = ["--no-config", "--color", "never", pattern];
        let options = CommandOptions {
            stdin: Some(listing),
            ..Default::default()
        };
        let result = execute(&rg, &args, &options)?;
        match result.exit_code {
            Some(0) => Ok(result.stdout_lines()),
            // rg exits 1 when nothing matched
            Some(1) => Ok(Vec::new()),
            code => {
                tracing::debug!("rg stderr: {}", result.stderr.trim());
                Err(FontcullError::CommandFailed {
                    command: display_command(&rg, &args),
                    code,
                })
            }
        }
    }
}

impl PackageRepository for BrewRepository {
    fn installed(&self, pattern: &str) -> Result<Vec<String>> {
        let listing = self.brew(&["list", "--cask", "-1"])?;
        self.filter(listing, pattern)
    }

    fn available(&self, pattern: &str) -> Result<Vec<String>> {
        let listing = self.brew(&["search", "--cask", "font-"])?;
        self.filter(listing, pattern)
    }

    fn install(&self, package: &str, log_file: &Path) -> Result<()> {
        write_log_header(log_file, package)?;

        let brew = self.brew.to_string_lossy();
        let options = CommandOptions {
            log_file: Some(log_file.to_path_buf()),
            ..Default::default()
        };
        let result = execute(&brew, &["install", "--cask", package], &options)?;
        if result.success {
            Ok(())
        } else {
            Err(FontcullError::InstallFailed {
                package: package.to_string(),
                log: log_file.to_path_buf(),
            })
        }
    }
}

fn run_brew(brew: &Path, args: &[&str]) -> Result<String> {
    let brew = brew.to_string_lossy();
    let result = execute_checked(&brew, args, &CommandOptions::default())?;
    Ok(result.stdout)
}

/// `brew install <formula>`, used for missing tools during preflight.
pub fn install_formula(brew: &Path, formula: &str) -> Result<()> {
    run_brew(brew, &["install", formula]).map(|_| ())
}

/// The Homebrew version, from `brew --version`.
pub fn brew_version(brew: &Path) -> Option<String> {
    run_brew(brew, &["--version"])
        .ok()
        .and_then(|out| crate::requirements::parse_brew_version(&out))
}

/// Start a log entry for one install attempt.
pub fn write_log_header(log_file: &Path, package: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;
    writeln!(
        file,
        "==> {} brew install --cask {}",
        chrono::Local::now().to_rfc3339(),
        package
    )?;
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    /// Write an executable shell script standing in for a real tool.
    fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// A fake `rg` built on grep, honoring only the final pattern argument.
    fn fake_rg(dir: &Path) -> PathBuf {
        script(
            dir,
            "rg",
            r#"for last; do :; done
grep -E "$last""#,
        )
    }

    #[test]
    fn installed_filters_listing() {
        let temp = TempDir::new().unwrap();
        let brew = script(
            temp.path(),
            "brew",
            r#"printf 'firefox\nfont-a-mono\nfont-b-sans\nfont-c-mono\n'"#,
        );
        let repo = BrewRepository::new(brew, fake_rg(temp.path()));
        let names = repo.installed("font.*mono").unwrap();
        assert_eq!(names, vec!["font-a-mono", "font-c-mono"]);
    }

    #[test]
    fn available_with_no_matches_is_empty() {
        let temp = TempDir::new().unwrap();
        let brew = script(temp.path(), "brew", r#"printf 'font-a-sans\n'"#);
        let repo = BrewRepository::new(brew, fake_rg(temp.path()));
        assert!(repo.available("^font-.*-mono$").unwrap().is_empty());
    }

    #[test]
    fn failing_brew_listing_is_error() {
        let temp = TempDir::new().unwrap();
        let brew = script(temp.path(), "brew", "exit 3");
        let repo = BrewRepository::new(brew, fake_rg(temp.path()));
        let err = repo.installed("font").unwrap_err();
        assert!(matches!(err, FontcullError::CommandFailed { code: Some(3), .. }));
    }

    #[test]
    fn rg_error_status_is_error() {
        let temp = TempDir::new().unwrap();
        let brew = script(temp.path(), "brew", r#"printf 'font-a-mono\n'"#);
        let rg = script(temp.path(), "rg", "exit 2");
        let repo = BrewRepository::new(brew, rg);
        assert!(repo.installed("font").is_err());
    }

    #[test]
    fn install_logs_output_and_reports_failure() {
        let temp = TempDir::new().unwrap();
        let brew = script(
            temp.path(),
            "brew",
            r#"echo "installing $3"
[ "$3" = "font-good-mono" ] || { echo "no such cask" >&2; exit 1; }"#,
        );
        let repo = BrewRepository::new(brew, fake_rg(temp.path()));
        let log = temp.path().join("install.log");

        repo.install("font-good-mono", &log).unwrap();
        let err = repo.install("font-bad-mono", &log).unwrap_err();
        assert!(matches!(
            err,
            FontcullError::InstallFailed { ref package, .. } if package == "font-bad-mono"
        ));

        let contents = std::fs::read_to_string(&log).unwrap();
        assert!(contents.contains("brew install --cask font-good-mono"));
        assert!(contents.contains("installing font-good-mono"));
        assert!(contents.contains("installing font-bad-mono"));
        assert!(contents.contains("no such cask"));
    }

    #[test]
    fn version_parses_brew_output() {
        let temp = TempDir::new().unwrap();
        let brew = script(temp.path(), "brew", r#"echo "Homebrew 4.3.12""#);
        assert_eq!(brew_version(&brew), Some("4.3.12".to_string()));
    }

    #[test]
    fn install_formula_propagates_failure() {
        let temp = TempDir::new().unwrap();
        let brew = script(temp.path(), "brew", "exit 1");
        assert!(install_formula(&brew, "fd").is_err());
    }
}
