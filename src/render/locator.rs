//! Font file discovery.

use std::path::{Path, PathBuf};

use crate::error::{FontcullError, Result};
use crate::shell::{display_command, execute, CommandOptions};

/// Extensions treated as font files.
pub const FONT_EXTENSIONS: &[&str] = &["ttf", "otf"];

/// Finds font files under a cask's install directory.
pub trait FontLocator {
    /// All font files below `dir`, sorted. A missing directory yields none.
    fn locate(&self, dir: &Path) -> Result<Vec<PathBuf>>;
}

/// [`FontLocator`] backed by `fd`.
#[derive(Debug, Clone)]
pub struct FdLocator {
    fd: PathBuf,
}

impl FdLocator {
    /// Create a locator using the given `fd` executable.
    pub fn new(fd: PathBuf) -> Self {
        Self { fd }
    }

    fn args(dir: &str) -> Vec<&str> {
        let mut args = vec!["--type", "f"];
        for ext in FONT_EXTENSIONS {
            args.extend(["--extension", *ext]);
        }
        args.extend(["--absolute-path", "--no-ignore", "--hidden", ".", dir]);
        args
    }
}

impl FontLocator for FdLocator {
    fn locate(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            tracing::debug!("{} does not exist", dir.display());
            return Ok(Vec::new());
        }

        let fd = self.fd.to_string_lossy();
        let dir = dir.to_string_lossy();
        let args = Self::args(&dir);
        let result = execute(&fd, &args, &CommandOptions::default())?;
        if !result.success {
            return Err(FontcullError::CommandFailed {
                command: display_command(&fd, &args),
                code: result.exit_code,
            });
        }

        let mut fonts: Vec<PathBuf> = result
            .stdout_lines()
            .into_iter()
            .map(PathBuf::from)
            .collect();
        fonts.sort();
        Ok(fonts)
    }
}
