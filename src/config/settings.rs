//! Configuration values and their defaults.

use std::path::PathBuf;

use crate::error::Result;

/// Homebrew prefix used when `HOMEBREW_PREFIX` is unset.
pub const DEFAULT_PREFIX: &str = "/opt/homebrew";
/// Family keyword matched in cask names.
pub const DEFAULT_KEYWORD: &str = "mono";
/// Sample text color.
pub const DEFAULT_FG: &str = "black";
/// Sample background color.
pub const DEFAULT_BG: &str = "white";
/// Sample image width in pixels.
pub const DEFAULT_WIDTH: u32 = 1200;
/// Sample point size.
pub const DEFAULT_POINTSIZE: u32 = 28;

/// Default image-staging directory.
pub fn default_output_dir() -> PathBuf {
    std::env::temp_dir().join("fontcull-previews")
}

/// Default install-failure log.
pub fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("fontcull-install-errors.log")
}

/// Default gallery location.
pub fn default_html_file() -> PathBuf {
    std::env::temp_dir().join("fontcull-preview.html")
}

/// How glyph samples are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    /// Foreground (text) color, any ImageMagick color name or value.
    pub fg: String,
    /// Background color, any ImageMagick color name or value.
    pub bg: String,
    /// Image width in pixels; height follows the text.
    pub width: u32,
    /// Font point size.
    pub pointsize: u32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            fg: DEFAULT_FG.to_string(),
            bg: DEFAULT_BG.to_string(),
            width: DEFAULT_WIDTH,
            pointsize: DEFAULT_POINTSIZE,
        }
    }
}

/// Immutable settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Family keyword, e.g. `mono` matches `font-fira-mono`.
    pub keyword: String,
    /// Homebrew install prefix.
    pub brew_prefix: PathBuf,
    /// Image-staging directory, recreated each run.
    pub output_dir: PathBuf,
    /// Install-failure log, truncated each run.
    pub log_file: PathBuf,
    /// Generated gallery page.
    pub html_file: PathBuf,
    /// Glyph sample appearance.
    pub style: RenderStyle,
    /// Install missing casks before previewing.
    pub install_missing: bool,
    /// Open the gallery once written.
    pub open_gallery: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keyword: DEFAULT_KEYWORD.to_string(),
            brew_prefix: PathBuf::from(DEFAULT_PREFIX),
            output_dir: default_output_dir(),
            log_file: default_log_file(),
            html_file: default_html_file(),
            style: RenderStyle::default(),
            install_missing: true,
            open_gallery: true,
        }
    }
}

impl Config {
    /// Validate the configuration. See [`super::validate`].
    pub fn validate(&self) -> Result<()> {
        super::validator::validate(self)
    }

    /// Directory holding every installed cask.
    pub fn caskroom(&self) -> PathBuf {
        self.brew_prefix.join("Caskroom")
    }

    /// Install directory of one cask.
    pub fn install_dir(&self, package: &str) -> PathBuf {
        self.caskroom().join(package)
    }

    /// `bin` directory of the Homebrew prefix, searched for tools.
    pub fn brew_bin(&self) -> PathBuf {
        self.brew_prefix.join("bin")
    }

    /// Pattern selecting installed casks: contains `font`, then the keyword.
    pub fn installed_pattern(&self) -> String {
        format!("font.*{}", self.keyword)
    }

    /// Pattern selecting searchable casks: `font-<anything>-<keyword>`.
    pub fn available_pattern(&self) -> String {
        format!("^font-.*-{}$", self.keyword)
    }

    /// Final montage image for a package.
    pub fn montage_path(&self, package: &str) -> PathBuf {
        self.output_dir.join(format!("{}.png", package))
    }

    /// Scratch directory for a package's per-font images.
    pub fn staging_dir(&self, package: &str) -> PathBuf {
        self.output_dir.join(package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.keyword, "mono");
        assert_eq!(config.brew_prefix, PathBuf::from("/opt/homebrew"));
        assert_eq!(config.style.fg, "black");
        assert_eq!(config.style.bg, "white");
        assert_eq!(config.style.width, 1200);
        assert_eq!(config.style.pointsize, 28);
        assert!(config.install_missing);
        assert!(config.open_gallery);
    }

    #[test]
    fn default_paths_live_in_temp_dir() {
        let tmp = std::env::temp_dir();
        assert!(default_output_dir().starts_with(&tmp));
        assert!(default_log_file().starts_with(&tmp));
        assert!(default_html_file().starts_with(&tmp));
    }

    #[test]
    fn install_dir_is_under_caskroom() {
        let config = Config {
            brew_prefix: PathBuf::from("/usr/local"),
            ..Default::default()
        };
        assert_eq!(
            config.install_dir("font-a-mono"),
            PathBuf::from("/usr/local/Caskroom/font-a-mono")
        );
        assert_eq!(config.brew_bin(), PathBuf::from("/usr/local/bin"));
    }

    #[test]
    fn patterns_follow_keyword() {
        let config = Config {
            keyword: "serif".to_string(),
            ..Default::default()
        };
        assert_eq!(config.installed_pattern(), "font.*serif");
        assert_eq!(config.available_pattern(), "^font-.*-serif$");
    }

    #[test]
    fn montage_and_staging_paths() {
        let config = Config {
            output_dir: PathBuf::from("/tmp/previews"),
            ..Default::default()
        };
        assert_eq!(
            config.montage_path("font-a-mono"),
            PathBuf::from("/tmp/previews/font-a-mono.png")
        );
        assert_eq!(
            config.staging_dir("font-a-mono"),
            PathBuf::from("/tmp/previews/font-a-mono")
        );
    }
}
