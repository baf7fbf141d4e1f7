//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{
    default_html_file, default_log_file, default_output_dir, Config, RenderStyle, DEFAULT_BG,
    DEFAULT_FG, DEFAULT_KEYWORD, DEFAULT_POINTSIZE, DEFAULT_PREFIX, DEFAULT_WIDTH,
};
use crate::error::Result;

/// Fontcull - Preview Homebrew font casks and pick the ones to remove.
#[derive(Debug, Parser)]
#[command(name = "fontcull")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install, render and open a font gallery (default if no command specified)
    Preview(PreviewArgs),

    /// Check the external tools fontcull needs
    Doctor(DoctorArgs),

    /// List installed, available and missing font casks
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by commands that look up casks.
#[derive(Debug, Clone, clap::Args)]
pub struct SourceArgs {
    /// Family keyword matched in cask names (e.g. mono, serif, nerd)
    #[arg(short, long, default_value = DEFAULT_KEYWORD)]
    pub keyword: String,

    /// Homebrew install prefix
    #[arg(long, env = "HOMEBREW_PREFIX", default_value = DEFAULT_PREFIX)]
    pub prefix: PathBuf,
}

impl Default for SourceArgs {
    fn default() -> Self {
        Self {
            keyword: DEFAULT_KEYWORD.to_string(),
            prefix: PathBuf::from(DEFAULT_PREFIX),
        }
    }
}

/// Arguments for the `preview` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Directory for preview images (recreated on every run)
    #[arg(long, env = "FONTCULL_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Text color
    #[arg(long, env = "FONTCULL_FG", default_value = DEFAULT_FG)]
    pub fg: String,

    /// Background color
    #[arg(long, env = "FONTCULL_BG", default_value = DEFAULT_BG)]
    pub bg: String,

    /// Sample image width in pixels
    #[arg(long, env = "FONTCULL_WIDTH", default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Sample point size
    #[arg(long, env = "FONTCULL_POINTSIZE", default_value_t = DEFAULT_POINTSIZE)]
    pub pointsize: u32,

    /// Where to write the gallery page
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// Where to log install output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Preview installed fonts without installing missing ones
    #[arg(long)]
    pub skip_install: bool,

    /// Write the gallery without opening it
    #[arg(long)]
    pub no_open: bool,

    /// Also pick fonts to remove in the terminal
    #[arg(long)]
    pub pick: bool,

    /// Use defaults, no prompts
    #[arg(long)]
    pub non_interactive: bool,
}

impl Default for PreviewArgs {
    fn default() -> Self {
        Self {
            source: SourceArgs::default(),
            output_dir: None,
            fg: DEFAULT_FG.to_string(),
            bg: DEFAULT_BG.to_string(),
            width: DEFAULT_WIDTH,
            pointsize: DEFAULT_POINTSIZE,
            html: None,
            log_file: None,
            skip_install: false,
            no_open: false,
            pick: false,
            non_interactive: false,
        }
    }
}

impl PreviewArgs {
    /// Build and validate the run configuration.
    pub fn to_config(&self) -> Result<Config> {
        let config = Config {
            keyword: self.source.keyword.clone(),
            brew_prefix: self.source.prefix.clone(),
            output_dir: self.output_dir.clone().unwrap_or_else(default_output_dir),
            log_file: self.log_file.clone().unwrap_or_else(default_log_file),
            html_file: self.html.clone().unwrap_or_else(default_html_file),
            style: RenderStyle {
                fg: self.fg.clone(),
                bg: self.bg.clone(),
                width: self.width,
                pointsize: self.pointsize,
            },
            install_missing: !self.skip_install,
            open_gallery: !self.no_open,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Arguments for the `doctor` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DoctorArgs {
    /// Homebrew install prefix, searched for tools
    #[arg(long, env = "HOMEBREW_PREFIX", default_value = DEFAULT_PREFIX)]
    pub prefix: PathBuf,

    /// Offer to install missing tools
    #[arg(long)]
    pub fix: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Build and validate the configuration the listing uses.
    pub fn to_config(&self) -> Result<Config> {
        let config = Config {
            keyword: self.source.keyword.clone(),
            brew_prefix: self.source.prefix.clone(),
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
