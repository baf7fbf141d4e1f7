//! Run configuration.
//!
//! A [`Config`] is built once per run, from command-line flags with
//! environment-variable fallbacks (see [`crate::cli::PreviewArgs`]), validated,
//! and then passed by reference into every pipeline phase. Nothing in the
//! pipeline reads the environment on its own.
//!
//! # Example
//!
//! ```
//! use fontcull::config::Config;
//!
//! let config = Config::default();
//! config.validate().unwrap();
//! assert_eq!(config.keyword, "mono");
//! assert_eq!(config.available_pattern(), "^font-.*-mono$");
//! ```

pub mod settings;
pub mod validator;

pub use settings::{
    default_html_file, default_log_file, default_output_dir, Config, RenderStyle, DEFAULT_BG,
    DEFAULT_FG, DEFAULT_KEYWORD, DEFAULT_POINTSIZE, DEFAULT_PREFIX, DEFAULT_WIDTH,
};
pub use validator::validate;
