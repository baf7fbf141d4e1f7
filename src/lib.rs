//! fontcull - Preview Homebrew font casks and pick the ones to remove.
//!
//! fontcull installs every font cask matching a family keyword, renders a
//! glyph sample of each font, and writes an HTML gallery where checking
//! fonts builds the `brew uninstall --cask ...` command to remove them.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Run configuration and validation
//! - [`error`] - Error types and result aliases
//! - [`gallery`] - HTML gallery and the uninstall selection
//! - [`install`] - Installing missing casks
//! - [`inventory`] - Listing casks and computing what is missing
//! - [`render`] - Font discovery, glyph samples and montages
//! - [`requirements`] - Preflight checks for external tools
//! - [`runner`] - Pipeline orchestration
//! - [`shell`] - External program execution
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use fontcull::gallery::Selection;
//! use fontcull::inventory::Inventory;
//!
//! let inventory = Inventory::new(
//!     "mono",
//!     vec!["font-a-mono".to_string()],
//!     vec!["font-a-mono".to_string(), "font-b-mono".to_string()],
//! );
//! assert_eq!(inventory.missing, vec!["font-b-mono"]);
//!
//! let selection: Selection = inventory.available.iter().collect();
//! assert_eq!(
//!     selection.command(),
//!     "brew uninstall --cask font-a-mono font-b-mono"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod gallery;
pub mod install;
pub mod inventory;
pub mod render;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{FontcullError, Result};
