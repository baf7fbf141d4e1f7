//! Tool checks.
//!
//! Checking is side-effect free: it only looks tools up. Offering to
//! install what is missing is [`super::installer`]'s job.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::requirements::registry::{ToolDef, REQUIRED_TOOLS};
use crate::requirements::status::{ToolReport, ToolStatus};

static BREW_VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Homebrew\s+(\d+\.\d+(?:\.\d+)?)").unwrap());

/// Check one tool with the given lookup function.
pub fn check_tool(def: &ToolDef, locate: &dyn Fn(&str) -> Option<PathBuf>) -> ToolReport {
    let status = match locate(def.name) {
        Some(path) => ToolStatus::Found { path },
        None => ToolStatus::Missing {
            formula: def.formula.map(String::from),
        },
    };
    ToolReport {
        tool: def.name.to_string(),
        status,
    }
}

/// Check every required tool, without offering installs.
pub fn check_all(locate: &dyn Fn(&str) -> Option<PathBuf>) -> Vec<ToolReport> {
    REQUIRED_TOOLS
        .iter()
        .map(|def| check_tool(def, locate))
        .collect()
}

/// Extract the version from `brew --version` output.
///
/// ```
/// use fontcull::requirements::checker::parse_brew_version;
///
/// assert_eq!(parse_brew_version("Homebrew 4.3.12\n"), Some("4.3.12".to_string()));
/// assert_eq!(parse_brew_version("command not found"), None);
/// ```
pub fn parse_brew_version(output: &str) -> Option<String> {
    BREW_VERSION_REGEX
        .captures(output)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
