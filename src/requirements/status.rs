//! Tool status types for preflight results.

use std::path::PathBuf;

/// The result of checking a single tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// Tool was found on the search path.
    Found {
        /// Resolved executable path
        path: PathBuf,
    },

    /// Tool was missing and fontcull installed it.
    Installed {
        /// Resolved executable path after install
        path: PathBuf,
    },

    /// Tool is not installed.
    Missing {
        /// Homebrew formula that would provide it
        formula: Option<String>,
    },
}

impl ToolStatus {
    /// Whether the tool is usable.
    pub fn is_available(&self) -> bool {
        self.path().is_some()
    }

    /// Resolved path, if usable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ToolStatus::Found { path } | ToolStatus::Installed { path } => Some(path),
            ToolStatus::Missing { .. } => None,
        }
    }
}

/// The status of one named tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolReport {
    /// Tool name
    pub tool: String,
    /// Its status
    pub status: ToolStatus,
}

/// Resolved executables for every required tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTools {
    /// `brew`
    pub brew: PathBuf,
    /// `magick`
    pub magick: PathBuf,
    /// `rg`
    pub rg: PathBuf,
    /// `fd`
    pub fd: PathBuf,
}

impl ResolvedTools {
    /// Build from preflight reports, if every tool is available.
    pub fn from_reports(reports: &[ToolReport]) -> Option<Self> {
        let find = |name: &str| {
            reports
                .iter()
                .find(|r| r.tool == name)
                .and_then(|r| r.status.path().cloned())
        };
        Some(Self {
            brew: find("brew")?,
            magick: find("magick")?,
            rg: find("rg")?,
            fd: find("fd")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(tool: &str) -> ToolReport {
        ToolReport {
            tool: tool.to_string(),
            status: ToolStatus::Found {
                path: PathBuf::from(format!("/bin/{}", tool)),
            },
        }
    }

    #[test]
    fn status_availability() {
        assert!(ToolStatus::Found {
            path: PathBuf::from("/bin/rg")
        }
        .is_available());
        assert!(ToolStatus::Installed {
            path: PathBuf::from("/bin/rg")
        }
        .is_available());
        assert!(!ToolStatus::Missing { formula: None }.is_available());
    }

    #[test]
    fn resolved_tools_from_complete_reports() {
        let reports = vec![found("brew"), found("magick"), found("rg"), found("fd")];
        let tools = ResolvedTools::from_reports(&reports).unwrap();
        assert_eq!(tools.fd, PathBuf::from("/bin/fd"));
        assert_eq!(tools.magick, PathBuf::from("/bin/magick"));
    }

    #[test]
    fn resolved_tools_requires_every_tool() {
        let mut reports = vec![found("brew"), found("magick"), found("rg")];
        assert!(ResolvedTools::from_reports(&reports).is_none());
        reports.push(ToolReport {
            tool: "fd".to_string(),
            status: ToolStatus::Missing {
                formula: Some("fd".to_string()),
            },
        });
        assert!(ResolvedTools::from_reports(&reports).is_none());
    }
}
