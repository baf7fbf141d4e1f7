//! The external tools fontcull depends on.

/// One required external executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDef {
    /// Executable name looked up on PATH.
    pub name: &'static str,
    /// Homebrew formula that provides it; `None` means it cannot be installed for the user.
    pub formula: Option<&'static str>,
    /// What the tool is used for, shown in messages.
    pub purpose: &'static str,
}

/// The package manager itself.
pub const BREW: ToolDef = ToolDef {
    name: "brew",
    formula: None,
    purpose: "package manager",
};

/// ImageMagick, for glyph samples and montages.
pub const MAGICK: ToolDef = ToolDef {
    name: "magick",
    formula: Some("imagemagick"),
    purpose: "font rasterization and montage",
};

/// ripgrep, for filtering cask listings.
pub const RG: ToolDef = ToolDef {
    name: "rg",
    formula: Some("ripgrep"),
    purpose: "cask name filtering",
};

/// fd, for locating font files.
pub const FD: ToolDef = ToolDef {
    name: "fd",
    formula: Some("fd"),
    purpose: "font file discovery",
};

/// Every tool checked during preflight, in check order.
pub const REQUIRED_TOOLS: &[ToolDef] = &[BREW, MAGICK, RG, FD];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brew_is_checked_first_and_not_installable() {
        assert_eq!(REQUIRED_TOOLS[0], BREW);
        assert!(BREW.formula.is_none());
    }

    #[test]
    fn other_tools_have_formulas() {
        for tool in &REQUIRED_TOOLS[1..] {
            assert!(tool.formula.is_some(), "{} needs a formula", tool.name);
        }
    }

    #[test]
    fn four_tools_required() {
        let names: Vec<_> = REQUIRED_TOOLS.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["brew", "magick", "rg", "fd"]);
    }
}
