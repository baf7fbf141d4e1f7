//! The uninstall command built from checked packages.
//!
//! Mirrors the page script: names are kept in the order they were
//! checked, and unchecking removes exactly that name.

/// Prefix of every generated command.
pub const UNINSTALL_COMMAND: &str = "brew uninstall --cask";

/// Packages picked for removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check or uncheck `name`.
    pub fn set(&mut self, name: &str, checked: bool) {
        if checked {
            if !self.contains(name) {
                self.names.push(name.to_string());
            }
        } else {
            self.names.retain(|n| n != name);
        }
    }

    /// Flip `name`, returning whether it is now checked.
    pub fn toggle(&mut self, name: &str) -> bool {
        let checked = !self.contains(name);
        self.set(name, checked);
        checked
    }

    /// Whether `name` is checked.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Checked names in toggle order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether nothing is checked.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The uninstall command, or an empty string when nothing is checked.
    ///
    /// ```
    /// use fontcull::gallery::Selection;
    ///
    /// let mut selection = Selection::new();
    /// selection.toggle("font-b-mono");
    /// selection.toggle("font-a-mono");
    /// assert_eq!(selection.command(), "brew uninstall --cask font-b-mono font-a-mono");
    /// ```
    pub fn command(&self) -> String {
        if self.names.is_empty() {
            String::new()
        } else {
            format!("{} {}", UNINSTALL_COMMAND, self.names.join(" "))
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for name in iter {
            selection.set(name.as_ref(), true);
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_has_empty_command() {
        assert_eq!(Selection::new().command(), "");
    }

    #[test]
    fn command_follows_toggle_order() {
        let mut selection = Selection::new();
        assert!(selection.toggle("font-p1-mono"));
        assert!(selection.toggle("font-p2-mono"));
        assert_eq!(
            selection.command(),
            "brew uninstall --cask font-p1-mono font-p2-mono"
        );
    }

    #[test]
    fn unchecking_all_resets_command() {
        let mut selection = Selection::new();
        selection.toggle("font-p1-mono");
        selection.toggle("font-p2-mono");
        assert!(!selection.toggle("font-p1-mono"));
        assert_eq!(selection.command(), "brew uninstall --cask font-p2-mono");
        selection.toggle("font-p2-mono");
        assert!(selection.is_empty());
        assert_eq!(selection.command(), "");
    }

    #[test]
    fn rechecking_moves_name_to_end() {
        let mut selection = Selection::new();
        selection.toggle("font-a-mono");
        selection.toggle("font-b-mono");
        selection.toggle("font-a-mono");
        selection.toggle("font-a-mono");
        assert_eq!(selection.names(), &["font-b-mono", "font-a-mono"]);
    }

    #[test]
    fn unchecking_removes_exact_name_only() {
        let mut selection = Selection::new();
        selection.set("font-a-mono", true);
        selection.set("font-a-mono-nerd", true);
        selection.set("font-a-mono", false);
        assert_eq!(selection.names(), &["font-a-mono-nerd"]);
    }

    #[test]
    fn checking_twice_keeps_one_entry() {
        let mut selection = Selection::new();
        selection.set("font-a-mono", true);
        selection.set("font-a-mono", true);
        assert_eq!(selection.names().len(), 1);
    }

    #[test]
    fn collects_from_iterator() {
        let selection: Selection = ["font-b-mono", "font-a-mono"].into_iter().collect();
        assert_eq!(
            selection.command(),
            "brew uninstall --cask font-b-mono font-a-mono"
        );
    }
}
