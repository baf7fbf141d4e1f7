//! Installed/available set arithmetic.

use std::collections::HashSet;

use serde::Serialize;

/// Sort and deduplicate a listing.
pub fn normalize(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names.dedup();
    names
}

/// Elements of `available` not present in `installed`, in `available` order.
///
/// ```
/// use fontcull::inventory::missing;
///
/// let installed = vec!["font-a-mono".to_string()];
/// let available = vec!["font-a-mono".to_string(), "font-b-mono".to_string()];
/// assert_eq!(missing(&installed, &available), vec!["font-b-mono"]);
/// ```
pub fn missing(installed: &[String], available: &[String]) -> Vec<String> {
    let installed: HashSet<&str> = installed.iter().map(String::as_str).collect();
    available
        .iter()
        .filter(|name| !installed.contains(name.as_str()))
        .cloned()
        .collect()
}

/// Installed, available and missing casks for one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inventory {
    /// Family keyword the listings were filtered by.
    pub keyword: String,
    /// Installed matching casks, sorted.
    pub installed: Vec<String>,
    /// Searchable matching casks, sorted.
    pub available: Vec<String>,
    /// `available - installed`, sorted.
    pub missing: Vec<String>,
}

impl Inventory {
    /// Build an inventory from raw listings in any order.
    pub fn new(keyword: &str, installed: Vec<String>, available: Vec<String>) -> Self {
        let installed = normalize(installed);
        let available = normalize(available);
        let missing = missing(&installed, &available);
        Self {
            keyword: keyword.to_string(),
            installed,
            available,
            missing,
        }
    }

    /// Whether every available cask is already installed.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}
