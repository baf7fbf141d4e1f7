//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - The keyword is non-empty and made of lowercase letters, digits and dashes
//! - Width and point size are positive
//! - Colors are non-empty
//! - The gallery file is not inside the staging directory, which is wiped

use std::sync::LazyLock;

use regex::Regex;

use crate::config::settings::Config;
use crate::error::{FontcullError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

static KEYWORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").unwrap());

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &Config) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !KEYWORD_REGEX.is_match(&config.keyword) {
        errors.push(ValidationError::new(
            "invalid-keyword",
            format!(
                "keyword '{}' must be lowercase letters, digits and dashes",
                config.keyword
            ),
        ));
    }

    if config.style.width == 0 {
        errors.push(ValidationError::new(
            "invalid-width",
            "width must be greater than zero",
        ));
    }

    if config.style.pointsize == 0 {
        errors.push(ValidationError::new(
            "invalid-pointsize",
            "pointsize must be greater than zero",
        ));
    }

    if config.style.fg.trim().is_empty() || config.style.bg.trim().is_empty() {
        errors.push(ValidationError::new(
            "invalid-color",
            "foreground and background colors must not be empty",
        ));
    }

    if config.html_file.starts_with(&config.output_dir) {
        errors.push(ValidationError::new(
            "html-in-staging",
            format!(
                "gallery file {} must not be inside the staging directory {}",
                config.html_file.display(),
                config.output_dir.display()
            ),
        ));
    }

    errors
}

/// Validate a configuration, failing with every problem found.
pub fn validate(config: &Config) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(FontcullError::ConfigValidationError { message })
}
