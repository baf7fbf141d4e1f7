//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect};

use crate::error::{FontcullError, Result};

use super::{parse_bool_answer, parse_list_answer, Prompt, PromptOption, PromptResult, PromptType};

/// Convert dialoguer errors to FontcullError.
fn map_dialoguer_err(e: dialoguer::Error) -> FontcullError {
    FontcullError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::MultiSelect { options } => prompt_multiselect(prompt, options, term),
    }
}

fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let default = prompt
        .default
        .as_deref()
        .map(parse_bool_answer)
        .unwrap_or(true);

    let result = Confirm::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .default(default)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::Bool(result))
}

fn prompt_multiselect(
    prompt: &Prompt,
    options: &[PromptOption],
    term: &Term,
) -> Result<PromptResult> {
    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
    let defaults = default_flags(prompt, options);

    let selections = MultiSelect::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&labels)
        .defaults(&defaults)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    let values: Vec<String> = selections
        .iter()
        .map(|&i| options[i].value.clone())
        .collect();

    Ok(PromptResult::Strings(values))
}

/// Which options start checked, from the prompt's comma-separated default.
fn default_flags(prompt: &Prompt, options: &[PromptOption]) -> Vec<bool> {
    let default_values = prompt
        .default
        .as_deref()
        .map(parse_list_answer)
        .unwrap_or_default();
    options
        .iter()
        .map(|o| default_values.contains(&o.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(value: &str) -> PromptOption {
        PromptOption {
            label: value.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn default_flags_marks_listed_values() {
        let options = vec![option("font-a-mono"), option("font-b-mono")];
        let prompt = Prompt {
            key: "uninstall".to_string(),
            question: "Pick".to_string(),
            prompt_type: PromptType::MultiSelect {
                options: options.clone(),
            },
            default: Some("font-b-mono".to_string()),
        };
        assert_eq!(default_flags(&prompt, &options), vec![false, true]);
    }

    #[test]
    fn default_flags_without_default_is_all_false() {
        let options = vec![option("font-a-mono")];
        let prompt = Prompt {
            key: "uninstall".to_string(),
            question: "Pick".to_string(),
            prompt_type: PromptType::MultiSelect {
                options: options.clone(),
            },
            default: None,
        };
        assert_eq!(default_flags(&prompt, &options), vec![false]);
    }
}
