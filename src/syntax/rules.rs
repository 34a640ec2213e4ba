//! Rule splitting
//!
//! Section bodies are split into rules, and rules into a name and a list of
//! alternatives, with plain substring splits. The alternative split is not
//! token aware: a terminal containing `| ` (e.g. `"| "`) is cut in two.

use crate::syntax::error::GrammarError;

/// Separates two rules in a section body
pub const RULE_SEPARATOR: &str = ";\n";

/// Separates a rule's name from its alternatives
pub const DEFINES_SEPARATOR: &str = "= ";

/// Separates two alternatives
pub const ALTERNATIVE_SEPARATOR: &str = "| ";

/// A rule cut at its first `= `
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleParts<'a> {
    pub name: &'a str,
    pub alternatives: Vec<&'a str>,
}

/// Split a section body into rule strings, dropping blank ones.
pub fn split_rules(body: &str) -> Vec<&str> {
    body.split(RULE_SEPARATOR)
        .filter(|rule| !rule.trim().is_empty())
        .collect()
}

/// Split one rule string into its trimmed name and trimmed alternatives.
pub fn split_rule(rule: &str) -> Result<RuleParts<'_>, GrammarError> {
    let (name, blob) =
        rule.split_once(DEFINES_SEPARATOR)
            .ok_or_else(|| GrammarError::MissingDefinition {
                rule: rule.trim().to_string(),
            })?;

    Ok(RuleParts {
        name: name.trim(),
        alternatives: blob.split(ALTERNATIVE_SEPARATOR).map(str::trim).collect(),
    })
}
