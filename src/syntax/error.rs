//! Errors raised while reading grammar notation.
//!
//! Every variant is fatal for the current run: there is no per-rule recovery,
//! a malformed rule aborts the whole invocation.

use thiserror::Error as ThisError;

#[derive(ThisError, Clone, Debug, PartialEq, Eq)]
pub enum GrammarError {
    /// A character run that matches no lexical rule.
    #[error("Malformed token `{fragment}` at offset {position}.")]
    MalformedToken { position: usize, fragment: String },

    /// Content or a `[ Subsection ]` header before any `[[ Section ]]` header.
    #[error("Line {line} appears before any `[[ Section ]]` header.")]
    NoEnclosingSection { line: usize },

    /// A `{` that is not immediately followed by a repetition index.
    #[error("List annotation at offset {position} is not followed by an integer index.")]
    MalformedListAnnotation { position: usize },

    /// Mode selector other than `collected`, `ordered` or `keywords`.
    #[error("Unknown mode `{0}` (expected `collected`, `ordered` or `keywords`).")]
    UnknownMode(String),

    /// Rule text without the `= ` that separates name from alternatives.
    #[error("Rule `{rule}` has no `= ` between its name and its alternatives.")]
    MissingDefinition { rule: String },
}
