//! Keyword extraction
//!
//! A keyword is a terminal whose quoted content is a single identifier-like
//! word (ASCII letters, digits, underscores and hyphens). Punctuation terminals such as `","`
//! or `":="` and multi-word terminals are not keywords.

use crate::syntax::error::GrammarError;
use crate::syntax::lexing::{tokenize, Token};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Whether a stripped terminal reads as a keyword
pub fn is_keyword(text: &str) -> bool {
    KEYWORD.is_match(text)
}

/// Collect the keyword terminals of a rule or alternative
pub fn collect_keywords(text: &str) -> Result<BTreeSet<String>, GrammarError> {
    let keywords = tokenize(text)?
        .iter()
        .filter(|token| token.is_terminal())
        .map(Token::stripped)
        .filter(|terminal| is_keyword(terminal))
        .map(str::to_string)
        .collect();
    Ok(keywords)
}
