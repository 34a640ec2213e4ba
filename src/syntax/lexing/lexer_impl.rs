//! Implementation of the rule tokenizer
//!
//! This module provides the entry point where rule text becomes a token
//! stream. Scanning is total: the first character run that no rule accepts
//! aborts tokenization instead of being dropped.

use crate::syntax::error::GrammarError;
use crate::syntax::lexing::tokens::Token;
use logos::Logos;

/// Byte range of a token in the scanned text
pub type Span = std::ops::Range<usize>;

/// Rule text without one trailing `;` terminator and the whitespace around it.
///
/// Only the end of the text is cut, so spans into the result are spans into
/// the original text.
pub fn strip_terminator(source: &str) -> &str {
    let trimmed = source.trim_end();
    trimmed.strip_suffix(';').unwrap_or(trimmed)
}

/// Tokenize rule text, pairing each token with its source span.
///
/// A final `;` is dropped; a `;` anywhere else is a malformed token.
pub fn tokenize_with_spans(source: &str) -> Result<Vec<(Token, Span)>, GrammarError> {
    let mut lexer = Token::lexer(strip_terminator(source));
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let span = lexer.span();
                return Err(GrammarError::MalformedToken {
                    position: span.start,
                    fragment: lexer.slice().to_string(),
                });
            }
        }
    }

    log::trace!("tokenized {:?} into {} tokens", source, tokens.len());
    Ok(tokens)
}

/// Tokenize rule text, discarding spans
pub fn tokenize(source: &str) -> Result<Vec<Token>, GrammarError> {
    Ok(tokenize_with_spans(source)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}
