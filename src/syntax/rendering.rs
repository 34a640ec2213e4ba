//! Rule rendering
//!
//!     Maps a rule's token stream to backend-neutral typeset fragments, one
//!     fragment per token except for list annotations:
//!
//!         {3","  ->  IndexedListWithSeparator { index: "3", separator: "," }
//!         {2 <x> ->  IndexedList { index: "2" }, NonTerminal("x")
//!
//!     A `{` must be followed by its integer index. The terminal after the index
//!     is taken as the separator; anything else is left in place and rendered
//!     normally. The walk uses a cursor over the token vector so that the
//!     separator check is a peek and an optional advance.

use crate::syntax::error::GrammarError;
use crate::syntax::lexing::{tokenize_with_spans, Span, Token};
use serde::Serialize;

/// One unit of typeset output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Fragment {
    /// Rule label style name
    ProductionName { name: String },
    /// Bold terminal symbol, quotes removed
    Terminal { text: String },
    /// Reference to another production, brackets removed
    NonTerminal { name: String },
    IndexedList { index: String },
    IndexedListWithSeparator { index: String, separator: String },
    ListEnd,
    /// Between a production's name and its alternatives
    Produces,
    /// Starts a new alternative on its own line
    Alternation,
}

impl Fragment {
    pub fn production_name(name: impl Into<String>) -> Self {
        Fragment::ProductionName { name: name.into() }
    }

    pub fn terminal(text: impl Into<String>) -> Self {
        Fragment::Terminal { text: text.into() }
    }

    pub fn non_terminal(name: impl Into<String>) -> Self {
        Fragment::NonTerminal { name: name.into() }
    }
}

/// Tokenize and render one rule or alternative
pub fn render_rule(text: &str) -> Result<Vec<Fragment>, GrammarError> {
    log::debug!("rendering rule {:?}", text);
    let tokens = tokenize_with_spans(text)?;
    render_tokens(&tokens)
}

/// Render an already tokenized rule
pub fn render_tokens(tokens: &[(Token, Span)]) -> Result<Vec<Fragment>, GrammarError> {
    let mut fragments = Vec::with_capacity(tokens.len());
    let mut cursor = 0;

    while cursor < tokens.len() {
        let (token, span) = &tokens[cursor];
        cursor += 1;

        let fragment = match token {
            Token::ProductionName(name) => Fragment::production_name(name.as_str()),
            Token::Terminal(_) => Fragment::terminal(token.stripped()),
            Token::Symbol(_) => Fragment::non_terminal(token.stripped()),
            Token::ListBegin => {
                let index = match tokens.get(cursor) {
                    Some((Token::Integer(index), _)) => index.clone(),
                    _ => {
                        return Err(GrammarError::MalformedListAnnotation {
                            position: span.start,
                        })
                    }
                };
                cursor += 1;

                match tokens.get(cursor) {
                    Some((separator @ Token::Terminal(_), _)) => {
                        cursor += 1;
                        Fragment::IndexedListWithSeparator {
                            index,
                            separator: separator.stripped().to_string(),
                        }
                    }
                    _ => Fragment::IndexedList { index },
                }
            }
            Token::ListEnd => Fragment::ListEnd,
            Token::Integer(index) => {
                // A bare index outside a list annotation has no typeset form
                log::warn!("ignoring stray integer {} at offset {}", index, span.start);
                continue;
            }
            Token::Defines => Fragment::Produces,
            Token::Alternation => Fragment::Alternation,
        };
        fragments.push(fragment);
    }

    Ok(fragments)
}
