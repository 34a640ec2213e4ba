//! Token definitions for the grammar notation
//!
//! The notation has six lexical categories (names, quoted terminals, angle
//! bracketed symbols, list braces, integers and the `=`/`|` punctuation).
//! The tokens are defined using the logos derive macro; whitespace is skipped
//! and never becomes a token. A `;` matches no token: the rule terminator is
//! removed before scanning (see [`strip_terminator`](super::strip_terminator)).
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible tokens of a rule
#[derive(Logos, Debug, PartialEq, Eq, Clone, Serialize)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Bare word, e.g. `prog` or `type-name`
    #[regex(r"[A-Za-z\-]+", |lex| lex.slice().to_owned())]
    ProductionName(String),

    /// Quoted terminal, quotes included in the lexeme
    #[regex(r#""[^"]+""#, |lex| lex.slice().to_owned())]
    Terminal(String),

    /// Nonterminal reference, angle brackets included in the lexeme
    #[regex(r#"<[^"<>]+>"#, |lex| lex.slice().to_owned())]
    Symbol(String),

    #[token("{")]
    ListBegin,

    #[token("}")]
    ListEnd,

    /// Repetition index of a list annotation
    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Integer(String),

    #[token("=")]
    Defines,

    #[token("|")]
    Alternation,
}

impl Token {
    /// The exact text this token was scanned from
    pub fn lexeme(&self) -> &str {
        match self {
            Token::ProductionName(s)
            | Token::Terminal(s)
            | Token::Symbol(s)
            | Token::Integer(s) => s,
            Token::ListBegin => "{",
            Token::ListEnd => "}",
            Token::Defines => "=",
            Token::Alternation => "|",
        }
    }

    /// Content of a terminal or symbol without its delimiters.
    ///
    /// Other tokens are returned unchanged.
    pub fn stripped(&self) -> &str {
        match self {
            Token::Terminal(s) | Token::Symbol(s) => strip_delimiters(s),
            other => other.lexeme(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Token::Terminal(_))
    }
}

/// Drop the first and last character (quotes or angle brackets)
fn strip_delimiters(lexeme: &str) -> &str {
    let mut chars = lexeme.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::ProductionName(s) => write!(f, "<name:{}>", s),
            Token::Terminal(s) => write!(f, "<terminal:{}>", s),
            Token::Symbol(s) => write!(f, "<symbol:{}>", s),
            Token::ListBegin => write!(f, "<list-begin>"),
            Token::ListEnd => write!(f, "<list-end>"),
            Token::Integer(s) => write!(f, "<integer:{}>", s),
            Token::Defines => write!(f, "<defines>"),
            Token::Alternation => write!(f, "<alternation>"),
        }
    }
}
