//! Lexer module for the grammar notation
//!
//! Rules are tokenized one at a time (or one alternative at a time by the
//! ordered and keywords drivers). There is no lexer state shared between
//! calls.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{strip_terminator, tokenize, tokenize_with_spans, Span};
pub use tokens::Token;
