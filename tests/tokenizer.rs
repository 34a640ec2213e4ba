//! Tokenizer and renderer behavior on the notation's core constructs

use gramdoc::syntax::lexing::{tokenize, Token};
use gramdoc::syntax::rendering::{render_rule, Fragment};
use gramdoc::syntax::GrammarError;
use rstest::rstest;

fn name(s: &str) -> Token {
    Token::ProductionName(s.to_string())
}

fn terminal(s: &str) -> Token {
    Token::Terminal(format!("\"{}\"", s))
}

fn symbol(s: &str) -> Token {
    Token::Symbol(format!("<{}>", s))
}

#[test]
fn test_rule_with_terminator() {
    let tokens = tokenize("prog = \"begin\" <stmts> \"end\" ;").unwrap();
    assert_eq!(
        tokens,
        vec![
            name("prog"),
            Token::Defines,
            terminal("begin"),
            symbol("stmts"),
            terminal("end"),
        ]
    );
}

#[test]
fn test_only_final_terminator_is_dropped() {
    assert_eq!(
        tokenize("prog = \"begin\" <stmts> \"end\";\n").unwrap().len(),
        5
    );
    assert_eq!(
        tokenize("sep = \";\" ;").unwrap(),
        vec![name("sep"), Token::Defines, terminal(";")]
    );
}

#[test]
fn test_list_with_separator_tokens() {
    let tokens = tokenize("\"stmts\" {3\",\" }").unwrap();
    assert_eq!(
        tokens,
        vec![
            terminal("stmts"),
            Token::ListBegin,
            Token::Integer("3".to_string()),
            terminal(","),
            Token::ListEnd,
        ]
    );

    let fragments = render_rule("\"stmts\" {3\",\" }").unwrap();
    assert!(fragments.contains(&Fragment::IndexedListWithSeparator {
        index: "3".to_string(),
        separator: ",".to_string(),
    }));
}

#[test]
fn test_list_lookahead_pushes_back() {
    let fragments = render_rule("{2} <x>").unwrap();
    assert_eq!(fragments.last(), Some(&Fragment::non_terminal("x")));
    assert_eq!(
        fragments[0],
        Fragment::IndexedList {
            index: "2".to_string()
        }
    );
}

#[test]
fn test_tokens_debug_snapshot() {
    let tokens = tokenize("{1 <x> }").unwrap();
    insta::assert_debug_snapshot!(tokens, @r#"
    [
        ListBegin,
        Integer(
            "1",
        ),
        Symbol(
            "<x>",
        ),
        ListEnd,
    ]
    "#);
}

#[rstest]
#[case("\"open <x>", 0)]
#[case("p = \"open <x>", 4)]
#[case("p = <x> @", 8)]
#[case("p = <x> \"dangling", 8)]
#[case("p = <a> ; <b>", 8)]
#[case("; p = <a>", 0)]
fn test_malformed_input(#[case] input: &str, #[case] expected_position: usize) {
    match tokenize(input) {
        Err(GrammarError::MalformedToken { position, .. }) => {
            assert_eq!(position, expected_position)
        }
        other => panic!("Expected MalformedToken, got {:?}", other),
    }
}

#[rstest]
#[case("{")]
#[case("{ <x> }")]
#[case("{\",\" 2 }")]
fn test_list_requires_index(#[case] input: &str) {
    assert_eq!(
        render_rule(input),
        Err(GrammarError::MalformedListAnnotation { position: 0 })
    );
}

#[test]
fn test_lexemes_round_trip_through_display_text() {
    let source = "expr = <term> \"+\" {2\",\" } | x-y";
    let tokens = tokenize(source).unwrap();
    let lexemes: Vec<&str> = tokens.iter().map(Token::lexeme).collect();
    assert_eq!(
        lexemes,
        vec!["expr", "=", "<term>", "\"+\"", "{", "2", "\",\"", "}", "|", "x-y"]
    );
}
