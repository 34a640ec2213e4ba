//! Mode driver tests over the sample grammar and small inline grammars

use gramdoc::syntax::document::{Block, Document};
use gramdoc::syntax::formats::{Formatter, LatexFormatter};
use gramdoc::syntax::modes::{self, merge_productions, Mode};
use gramdoc::syntax::rendering::Fragment;
use gramdoc::syntax::sections::{split_sections, Level, Section};
use gramdoc::syntax::GrammarError;
use rstest::rstest;
use std::fs;

fn sample_sections() -> Vec<Section> {
    let source = fs::read_to_string("tests/fixtures/syntax.ebnf").expect("sample grammar");
    split_sections(&source).expect("sample grammar splits")
}

fn headings(document: &Document) -> Vec<(Level, String)> {
    document
        .blocks
        .iter()
        .filter_map(|block| match block {
            Block::Heading { level, title } => Some((*level, title.clone())),
            _ => None,
        })
        .collect()
}

fn production_names(document: &Document) -> Vec<String> {
    document
        .productions()
        .filter_map(|production| match production.fragments.first() {
            Some(Fragment::ProductionName { name }) => Some(name.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_sample_sections() {
    let sections = sample_sections();
    let titles: Vec<(&str, Level)> = sections
        .iter()
        .map(|section| (section.title.as_str(), section.level))
        .collect();
    assert_eq!(
        titles,
        vec![
            ("Programs", Level::Section),
            ("Statements", Level::Subsection),
            ("Expressions", Level::Section),
            ("Literals", Level::Subsection),
        ]
    );
}

#[test]
fn test_collected_keeps_source_order() {
    let document = modes::collected(&sample_sections()).unwrap();
    assert_eq!(document.mode, Mode::Collected);
    assert_eq!(
        headings(&document),
        vec![
            (Level::Section, "Programs".to_string()),
            (Level::Subsection, "Statements".to_string()),
            (Level::Section, "Expressions".to_string()),
            (Level::Subsection, "Literals".to_string()),
        ]
    );
    assert_eq!(
        production_names(&document),
        vec![
            "program",
            "block",
            "statements",
            "statement",
            "assignment",
            "conditional",
            "expression",
            "term",
            "number"
        ]
    );
}

#[test]
fn test_collected_multiline_rule() {
    let document = modes::collected(&sample_sections()).unwrap();
    let statement = document
        .productions()
        .find(|p| p.fragments.first() == Some(&Fragment::production_name("statement")))
        .unwrap();
    assert_eq!(
        statement.fragments,
        vec![
            Fragment::production_name("statement"),
            Fragment::Produces,
            Fragment::non_terminal("assignment"),
            Fragment::Alternation,
            Fragment::non_terminal("conditional"),
            Fragment::Alternation,
            Fragment::terminal("skip"),
        ]
    );
}

#[test]
fn test_ordered_sorts_names_and_alternatives() {
    let sections = vec![
        Section::new("B", Level::Section, "zeta = \"z\" ;\nalpha = <y> | <x> ;\n"),
        Section::new("A", Level::Section, "alpha = <w> ;\n"),
    ];
    let document = modes::ordered(&sections).unwrap();
    assert_eq!(production_names(&document), vec!["alpha", "zeta"]);

    let alpha = document.productions().next().unwrap();
    assert_eq!(
        alpha.fragments,
        vec![
            Fragment::production_name("alpha"),
            Fragment::Produces,
            Fragment::non_terminal("w"),
            Fragment::Alternation,
            Fragment::non_terminal("x"),
            Fragment::Alternation,
            Fragment::non_terminal("y"),
        ]
    );
}

#[test]
fn test_ordered_emits_one_block_per_name() {
    let document = modes::ordered(&sample_sections()).unwrap();
    assert_eq!(document.blocks.len(), 9);
    assert!(document
        .blocks
        .iter()
        .all(|block| matches!(block, Block::Rules { productions } if productions.len() == 1)));
}

#[test]
fn test_ordered_keeps_duplicate_alternatives() {
    let sections = vec![
        Section::new("One", Level::Section, "p = \"x\" ;\n"),
        Section::new("Two", Level::Section, "p = \"x\" ;\n"),
    ];
    let document = modes::ordered(&sections).unwrap();
    let p = document.productions().next().unwrap();
    assert_eq!(
        p.fragments,
        vec![
            Fragment::production_name("p"),
            Fragment::Produces,
            Fragment::terminal("x"),
            Fragment::Alternation,
            Fragment::terminal("x"),
        ]
    );

    let latex = LatexFormatter::default().serialize(&document).unwrap();
    assert_eq!(latex.matches("\\sm{x}").count(), 2);
}

#[test]
fn test_keywords_deduplicated_and_sorted() {
    let sections = vec![
        Section::new("A", Level::Section, "cond = \"if\" <expr> \"then\" ;\n"),
        Section::new("B", Level::Section, "other = \"if\" \"x\" ;\n"),
    ];
    let document = modes::keywords(&sections).unwrap();
    assert_eq!(
        document.blocks,
        vec![Block::Keywords {
            keywords: vec!["if".to_string(), "then".to_string(), "x".to_string()]
        }]
    );
}

#[test]
fn test_sample_keywords() {
    let document = modes::keywords(&sample_sections()).unwrap();
    assert_eq!(
        document.blocks,
        vec![Block::Keywords {
            keywords: ["begin", "end", "if", "program", "skip", "then"]
                .iter()
                .map(|s| s.to_string())
                .collect()
        }]
    );
}

#[rstest(mode => [Mode::Collected, Mode::Ordered, Mode::Keywords])]
fn test_modes_reject_malformed_terminal(mode: Mode) {
    let sections = vec![Section::new("Bad", Level::Section, "p = \"open <x> ;\n")];
    assert!(matches!(
        mode.run(&sections),
        Err(GrammarError::MalformedToken { .. })
    ));
}

#[rstest(mode => [Mode::Collected, Mode::Ordered, Mode::Keywords])]
fn test_modes_reject_two_rules_on_one_line(mode: Mode) {
    let sections = split_sections("[[ A ]]\np = <a> ; q = \"b\" ;\n").unwrap();
    assert!(matches!(
        mode.run(&sections),
        Err(GrammarError::MalformedToken { ref fragment, .. }) if fragment == ";"
    ));
}

#[rstest]
#[case("collected", Ok(Mode::Collected))]
#[case("ordered", Ok(Mode::Ordered))]
#[case("keywords", Ok(Mode::Keywords))]
#[case("alphabetical", Err(GrammarError::UnknownMode("alphabetical".to_string())))]
#[case("", Err(GrammarError::UnknownMode(String::new())))]
fn test_mode_selector(#[case] name: &str, #[case] expected: Result<Mode, GrammarError>) {
    assert_eq!(name.parse::<Mode>(), expected);
}

#[test]
fn test_collected_latex_output() {
    let sections = split_sections(
        "[[ Lists ]]\nargs = <expr> {2\",\" } ;\npair = {2} <x> ;\n",
    )
    .unwrap();
    let document = modes::collected(&sections).unwrap();
    let latex = LatexFormatter::default().serialize(&document).unwrap();
    insta::assert_snapshot!(latex.trim_end(), @r#"
    \subsection{Lists}

    \begin{flalign*}
    \pr{args}\ww \pp & \ww \pn{expr}\ww \{_{2}\ww\sm{,}\ww \}\ww &\\
    \pr{pair}\ww \pp & \ww \{_{2}\ww \}\ww \pn{x}\ww &
    \end{flalign*}
    "#);
}

#[test]
fn test_ordered_merges_sample_sections() {
    let table = merge_productions(&sample_sections()).unwrap();
    assert_eq!(table.len(), 9);
    assert_eq!(
        table.alternatives("term").unwrap(),
        ["<number>", "<name>", "\"(\" <expression> \")\""]
    );
}
