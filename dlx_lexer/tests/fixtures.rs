mod common;

use dlx_lexer::grammar::{ada, gpr};
use dlx_lexer::{token_list, Token};
use common::{assert_lexes_as, assert_partition};

const HELLO_ADB: &str = include_str!("fixtures/hello.adb");
const HELLO_ADB_TOKENS: &str = include_str!("fixtures/hello.adb.tokens");
const DEFAULT_GPR: &str = include_str!("fixtures/default.gpr");
const DEFAULT_GPR_TOKENS: &str = include_str!("fixtures/default.gpr.tokens");

#[test]
fn ada_fixture() {
    assert_lexes_as(ada::lexer(), HELLO_ADB, HELLO_ADB_TOKENS);
}

#[test]
fn gpr_fixture() {
    assert_lexes_as(gpr::lexer(), DEFAULT_GPR, DEFAULT_GPR_TOKENS);
}

#[test]
fn fixtures_partition_their_sources() {
    assert_partition(HELLO_ADB, &ada::lexer().tokenize(HELLO_ADB));
    assert_partition(DEFAULT_GPR, &gpr::lexer().tokenize(DEFAULT_GPR));
}

#[test]
fn rendered_tokens_read_back() {
    let tokens = ada::lexer().tokenize(HELLO_ADB);
    let text = token_list::render(&tokens);
    let parsed: Vec<Token<ada::AdaTokenKind>> = token_list::parse(&text).unwrap();
    assert_eq!(parsed, tokens);
}

#[test]
fn comment_offsets_are_in_bytes() {
    // The comment holds a two-byte character
    let comment = ada::lexer().iter(HELLO_ADB)
        .find(|t| t.kind == ada::AdaTokenKind::Comment)
        .unwrap();
    assert_eq!(comment.text(HELLO_ADB), "--  Greets the caf\u{e9} crowd");
    assert_eq!(comment.len(), 26);
}

#[test]
fn ada_fixture_has_one_bad_character() {
    let bad: Vec<_> = ada::lexer().iter(HELLO_ADB)
        .filter(|t| t.kind == ada::AdaTokenKind::BadCharacter)
        .map(|t| t.text(HELLO_ADB))
        .collect();
    assert_eq!(bad, vec!["?"]);
}
