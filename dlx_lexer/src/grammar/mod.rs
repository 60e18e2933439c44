/**
 * Rule tables for the supported file formats, and the character classes they
 * are built from.
 */

pub mod ada;
pub mod gpr;

use dlx_regex::{Regex, RegexError};

/// Characters separating tokens: space, tab and the line terminators.
pub const WHITESPACE_CHARACTERS: &str = " \t\n\r\u{b}\u{c}";

pub fn letter() -> Result<Regex, RegexError> {
    Ok(Regex::union(Regex::range('a', 'z')?, Regex::range('A', 'Z')?))
}

pub fn digit() -> Result<Regex, RegexError> {
    Regex::range('0', '9')
}

/// `letter {[_] letter_or_digit}`, so no leading, trailing or doubled
/// underscores.
pub fn identifier() -> Result<Regex, RegexError> {
    let letter = letter()?;
    let letter_or_digit = Regex::union(letter.clone(), digit()?);
    Ok(Regex::concatenation(
        letter,
        Regex::zero_or_more(Regex::concatenation(
            Regex::zero_or_one(Regex::unit("_")),
            letter_or_digit,
        )),
    ))
}

/// Printable Latin-1: ' '..'~' and the upper half starting at NBSP.
pub fn graphic_character() -> Result<Regex, RegexError> {
    Ok(Regex::union(Regex::range(' ', '~')?, Regex::range('\u{a0}', '\u{ff}')?))
}

/// `" {non-quote graphic | ""} "`
pub fn string_literal() -> Result<Regex, RegexError> {
    let non_quote = Regex::union_of(vec![
        Regex::range(' ', '!')?,
        Regex::range('#', '~')?,
        Regex::range('\u{a0}', '\u{ff}')?,
    ])?;
    Regex::concatenation_of(vec![
        Regex::unit("\""),
        Regex::zero_or_more(Regex::union(non_quote, Regex::unit("\"\""))),
        Regex::unit("\""),
    ])
}

/// `--` up to, but not including, the end of the line.
pub fn comment() -> Result<Regex, RegexError> {
    let body = Regex::union(Regex::unit("\t"), graphic_character()?);
    Ok(Regex::concatenation(Regex::unit("--"), Regex::zero_or_more(body)))
}

/// A whole run of whitespace, so it always lexes as a single token.
pub fn whitespace() -> Result<Regex, RegexError> {
    Ok(Regex::one_or_more(Regex::one_of(WHITESPACE_CHARACTERS)?))
}

/// Panics with the grammar name if a static grammar fails to build.
pub(crate) fn expect_grammar<T>(name: &str, table: Result<T, RegexError>) -> T {
    match table {
        Ok(table) => table,
        Err(err) => panic!("the {} grammar is malformed: {}", name, err),
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod grammar_tests {
    use super::*;

    #[test]
    fn identifiers() {
        let rx = identifier().unwrap();
        for ok in &["X", "abc", "Ada_2012", "a_b_c", "A1"] {
            assert!(rx.matches(ok), "{:?} should match", ok);
        }
        for bad in &["", "_a", "a_", "a__b", "1a", "a-b"] {
            assert!(!rx.matches(bad), "{:?} should not match", bad);
        }
    }

    #[test]
    fn string_literals() {
        let rx = string_literal().unwrap();
        assert!(rx.matches("\"\""));
        assert!(rx.matches("\"Hello, world!\""));
        assert!(rx.matches("\"say \"\"hi\"\"\""));
        assert!(rx.matches("\"caf\u{e9}\""));
        assert!(!rx.matches("\"unterminated"));
        assert!(!rx.matches("\"a\"b\""));
        assert!(!rx.matches("\"tab\tinside\""));
    }

    #[test]
    fn comments() {
        let rx = comment().unwrap();
        assert!(rx.matches("--"));
        assert!(rx.matches("-- anything\tgoes here"));
        assert!(!rx.matches("-"));
        assert!(!rx.matches("-- two\nlines"));
    }

    #[test]
    fn whitespace_runs() {
        let rx = whitespace().unwrap();
        assert!(rx.matches(" "));
        assert!(rx.matches(" \t\r\n\u{b}\u{c}  "));
        assert!(!rx.matches(""));
        assert!(!rx.matches(" x"));
    }

    #[test]
    #[should_panic(expected = "the Test grammar is malformed")]
    fn malformed_grammar_panics_with_name() {
        expect_grammar("Test", Regex::range('z', 'a'));
    }
}
