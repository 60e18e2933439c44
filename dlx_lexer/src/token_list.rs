/**
 * Plain-text token lists, one `KIND START END` token per line.
 *
 * Blank lines and everything after a `--` field are ignored, so expected
 * lexer outputs can be written and commented by hand:
 *
 * ```text
 * -- procedure Main is
 * PROCEDURE_KEYWORD 0 9
 * WHITE_SPACE 9 10
 * IDENTIFIER 10 14  -- Main
 * ```
 */

use thiserror::Error;
use crate::token::{Token, TokenType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenListError {
    #[error("line {line}: expected 3 fields (KIND START END), found {found}")]
    FieldCount{ line: usize, found: usize },

    #[error("line {line}: invalid offset '{field}'")]
    InvalidOffset{ line: usize, field: String },

    #[error("line {line}: unknown token kind '{name}'")]
    UnknownKind{ line: usize, name: String },

    #[error("line {line}: token ends at {end} before it starts at {start}")]
    InvertedRange{ line: usize, start: usize, end: usize },
}

/// Parses a token list. Line numbers in errors are 1-based.
pub fn parse<T>(text: &str) -> Result<Vec<Token<T>>, TokenListError> where T : TokenType {
    let mut result = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(token) = parse_line(index + 1, line)? {
            result.push(token);
        }
    }
    Ok(result)
}

fn parse_line<T>(line: usize, text: &str) -> Result<Option<Token<T>>, TokenListError>
    where T : TokenType {

    let fields: Vec<&str> = text.split_whitespace()
        .take_while(|field| !field.starts_with("--"))
        .collect();

    if fields.is_empty() {
        return Ok(None);
    }
    if fields.len() != 3 {
        return Err(TokenListError::FieldCount{ line, found: fields.len() });
    }

    let kind = T::from_debug_name(fields[0])
        .ok_or_else(|| TokenListError::UnknownKind{ line, name: fields[0].to_string() })?;
    let offset = |field: &str| field.parse::<usize>()
        .map_err(|_| TokenListError::InvalidOffset{ line, field: field.to_string() });
    let start = offset(fields[1])?;
    let end = offset(fields[2])?;

    if end < start {
        return Err(TokenListError::InvertedRange{ line, start, end });
    }
    Ok(Some(Token::new(kind, start..end)))
}

/// Renders tokens in the format `parse` reads, one per line.
pub fn render<T>(tokens: &[Token<T>]) -> String where T : TokenType {
    tokens.iter().map(|token| format!("{}\n", token)).collect()
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod token_list_tests {
    use super::*;

    crate::token_types! {
        enum Kind {
            whitespace: Ws,
            bad_character: Bad,
            Ident => "IDENTIFIER",
            Is => "IS_KEYWORD" = "is",
        }
    }

    fn parse_kinds(text: &str) -> Result<Vec<Token<Kind>>, TokenListError> {
        parse(text)
    }

    #[test]
    fn parses_lines_and_skips_comments() {
        let text = "\
-- header comment
IDENTIFIER 0 3

WHITE_SPACE 3 4   -- trailing comment
   IS_KEYWORD\t4 6
BAD_CHARACTER 6 7
";
        assert_eq!(parse_kinds(text), Ok(vec![
            Token::new(Kind::Ident, 0..3),
            Token::new(Kind::Ws, 3..4),
            Token::new(Kind::Is, 4..6),
            Token::new(Kind::Bad, 6..7),
        ]));
    }

    #[test]
    fn empty_list() {
        assert_eq!(parse_kinds(""), Ok(vec![]));
        assert_eq!(parse_kinds("-- nothing\n\n  \n"), Ok(vec![]));
    }

    #[test]
    fn wrong_field_count() {
        assert_eq!(parse_kinds("IDENTIFIER 0 3\nIDENTIFIER 3"),
            Err(TokenListError::FieldCount{ line: 2, found: 2 }));
        assert_eq!(parse_kinds("IDENTIFIER 0 3 4"),
            Err(TokenListError::FieldCount{ line: 1, found: 4 }));
    }

    #[test]
    fn invalid_offset() {
        assert_eq!(parse_kinds("\nIDENTIFIER x 3"),
            Err(TokenListError::InvalidOffset{ line: 2, field: "x".into() }));
        assert_eq!(parse_kinds("IDENTIFIER 0 -3"),
            Err(TokenListError::InvalidOffset{ line: 1, field: "-3".into() }));
    }

    #[test]
    fn unknown_kind() {
        let err = parse_kinds("KEYWORD 0 3").unwrap_err();
        assert_eq!(err, TokenListError::UnknownKind{ line: 1, name: "KEYWORD".into() });
        assert_eq!(err.to_string(), "line 1: unknown token kind 'KEYWORD'");
    }

    #[test]
    fn inverted_range() {
        assert_eq!(parse_kinds("IDENTIFIER 5 3"),
            Err(TokenListError::InvertedRange{ line: 1, start: 5, end: 3 }));
    }

    #[test]
    fn render_then_parse() {
        let tokens = vec![Token::new(Kind::Is, 0..2), Token::new(Kind::Ws, 2..5)];
        let text = render(&tokens);
        assert_eq!(text, "IS_KEYWORD 0 2\nWHITE_SPACE 2 5\n");
        assert_eq!(parse_kinds(&text), Ok(tokens));
        assert_eq!(render::<Kind>(&[]), "");
    }
}
