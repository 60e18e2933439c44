/**
 * Invariants every tokenization has to satisfy, whatever the input.
 */

use anyhow::{bail, ensure, Result};
use dlx_lexer::grammar::WHITESPACE_CHARACTERS;
use dlx_lexer::{Lexer, Token, TokenType};

/// Lexes `source` twice and checks the result, returning the token count.
pub fn check_source<T>(lexer: Lexer<'_, T>, source: &str) -> Result<usize> where T : TokenType {
    let tokens = lexer.tokenize(source);
    check_partition(source, &tokens)?;
    check_sentinels(source, &tokens)?;

    let again: Vec<Token<T>> = lexer.iter(source).collect();
    ensure!(again == tokens, "lexing twice gave different tokens");

    Ok(tokens.len())
}

/// The tokens are non-empty, contiguous, and glue back into the source.
fn check_partition<T>(source: &str, tokens: &[Token<T>]) -> Result<()> where T : TokenType {
    let mut offset = 0;
    let mut rebuilt = String::with_capacity(source.len());
    for token in tokens {
        ensure!(token.range.start == offset, "{} does not start at {}", token, offset);
        ensure!(!token.is_empty(), "empty token {}", token);
        ensure!(source.is_char_boundary(token.range.end), "{} splits a character", token);
        rebuilt.push_str(token.text(source));
        offset = token.range.end;
    }
    ensure!(offset == source.len(), "tokens end at {}, the source at {}", offset, source.len());
    ensure!(rebuilt == source, "token texts do not add up to the source");
    Ok(())
}

/// Bad characters are single characters, and whitespace runs are never split.
fn check_sentinels<T>(source: &str, tokens: &[Token<T>]) -> Result<()> where T : TokenType {
    let mut previous_was_whitespace = false;
    for token in tokens {
        let text = token.text(source);
        if token.kind == T::bad_character() && text.chars().count() != 1 {
            bail!("bad character token {} spans {:?}", token, text);
        }
        let is_whitespace = token.kind == T::whitespace();
        if is_whitespace {
            ensure!(!previous_was_whitespace, "whitespace run split at {}", token);
            ensure!(text.chars().all(|c| WHITESPACE_CHARACTERS.contains(c)),
                "whitespace token {} holds {:?}", token, text);
        }
        previous_was_whitespace = is_whitespace;
    }
    Ok(())
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod check_tests {
    use super::*;
    use dlx_lexer::grammar::{ada, gpr};

    dlx_lexer::token_types! {
        enum Kind {
            whitespace: Ws,
            bad_character: Bad,
            Ident => "IDENT",
        }
    }

    #[test]
    fn grammars_pass_on_sample_sources() {
        assert_eq!(check_source(ada::lexer(), "").unwrap(), 0);
        assert_eq!(check_source(ada::lexer(), "X := 16#FF#; -- ok\n").unwrap(), 9);
        assert!(check_source(gpr::lexer(), "project P is\nend P;\u{0}\u{ff}").is_ok());
    }

    #[test]
    fn gaps_are_reported() {
        let tokens = vec![Token::new(Kind::Ident, 0..1), Token::new(Kind::Ident, 2..3)];
        assert!(check_partition("abc", &tokens).is_err());
    }

    #[test]
    fn short_coverage_is_reported() {
        let tokens = vec![Token::new(Kind::Ident, 0..2)];
        assert!(check_partition("abc", &tokens).is_err());
    }

    #[test]
    fn split_whitespace_is_reported() {
        let tokens = vec![Token::new(Kind::Ws, 0..1), Token::new(Kind::Ws, 1..2)];
        assert!(check_sentinels("  ", &tokens).is_err());
    }

    #[test]
    fn long_bad_characters_are_reported() {
        let tokens = vec![Token::new(Kind::Bad, 0..2)];
        assert!(check_sentinels("??", &tokens).is_err());
    }
}
