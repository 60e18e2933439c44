
use dlx_lexer::{token_list, Lexer, Token, TokenType};

#[allow(dead_code)]
pub fn assert_iter_eq<I1, I2>(mut i1: I1, mut i2: I2)
    where I1 : Iterator, I2 : Iterator,
    <I1 as Iterator>::Item : PartialEq<<I2 as Iterator>::Item> + std::fmt::Debug,
    <I2 as Iterator>::Item : std::fmt::Debug {
    let mut index = 0;
    loop {
        match (i1.next(), i2.next()) {
            (Some(a), Some(b)) => assert_eq!(a, b, "Mismatch at element {}!", index),
            (None, None) => return,
            (Some(a), None) => panic!("RHS terminates early ({:?})!", a),
            (None, Some(b)) => panic!("LHS terminates early ({:?})!", b),
        }
        index += 1;
    }
}

/// Checks that the tokens cover `source` exactly, in order, without empty
/// tokens and without splitting a character.
#[allow(dead_code)]
pub fn assert_partition<T>(source: &str, tokens: &[Token<T>]) where T : TokenType {
    let mut offset = 0;
    for token in tokens {
        assert_eq!(token.range.start, offset, "Gap or overlap before {:?}!", token);
        assert!(!token.is_empty(), "Empty token {:?}!", token);
        assert!(source.is_char_boundary(token.range.end), "{:?} splits a character!", token);
        offset = token.range.end;
    }
    assert_eq!(offset, source.len(), "Tokens stop before the end of the source!");
}

/// Lexes `source` and compares the result with a token list.
#[allow(dead_code)]
pub fn assert_lexes_as<T>(lexer: Lexer<'_, T>, source: &str, expected: &str) where T : TokenType {
    let expected: Vec<Token<T>> = match token_list::parse(expected) {
        Ok(tokens) => tokens,
        Err(err) => panic!("Malformed token list: {}", err),
    };
    assert_iter_eq(lexer.iter(source), expected.into_iter());
}
