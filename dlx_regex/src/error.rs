/**
 * Errors that can occur while building a regex.
 */

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegexError {
    #[error("cannot build a {combinator} out of an empty list of regexes")]
    EmptyList{
        combinator: &'static str,
    },

    #[error("invalid character range: {from:?} is greater than {to:?}")]
    InvalidRange{
        from: char,
        to: char,
    },
}
