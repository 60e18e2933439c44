/**
 * Token definition.
 */

use std::fmt;
use std::hash::Hash;
use std::ops::Range;

/// A token returned by the lexer, covering `range` of the source in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token<T> {
    pub range: Range<usize>,
    pub kind: T,
}

impl <T> Token<T> {
    pub fn new(kind: T, range: Range<usize>) -> Self {
        Self{ range, kind }
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range.clone()]
    }
}

/// One line of a token list: `KIND START END`.
impl <T> fmt::Display for Token<T> where T : TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind.debug_name(), self.range.start, self.range.end)
    }
}

/// The vocabulary of one grammar. Usually implemented with `token_types!`.
pub trait TokenType : Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// The kind of a run of whitespace.
    fn whitespace() -> Self;

    /// The kind of a single character that no rule matches.
    fn bad_character() -> Self;

    fn debug_name(&self) -> &'static str;
    fn from_debug_name(name: &str) -> Option<Self>;

    /// The exact text of kinds that always look the same, like keywords and
    /// delimiters.
    fn fixed_text(&self) -> Option<&'static str>;

    fn all() -> &'static [Self];

    fn is_reserved_word(&self) -> bool {
        self.fixed_text().map_or(false, |text| text.chars().all(|c| c.is_alphabetic() || c == '_'))
    }

    fn is_delimiter(&self) -> bool {
        self.fixed_text().map_or(false, |text| !text.chars().all(|c| c.is_alphabetic() || c == '_'))
    }
}

/// Declares a token kind enum and implements `TokenType` for it.
///
/// The whitespace and bad character kinds are always named `WHITE_SPACE` and
/// `BAD_CHARACTER`. A kind followed by `= "text"` has that fixed text.
///
/// ```text
/// token_types! {
///     pub enum Kind {
///         whitespace: WhiteSpace,
///         bad_character: BadCharacter,
///         Identifier => "IDENTIFIER",
///         IfKeyword => "IF_KEYWORD" = "if",
///     }
/// }
/// ```
#[macro_export]
macro_rules! token_types {
    (@text) => { None };
    (@text $text:literal) => { Some($text) };

    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            whitespace: $ws:ident,
            bad_character: $bad:ident,
            $( $variant:ident => $debug:literal $(= $text:literal)? ),* $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $ws,
            $bad,
            $( $variant, )*
        }

        impl $crate::TokenType for $name {
            fn whitespace() -> Self {
                $name::$ws
            }

            fn bad_character() -> Self {
                $name::$bad
            }

            fn debug_name(&self) -> &'static str {
                match self {
                    $name::$ws => "WHITE_SPACE",
                    $name::$bad => "BAD_CHARACTER",
                    $( $name::$variant => $debug, )*
                }
            }

            fn from_debug_name(name: &str) -> Option<Self> {
                match name {
                    "WHITE_SPACE" => Some($name::$ws),
                    "BAD_CHARACTER" => Some($name::$bad),
                    $( $debug => Some($name::$variant), )*
                    _ => None,
                }
            }

            fn fixed_text(&self) -> Option<&'static str> {
                match self {
                    $( $name::$variant => $crate::token_types!(@text $($text)?), )*
                    _ => None,
                }
            }

            fn all() -> &'static [Self] {
                &[$name::$ws, $name::$bad, $( $name::$variant, )*]
            }
        }
    };
}

// Tests ///////////////////////////////////////////////////////////////////////
