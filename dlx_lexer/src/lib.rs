/**
 * The lexer library: rule tables, the maximal-munch scanner driving them and
 * the grammars built on top.
 */

mod token;
mod rules;
mod lexer;
pub mod token_list;
pub mod grammar;

pub use dlx_regex::{Priority, Regex, RegexError};

pub use token::{Token, TokenType};
pub use rules::{Rule, RuleTable};
pub use lexer::{Iter, Lexer};
pub use token_list::TokenListError;
