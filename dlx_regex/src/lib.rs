/**
 * Regular expressions that are matched by taking their derivative character by
 * character, instead of compiling them to an automaton up front.
 */

mod node;
mod algebra;
mod build;
mod error;

pub use node::{Node, Priority, Regex};
pub use error::RegexError;
