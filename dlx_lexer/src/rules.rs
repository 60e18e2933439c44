/**
 * Rule tables: which regex produces which token kind, with what priority.
 */

use dlx_regex::{Priority, Regex, RegexError};
use crate::lexer::Lexer;
use crate::token::TokenType;

#[derive(Debug, Clone)]
pub struct Rule<T> {
    pub kind: T,
    /// The regex with the rule priority assigned to every node.
    pub regex: Regex,
    pub priority: Priority,
}

/// An ordered set of rules. When two rules match the same, longest text with
/// the same priority, the one registered first wins.
#[derive(Debug, Clone)]
pub struct RuleTable<T> {
    rules: Vec<Rule<T>>,
}

impl <T> RuleTable<T> {
    pub fn new() -> Self {
        Self{ rules: Vec::new() }
    }

    pub fn register_rule(&mut self, kind: T, regex: Regex, priority: Priority) -> &mut Self {
        let regex = regex.with_priority(priority);
        self.rules.push(Rule{ kind, regex, priority });
        self
    }

    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl <T> RuleTable<T> where T : TokenType {
    /// Registers a unit rule for every kind that has a fixed text.
    pub fn register_fixed_kinds(&mut self, priority: Priority) -> &mut Self {
        for kind in T::all() {
            if let Some(text) = kind.fixed_text() {
                self.register_rule(*kind, Regex::unit(text), priority);
            }
        }
        self
    }

    /// Like `register_fixed_kinds`, but reserved words match with any mix of
    /// ASCII cases, as Ada and project file keywords do.
    pub fn register_fixed_kinds_ignoring_case(&mut self, priority: Priority)
        -> Result<&mut Self, RegexError> {

        for kind in T::all() {
            if let Some(text) = kind.fixed_text() {
                let regex = if kind.is_reserved_word() {
                    Regex::ignoring_ascii_case(text)?
                }
                else {
                    Regex::unit(text)
                };
                self.register_rule(*kind, regex, priority);
            }
        }
        Ok(self)
    }

    pub fn lexer(&self) -> Lexer<'_, T> {
        Lexer::new(self)
    }
}

impl <T> Default for RuleTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
