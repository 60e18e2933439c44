/**
 * The maximal-munch scanner driving a rule table over a source string.
 */

use dlx_regex::Regex;
use crate::rules::{Rule, RuleTable};
use crate::token::{Token, TokenType};

/**
 * Lexer interface.
 */

/// Tokenizes sources with a rule table. The table is only borrowed, so any
/// number of lexers can share it, across threads too.
#[derive(Debug, Clone, Copy)]
pub struct Lexer<'t, T> {
    table: &'t RuleTable<T>,
}

impl <'t, T> Lexer<'t, T> where T : TokenType {
    pub fn new(table: &'t RuleTable<T>) -> Self {
        Self{ table }
    }

    /// Lazily iterates over the tokens of `source`. The tokens cover the whole
    /// source without gaps, and iterating again yields the same tokens.
    pub fn iter<'s>(&self, source: &'s str) -> Iter<'t, 's, T> {
        Iter::with_source(self.table, source)
    }

    pub fn tokenize(&self, source: &str) -> Vec<Token<T>> {
        self.iter(source).collect()
    }
}

/**
 * Iterate over all tokens.
 */

/// A rule that could still match at the current position, with the part of
/// its regex that is left to match.
#[derive(Debug, Clone)]
struct Candidate<'t, T> {
    rule: &'t Rule<T>,
    regex: Regex,
}

pub struct Iter<'t, 's, T> {
    table: &'t RuleTable<T>,
    source: &'s str,
    source_index: usize,
    // Reused between tokens to avoid reallocating
    candidates: Vec<Candidate<'t, T>>,
    advanced: Vec<Candidate<'t, T>>,
}

impl <'t, 's, T> Iter<'t, 's, T> where T : TokenType {
    fn with_source(table: &'t RuleTable<T>, source: &'s str) -> Self {
        Self{
            table,
            source,
            source_index: 0,
            candidates: Vec::with_capacity(table.len()),
            advanced: Vec::with_capacity(table.len()),
        }
    }

    /// The longest match at the start of `rest`, as the matching rule and the
    /// matched length in bytes. Ties in length go to the higher priority, then
    /// to the earlier rule.
    fn longest_match(&mut self, rest: &str) -> Option<(&'t Rule<T>, usize)> {
        self.candidates.clear();
        self.candidates.extend(self.table.rules().iter()
            .map(|rule| Candidate{ rule, regex: rule.regex.clone() }));

        let mut best: Option<(&'t Rule<T>, usize)> = None;

        for (index, c) in rest.char_indices() {
            let length = index + c.len_utf8();
            self.advanced.clear();

            for candidate in self.candidates.drain(..) {
                let regex = match candidate.regex.advance(c) {
                    Some(regex) => regex,
                    None => continue,
                };

                if regex.nullable() {
                    let better = match best {
                        None => true,
                        Some((rule, best_length)) => length > best_length
                            || (length == best_length && candidate.rule.priority > rule.priority),
                    };
                    if better {
                        best = Some((candidate.rule, length));
                    }
                }

                self.advanced.push(Candidate{ rule: candidate.rule, regex });
            }

            std::mem::swap(&mut self.candidates, &mut self.advanced);
            if self.candidates.is_empty() {
                break;
            }
        }

        best
    }
}

impl <'t, 's, T> Iterator for Iter<'t, 's, T> where T : TokenType {
    type Item = Token<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source;
        let start = self.source_index;
        let rest = &source[start..];
        let first = rest.chars().next()?;

        let (kind, length) = match self.longest_match(rest) {
            Some((rule, length)) => (rule.kind, length),
            // Nothing matches, skip a single character so we always progress
            None => (T::bad_character(), first.len_utf8()),
        };

        self.source_index += length;
        Some(Token::new(kind, start..self.source_index))
    }
}

impl <'t, 's, T> std::iter::FusedIterator for Iter<'t, 's, T> where T : TokenType { }

// Tests ///////////////////////////////////////////////////////////////////////
