/**
 * The derivative algebra: nullability, fixed match length and advancing a
 * regex by a single character.
 */

use std::sync::Arc;
use crate::node::{Node, Priority, Regex};

impl Regex {
    /// True if the regex matches the empty sequence, meaning that everything
    /// advanced so far constitutes a complete match.
    pub fn nullable(&self) -> bool {
        match self.node() {
            Node::Unit{ sequence, consumed, .. } => sequence.len() == *consumed,
            Node::Concatenation{ first, second, .. } => first.nullable() && second.nullable(),
            Node::Union{ first, second, .. } => first.nullable() || second.nullable(),
            Node::ZeroOrOne{ .. } | Node::ZeroOrMore{ .. } => true,
            Node::OneOrMore{ subregex, .. } => subregex.nullable(),
        }
    }

    /// The number of characters the regex still matches, if that number is
    /// fixed. Only units and concatenations of units have a fixed length.
    pub fn matched_length(&self) -> Option<usize> {
        match self.node() {
            Node::Unit{ sequence, consumed, .. } => Some(sequence[*consumed..].chars().count()),
            Node::Concatenation{ first, second, .. } =>
                Some(first.matched_length()? + second.matched_length()?),
            Node::Union{ .. }
            | Node::ZeroOrOne{ .. }
            | Node::ZeroOrMore{ .. }
            | Node::OneOrMore{ .. } => None,
        }
    }

    /// The Brzozowski derivative with respect to `c`: the regex matching
    /// whatever still has to follow after `c`. `None` if no continuation
    /// starts with `c`.
    pub fn advance(&self, c: char) -> Option<Regex> {
        match self.node() {
            Node::Unit{ sequence, consumed, priority } => {
                let head = sequence[*consumed..].chars().next()?;
                if head != c {
                    return None;
                }
                Some(Regex::from_node(Node::Unit{
                    sequence: Arc::clone(sequence),
                    consumed: consumed + c.len_utf8(),
                    priority: *priority,
                }))
            },

            Node::Concatenation{ first, second, priority } => {
                let first_advanced = first.advance(c);
                if !first.nullable() {
                    return first_advanced.map(|first|
                        Regex::concatenation_with_priority(first, second.clone(), *priority));
                }

                // 'first' may already be done, so 'c' can also start 'second'
                match (first_advanced, second.advance(c)) {
                    (None, None) => None,
                    (Some(first), None) =>
                        Some(Regex::concatenation_with_priority(first, second.clone(), *priority)),
                    (None, Some(second)) => Some(second),
                    (Some(first), Some(second_advanced)) => Some(merge(
                        Regex::concatenation_with_priority(first, second.clone(), *priority),
                        second_advanced,
                        *priority,
                    )),
                }
            },

            Node::Union{ first, second, priority } => {
                match (first.advance(c), second.advance(c)) {
                    (None, None) => None,
                    (Some(rx), None) | (None, Some(rx)) => Some(rx),
                    (Some(first), Some(second)) => Some(merge(first, second, *priority)),
                }
            },

            // Once a character is consumed the empty alternative is gone
            Node::ZeroOrOne{ subregex, .. } => subregex.advance(c),

            Node::ZeroOrMore{ subregex, priority } => {
                let advanced = subregex.advance(c)?;
                Some(Regex::concatenation_with_priority(advanced, self.clone(), *priority))
            },

            Node::OneOrMore{ subregex, priority } => {
                let advanced = subregex.advance(c)?;
                let rest = Regex::zero_or_more_with_priority(subregex.clone(), *priority);
                Some(Regex::concatenation_with_priority(advanced, rest, *priority))
            },
        }
    }

    /// Advances the regex by every character of `sequence` in order.
    pub fn advance_str(&self, sequence: &str) -> Option<Regex> {
        let mut current = self.clone();
        for c in sequence.chars() {
            current = current.advance(c)?;
        }
        Some(current)
    }

    /// True if the regex matches the whole of `sequence`.
    pub fn matches(&self, sequence: &str) -> bool {
        self.advance_str(sequence).map_or(false, |rx| rx.nullable())
    }
}

/// A union of two derivatives, without repeating an alternative that is
/// already present on the other side.
fn merge(first: Regex, second: Regex, priority: Priority) -> Regex {
    if first.same_as(&second) || contains_alternative(&first, &second) {
        return first;
    }
    if contains_alternative(&second, &first) {
        return second;
    }
    Regex::union_with_priority(first, second, priority)
}

/// True if `union` is a union with `alternative` as one of its direct branches.
fn contains_alternative(union: &Regex, alternative: &Regex) -> bool {
    match union.node() {
        Node::Union{ first, second, .. } => first.same_as(alternative) || second.same_as(alternative),
        _ => false,
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
