/**
 * Helpers to build larger regexes out of lists, ranges and character sets.
 */

use crate::error::RegexError;
use crate::node::{Priority, Regex};

impl Regex {
    /// Concatenates the regexes in order, nested to the right:
    ///
    /// ```text
    ///   concat(r1, concat(r2, ... concat(r(n-1), rn)))
    /// ```
    ///
    /// Every created node gets the highest priority among the regexes it
    /// covers, so the root carries the highest priority of the whole list.
    pub fn concatenation_of<I>(regexes: I) -> Result<Self, RegexError>
        where I : IntoIterator<Item = Regex> {

        fold_right(regexes, "concatenation", Regex::concatenation_with_priority)
    }

    /// Same as `concatenation_of`, but creates a union.
    pub fn union_of<I>(regexes: I) -> Result<Self, RegexError>
        where I : IntoIterator<Item = Regex> {

        fold_right(regexes, "union", Regex::union_with_priority)
    }

    pub fn range(from: char, to: char) -> Result<Self, RegexError> {
        Self::range_with_priority(from, to, 0)
    }

    /// A union of single-character units for every character in
    /// `from..=to`, all with the given priority.
    pub fn range_with_priority(from: char, to: char, priority: Priority)
        -> Result<Self, RegexError> {

        if from > to {
            return Err(RegexError::InvalidRange{ from, to });
        }
        let mut buffer = [0u8; 4];
        let mut result = Regex::unit_with_priority(to.encode_utf8(&mut buffer), priority);
        for c in (from..to).rev() {
            let unit = Regex::unit_with_priority(c.encode_utf8(&mut buffer), priority);
            result = Regex::union_with_priority(unit, result, priority);
        }
        Ok(result)
    }

    /// A union of single-character units, one for each character of `chars`.
    pub fn one_of(chars: &str) -> Result<Self, RegexError> {
        let mut buffer = [0u8; 4];
        Self::union_of(chars.chars().map(|c| Regex::unit(c.encode_utf8(&mut buffer))))
    }
}

impl Regex {
    /// Matches `sequence` with every ASCII letter in either case, as a
    /// concatenation of per-character regexes. Other characters must match
    /// exactly.
    pub fn ignoring_ascii_case(sequence: &str) -> Result<Self, RegexError> {
        let mut buffer = [0u8; 4];
        Self::concatenation_of(sequence.chars().map(|c| {
            let lower = c.to_ascii_lowercase();
            let upper = c.to_ascii_uppercase();
            if lower == upper {
                Regex::unit(c.encode_utf8(&mut buffer))
            }
            else {
                Regex::union(
                    Regex::unit(lower.encode_utf8(&mut buffer)),
                    Regex::unit(upper.encode_utf8(&mut buffer)),
                )
            }
        }))
    }
}

fn fold_right<I, F>(regexes: I, combinator: &'static str, combine: F) -> Result<Regex, RegexError>
    where I : IntoIterator<Item = Regex>, F : Fn(Regex, Regex, Priority) -> Regex {

    let mut regexes: Vec<Regex> = regexes.into_iter().collect();
    let mut result = regexes.pop().ok_or(RegexError::EmptyList{ combinator })?;
    let mut max_priority = result.priority();

    while let Some(next) = regexes.pop() {
        max_priority = max_priority.max(next.priority());
        result = combine(next, result, max_priority);
    }

    Ok(result)
}

// Tests ///////////////////////////////////////////////////////////////////////
