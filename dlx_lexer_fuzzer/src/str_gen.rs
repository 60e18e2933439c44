/**
 * String generation strategies.
 */

use std::ops::Range;
use crate::rnd::*;

pub trait StringGenStrategy {
    fn generate(&self) -> String;
}

/**
 * Random string from a charset.
 */

#[derive(Debug, Clone)]
pub struct RandomStringGenerator {
    len: Range<usize>,
    charset: Vec<char>,
}

impl RandomStringGenerator {
    pub fn with_len_and_charset(len: Range<usize>, charset: &str) -> Self {
        Self{ len, charset: charset.chars().collect() }
    }
}

impl StringGenStrategy for RandomStringGenerator {
    fn generate(&self) -> String {
        rand_string(&self.len, &self.charset)
    }
}

/**
 * Glues together snippets of the lexed language, so edits often produce real
 * tokens instead of garbage.
 */

#[derive(Debug, Clone)]
pub struct SnippetGenerator {
    count: Range<usize>,
    snippets: Vec<String>,
}

impl SnippetGenerator {
    pub fn with_count_and_snippets<I, S>(count: Range<usize>, snippets: I) -> Self
        where I : IntoIterator<Item = S>, S : Into<String> {

        let snippets: Vec<String> = snippets.into_iter().map(Into::into).collect();
        assert!(!snippets.is_empty());
        Self{ count, snippets }
    }
}

impl StringGenStrategy for SnippetGenerator {
    fn generate(&self) -> String {
        let count = rand_range(&self.count);
        let mut res = String::new();
        for _ in 0..count {
            res.push_str(sample::<String>(&self.snippets));
        }
        res
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
