/**
 * Random utilities.
 */

use std::cell::RefCell;
use std::ops::Range;
use std::time::SystemTime;
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

thread_local! {
    static MY_RNG: RefCell<Mcg128Xsl64> = RefCell::new(Mcg128Xsl64::new(0));
    static CURR_SEED: RefCell<u64> = RefCell::new(0);
}

pub fn seed_from_system_time() -> u64 {
    SystemTime::now().duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn current_seed() -> u64 {
    CURR_SEED.with(|s| *s.borrow())
}

pub fn set_seed(s: u64) {
    MY_RNG.with(|rng| {
        *rng.borrow_mut() = Mcg128Xsl64::seed_from_u64(s);
    });
    CURR_SEED.with(|se| {
        *se.borrow_mut() = s;
    });
}

/// A random number in `r`, or `r.start` if the range is empty.
pub fn rand_range(r: &Range<usize>) -> usize {
    if r.start >= r.end {
        return r.start;
    }
    MY_RNG.with(|rng| rng.borrow_mut().gen_range(r.start, r.end))
}

pub fn sample<T>(s: &[T]) -> &T {
    assert!(!s.is_empty());
    let idx = rand_range(&(0..s.len()));
    &s[idx]
}

pub fn rand_string(len: &Range<usize>, charset: &[char]) -> String {
    let len = rand_range(len);
    (0..len).map(|_| *sample(charset)).collect()
}

/// A random character boundary of `src` that is at least `min`, which must be
/// a boundary itself. The end of the string counts as a boundary.
pub fn rand_char_boundary(src: &str, min: usize) -> usize {
    let boundaries: Vec<usize> = src[min..].char_indices()
        .map(|(i, _)| min + i)
        .chain(std::iter::once(src.len()))
        .collect();
    *sample(&boundaries)
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod rnd_tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        set_seed(42);
        let first: Vec<usize> = (0..16).map(|_| rand_range(&(0..1000))).collect();
        set_seed(42);
        let second: Vec<usize> = (0..16).map(|_| rand_range(&(0..1000))).collect();
        assert_eq!(first, second);
        assert_eq!(current_seed(), 42);
    }

    #[test]
    fn empty_range_gives_start() {
        assert_eq!(rand_range(&(5..5)), 5);
    }

    #[test]
    fn boundaries_never_split_characters() {
        set_seed(7);
        let src = "a\u{e9}\u{3bb}b";
        for _ in 0..100 {
            let offs = rand_char_boundary(src, 0);
            assert!(src.is_char_boundary(offs));
            let after = rand_char_boundary(src, offs);
            assert!(after >= offs && src.is_char_boundary(after));
        }
    }

    #[test]
    fn strings_use_the_charset() {
        set_seed(1);
        let charset = ['x', '\u{e9}'];
        let s = rand_string(&(3..10), &charset);
        let len = s.chars().count();
        assert!(len >= 3 && len < 10);
        assert!(s.chars().all(|c| charset.contains(&c)));
    }
}
