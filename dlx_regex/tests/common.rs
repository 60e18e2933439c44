
use dlx_regex::Regex;

/// What happens when a regex is advanced over a whole sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceState {
    DoesNotAdvance,
    AdvancesWithoutMatch,
    Matches,
}

pub fn advance_state(rx: &Regex, sequence: &str) -> AdvanceState {
    match rx.advance_str(sequence) {
        None => AdvanceState::DoesNotAdvance,
        Some(rx) if rx.nullable() => AdvanceState::Matches,
        Some(_) => AdvanceState::AdvancesWithoutMatch,
    }
}

#[allow(dead_code)]
pub fn assert_advances(rx: &Regex, sequence: &str) {
    assert_ne!(AdvanceState::DoesNotAdvance, advance_state(rx, sequence),
        "{} should advance on {:?}", rx, sequence);
}

#[allow(dead_code)]
pub fn assert_does_not_advance(rx: &Regex, sequence: &str) {
    assert_eq!(AdvanceState::DoesNotAdvance, advance_state(rx, sequence),
        "{} should not advance on {:?}", rx, sequence);
}

#[allow(dead_code)]
pub fn assert_matches(rx: &Regex, sequence: &str) {
    assert_eq!(AdvanceState::Matches, advance_state(rx, sequence),
        "{} should match {:?}", rx, sequence);
}

#[allow(dead_code)]
pub fn assert_does_not_match(rx: &Regex, sequence: &str) {
    assert_ne!(AdvanceState::Matches, advance_state(rx, sequence),
        "{} should not match {:?}", rx, sequence);
}
