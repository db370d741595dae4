use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A validated run of `X-Y` range pairs for use inside a character class,
/// such as `A-Za-z0-9`.
///
/// Pairs must come in three consecutive runs: uppercase starts (ending in any
/// ASCII letter), then lowercase starts (ending in a lowercase letter), then
/// digit starts (ending in a digit). Each pair's end must not sort before its
/// start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterClassRange {
    range: String,
}

/// Which run a pair belongs to. Runs may only advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum PairRun {
    Upper,
    Lower,
    Digit,
}

impl PairRun {
    fn of(start: char, end: char) -> Option<PairRun> {
        if start.is_ascii_uppercase() && end.is_ascii_alphabetic() {
            Some(PairRun::Upper)
        } else if start.is_ascii_lowercase() && end.is_ascii_lowercase() {
            Some(PairRun::Lower)
        } else if start.is_ascii_digit() && end.is_ascii_digit() {
            Some(PairRun::Digit)
        } else {
            None
        }
    }
}

impl CharacterClassRange {
    pub fn new(range: &str) -> Result<Self> {
        if range.trim().is_empty() || !has_pair_shape(range) {
            return Err(Error::IllegalRange { range: range.to_string() });
        }
        if let Some(index) = first_out_of_order(range) {
            return Err(Error::OutOfOrderRange { range: range.to_string(), index });
        }

        log::debug!("Validated character class range: {:?}", range);
        Ok(CharacterClassRange { range: range.to_string() })
    }

    pub fn as_str(&self) -> &str {
        &self.range
    }
}

/// Checks that `range` is nothing but `X-Y` pairs, in run order.
fn has_pair_shape(range: &str) -> bool {
    let chars: Vec<char> = range.chars().collect();
    if chars.len() % 3 != 0 {
        return false;
    }

    let mut current = PairRun::Upper;
    for pair in chars.chunks(3) {
        if pair[1] != '-' {
            return false;
        }
        match PairRun::of(pair[0], pair[2]) {
            Some(run) if run >= current => current = run,
            _ => return false,
        }
    }
    true
}

/// Scans the pairs left to right and returns the index of the first end
/// character that sorts before its start.
fn first_out_of_order(range: &str) -> Option<usize> {
    let mut start: Option<char> = None;
    for (index, c) in range.chars().enumerate() {
        match start {
            None => start = Some(c),
            Some(_) if c == '-' => continue,
            Some(first) => {
                if c < first {
                    return Some(index);
                }
                start = None;
            }
        }
    }
    None
}

impl FromStr for CharacterClassRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CharacterClassRange::new(s)
    }
}

impl fmt::Display for CharacterClassRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.range)
    }
}
