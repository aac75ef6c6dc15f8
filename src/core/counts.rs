//! Derived input statistics.
//!
//! The controller calls `derive_counts` after every input mutation; the
//! counts are stored, never observed.

/// Minimum trimmed length (in characters) accepted by Analyze.
pub const MIN_INPUT_CHARS: usize = 10;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub chars: usize,
    pub words: usize,
}

pub fn derive_counts(input: &str) -> Counts {
    Counts {
        chars: input.chars().count(),
        words: input.split_whitespace().count(),
    }
}

/// Whether `input` is long enough to send to the generator.
pub fn meets_minimum(input: &str) -> bool {
    input.trim().chars().count() >= MIN_INPUT_CHARS
}
