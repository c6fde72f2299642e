//! Character-code representation of candidate strings.
//!
//! A [`Genome`] is a fixed-length sequence of single-byte character codes. The
//! [`Target`] is the same representation, built once from the configured
//! string and never changed afterwards.

use crate::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest representable character code (space).
pub const PRINTABLE_MIN: u32 = 0x20;
/// Highest representable character code (`~`).
pub const PRINTABLE_MAX: u32 = 0x7E;

/// Draws a character code uniformly from `[PRINTABLE_MIN, PRINTABLE_MAX)`.
///
/// `~` is a valid target character but is never drawn.
pub fn random_char<R: RandomSource>(rng: &mut R) -> u8 {
    (PRINTABLE_MIN + rng.next_below(PRINTABLE_MAX - PRINTABLE_MIN)) as u8
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genome(Vec<u8>);

impl Genome {
    pub fn from_codes(codes: Vec<u8>) -> Self {
        Genome(codes)
    }

    /// Encodes a string byte by byte. Only printable ASCII round-trips.
    pub fn from_text(text: &str) -> Self {
        Genome(text.as_bytes().to_vec())
    }

    pub fn random<R: RandomSource>(len: usize, rng: &mut R) -> Self {
        Genome((0..len).map(|_| random_char(rng)).collect())
    }

    pub fn codes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// The string the population evolves toward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target(Genome);

impl Target {
    pub fn new(text: &str) -> Self {
        Target(Genome::from_text(text))
    }

    pub fn codes(&self) -> &[u8] {
        self.0.codes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, genome: &Genome) -> bool {
        &self.0 == genome
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
