//! Candidate production: uniformly random N-bit patterns with the top bit
//! forced to 1, so every value lands in [2^(N-1), 2^N).

use anyhow::{Context, Result};
use rug::rand::RandState;
use rug::Integer;

/// Lowest bit width the source will produce. The generator's constructor
/// enforces a much higher floor; this one only guards direct misuse of the
/// source.
pub const MIN_CANDIDATE_BITS: u32 = 2;

/// A stream of prime candidates.
///
/// The generator pulls from this until the oracle accepts one. Tests
/// inject scripted sequences to force specific accept/reject paths without
/// touching the randomness.
pub trait CandidateSource {
    /// Produce the next candidate. An error is fatal to the enclosing
    /// search and must not be retried.
    fn next_candidate(&mut self) -> Result<Integer>;
}

/// Draws candidates from a seeded GMP random stream.
///
/// Each candidate is built as a binary string: a leading 1, then
/// `bits - 1` independent fair bits. Drawing mutates the stream state
/// non-atomically, so a single source must not be shared across threads
/// without external synchronization.
pub struct RandomCandidateSource {
    bits: u32,
    rng: RandState<'static>,
}

impl RandomCandidateSource {
    /// A source producing `bits`-wide candidates from an explicitly seeded
    /// stream. Widths below [`MIN_CANDIDATE_BITS`] are raised to it.
    pub fn new(bits: u32, seed: &Integer) -> Self {
        let mut rng = RandState::new();
        rng.seed(seed);
        RandomCandidateSource {
            bits: bits.max(MIN_CANDIDATE_BITS),
            rng,
        }
    }

    /// Seeds from wall-clock nanoseconds. Predictable, so fine for tooling
    /// and tests but not for production key material.
    pub fn from_clock(bits: u32) -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        Self::new(bits, &Integer::from(nanos))
    }

    /// Candidate bit width.
    pub fn bits(&self) -> u32 {
        self.bits
    }
}

impl CandidateSource for RandomCandidateSource {
    fn next_candidate(&mut self) -> Result<Integer> {
        let mut pattern = String::with_capacity(self.bits as usize);
        pattern.push('1');
        for _ in 1..self.bits {
            pattern.push(if self.rng.bits(1) == 0 { '0' } else { '1' });
        }

        // Parsing a well-formed 0/1 string cannot fail; if it does, the
        // pattern builder is broken and the caller must not retry.
        Integer::from_str_radix(&pattern, 2)
            .with_context(|| format!("malformed {}-bit candidate pattern", self.bits))
    }
}
