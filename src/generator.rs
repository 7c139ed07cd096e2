//! Generator orchestration: pull candidates from the source, run the
//! oracle, return the first accepted value.

use anyhow::Result;
use rug::Integer;
use tracing::{debug, warn};

use crate::candidate::{CandidateSource, RandomCandidateSource};
use crate::oracle::PrimalityOracle;

/// Floor for the candidate bit width. Smaller or zero requests are raised
/// to this, never rejected.
pub const MINIMUM_BITS: u32 = 2048;

/// Floor for the Miller–Rabin round count.
pub const MINIMUM_ACCURACY: u32 = 100;

/// Generates random primes of a fixed bit width.
///
/// Each generator exclusively owns its candidate source (and so its random
/// stream); the small-prime table behind the oracle is shared read-only
/// across all instances. Calls run to completion on the calling thread —
/// there is no cancellation in the core, so callers wanting bounded
/// latency must wrap [`get_prime`](PrimeGenerator::get_prime) externally.
pub struct PrimeGenerator<S = RandomCandidateSource> {
    bits: u32,
    accuracy: u32,
    oracle: PrimalityOracle,
    source: S,
}

fn clamp_config(bits: u32, accuracy: u32) -> (u32, u32) {
    (bits.max(MINIMUM_BITS), accuracy.max(MINIMUM_ACCURACY))
}

impl PrimeGenerator<RandomCandidateSource> {
    /// A generator drawing from a stream seeded with `seed`.
    ///
    /// For production key material the seed must come from a
    /// cryptographically secure source; the generator itself only
    /// stretches it.
    pub fn new(bits: u32, accuracy: u32, seed: &Integer) -> Self {
        let (bits, accuracy) = clamp_config(bits, accuracy);
        PrimeGenerator {
            bits,
            accuracy,
            oracle: PrimalityOracle::new(accuracy),
            source: RandomCandidateSource::new(bits, seed),
        }
    }

    /// A generator seeded from wall-clock nanoseconds.
    ///
    /// The seed is predictable, so primes from this constructor must not
    /// back real keys; the name keeps that visible at the call site.
    pub fn insecure_from_clock(bits: u32, accuracy: u32) -> Self {
        warn!("prime generator seeded from the wall clock; not suitable for key material");
        let (bits, accuracy) = clamp_config(bits, accuracy);
        PrimeGenerator {
            bits,
            accuracy,
            oracle: PrimalityOracle::new(accuracy),
            source: RandomCandidateSource::from_clock(bits),
        }
    }
}

impl<S: CandidateSource> PrimeGenerator<S> {
    /// A generator over an injected candidate source. The source decides
    /// the actual candidate width; `bits` and `accuracy` are clamped as in
    /// [`new`](PrimeGenerator::new).
    pub fn with_source(bits: u32, accuracy: u32, source: S) -> Self {
        let (bits, accuracy) = clamp_config(bits, accuracy);
        PrimeGenerator {
            bits,
            accuracy,
            oracle: PrimalityOracle::new(accuracy),
            source,
        }
    }

    /// Effective candidate bit width.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Effective Miller–Rabin round count.
    pub fn accuracy(&self) -> u32 {
        self.accuracy
    }

    /// One candidate straight from the source, untested.
    pub fn generate_candidate(&mut self) -> Result<Integer> {
        self.source.next_candidate()
    }

    /// Oracle verdict for an arbitrary value under this generator's
    /// accuracy.
    pub fn prove_primality(&self, candidate: &Integer) -> bool {
        self.oracle.prove_primality(candidate)
    }

    /// Draw candidates until the oracle accepts one.
    ///
    /// A source failure aborts immediately: it means the random stream or
    /// the width parameter is broken, and retrying would not help. Failing
    /// the oracle is the expected path and just drives the next draw.
    /// There is no retry cap — at 2048 bits roughly one candidate in 1400
    /// is prime, so the loop terminates within a few hundred draws in
    /// expectation. The attempts counter is diagnostic only.
    pub fn get_prime(&mut self) -> Result<Integer> {
        let mut attempts: u64 = 0;
        loop {
            let candidate = self.source.next_candidate()?;
            attempts += 1;
            if self.oracle.prove_primality(&candidate) {
                debug!(attempts, bits = self.bits, "candidate accepted");
                return Ok(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    /// Deterministic source: replays a fixed candidate sequence, then
    /// fails. Lets tests force exact accept/reject paths.
    struct ScriptedSource {
        script: std::vec::IntoIter<Integer>,
    }

    impl ScriptedSource {
        fn new<I: IntoIterator<Item = u32>>(values: I) -> Self {
            let script: Vec<Integer> = values.into_iter().map(Integer::from).collect();
            ScriptedSource {
                script: script.into_iter(),
            }
        }
    }

    impl CandidateSource for ScriptedSource {
        fn next_candidate(&mut self) -> Result<Integer> {
            self.script.next().ok_or_else(|| anyhow!("script exhausted"))
        }
    }

    #[test]
    fn zero_config_is_raised_to_the_floors() {
        let g = PrimeGenerator::new(0, 0, &Integer::from(1u32));
        assert_eq!(g.bits(), MINIMUM_BITS);
        assert_eq!(g.accuracy(), MINIMUM_ACCURACY);
    }

    #[test]
    fn below_floor_config_is_raised_never_lowered() {
        let g = PrimeGenerator::new(512, 10, &Integer::from(1u32));
        assert_eq!(g.bits(), MINIMUM_BITS);
        assert_eq!(g.accuracy(), MINIMUM_ACCURACY);

        let g = PrimeGenerator::new(4096, 150, &Integer::from(1u32));
        assert_eq!(g.bits(), 4096);
        assert_eq!(g.accuracy(), 150);
    }

    #[test]
    fn rejects_until_the_first_prime_in_the_script() {
        // even, divisible by 3, semiprime of large factors, then prime
        let source = ScriptedSource::new([104730, 23757, 7927 * 7933, 104729]);
        let mut g = PrimeGenerator::with_source(0, 0, source);
        let p = g.get_prime().unwrap();
        assert_eq!(p, 104729u32);
    }

    #[test]
    fn accepts_the_first_candidate_when_it_is_prime() {
        let source = ScriptedSource::new([104729]);
        let mut g = PrimeGenerator::with_source(0, 0, source);
        assert_eq!(g.get_prime().unwrap(), 104729u32);
    }

    #[test]
    fn source_failure_propagates_without_retry() {
        let source = ScriptedSource::new([]);
        let mut g = PrimeGenerator::with_source(0, 0, source);
        assert!(g.get_prime().is_err());
    }

    #[test]
    fn source_failure_mid_search_is_fatal() {
        // Both candidates composite; the exhausted script surfaces as an
        // error instead of an endless retry.
        let source = ScriptedSource::new([100, 102]);
        let mut g = PrimeGenerator::with_source(0, 0, source);
        assert!(g.get_prime().is_err());
    }

    #[test]
    fn generate_candidate_draws_from_the_source() {
        let source = ScriptedSource::new([100, 104729]);
        let mut g = PrimeGenerator::with_source(0, 0, source);
        assert_eq!(g.generate_candidate().unwrap(), 100u32);
        assert_eq!(g.generate_candidate().unwrap(), 104729u32);
        assert!(g.generate_candidate().is_err());
    }

    #[test]
    fn prove_primality_is_usable_standalone() {
        let g = PrimeGenerator::new(0, 0, &Integer::from(3u32));
        assert!(g.prove_primality(&Integer::from(7919u32)));
        assert!(!g.prove_primality(&Integer::from(7921u32))); // 89 * 89
    }
}
