//! Two-stage primality oracle: cheap trial division against the shared
//! small-prime table, then GMP's Miller–Rabin at a caller-chosen round
//! count.

use rug::integer::IsPrime;
use rug::Integer;

use crate::sieve;

/// Probabilistic primality oracle with a bounded false-positive rate.
///
/// `accuracy` is the number of independent Miller–Rabin rounds handed to
/// GMP; a composite survives all of them with probability at most
/// 4^(-accuracy). An accepted candidate is therefore probably prime, not
/// proven prime.
pub struct PrimalityOracle {
    accuracy: u32,
}

impl PrimalityOracle {
    pub fn new(accuracy: u32) -> Self {
        PrimalityOracle { accuracy }
    }

    /// Stage 1: trial division against the shared small-prime table.
    ///
    /// Returns false as soon as a table prime divides the candidate. A
    /// candidate equal to a table entry divides itself but is prime, so it
    /// passes; for the 2048-bit candidates the generator produces, every
    /// table entry is far smaller and that branch is unreachable.
    pub fn passes_small_prime_sieve(&self, candidate: &Integer) -> bool {
        for &p in sieve::small_primes() {
            if candidate.is_divisible_u(p) {
                return *candidate == p;
            }
        }
        true
    }

    /// Stage 2: the probabilistic kernel, `accuracy` independent rounds.
    ///
    /// Two fast rounds run first when `accuracy` exceeds them: most
    /// composites that get past trial division fail immediately, and a
    /// `No` verdict is certain, so the shortcut never changes the answer.
    pub fn passes_probabilistic_test(&self, candidate: &Integer) -> bool {
        if self.accuracy > 2 && candidate.is_probably_prime(2) == IsPrime::No {
            return false;
        }
        candidate.is_probably_prime(self.accuracy) != IsPrime::No
    }

    /// Both stages: trial division, then the probabilistic test for
    /// survivors only.
    pub fn prove_primality(&self, candidate: &Integer) -> bool {
        self.passes_small_prime_sieve(candidate) && self.passes_probabilistic_test(candidate)
    }
}
