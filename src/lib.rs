//! # primeforge — cryptographically-sized random primes
//!
//! Generates random primes of a fixed bit width (default 2048) suitable as
//! RSA-class key material. Candidates are uniformly random bit patterns
//! with the top bit forced to 1, pre-filtered by trial division against
//! the first 1000 primes, then tested with GMP's Miller–Rabin at a
//! caller-chosen round count.
//!
//! ```no_run
//! use primeforge::PrimeGenerator;
//! use rug::Integer;
//!
//! let mut g = PrimeGenerator::new(2048, 100, &Integer::from(0xfeedu32));
//! let p = g.get_prime()?;
//! assert_eq!(p.significant_bits(), 2048);
//! # anyhow::Ok(())
//! ```
//!
//! The oracle is probabilistic: a composite is accepted with probability
//! at most 4^(-accuracy). Deterministic proofs and RSA parameter selection
//! are out of scope.

pub mod candidate;
pub mod generator;
pub mod oracle;
pub mod sieve;

pub use candidate::{CandidateSource, RandomCandidateSource};
pub use generator::{PrimeGenerator, MINIMUM_ACCURACY, MINIMUM_BITS};
pub use oracle::PrimalityOracle;
