//! Small-prime table shared by every oracle instance.
//!
//! The trial-division pre-filter divides candidates by the first
//! [`SMALL_PRIME_COUNT`] primes. The table is computed once with a sieve of
//! Eratosthenes and shared read-only for the process lifetime; it is never
//! mutated after construction, so no synchronization is needed.

use std::sync::LazyLock;

/// Number of primes in the trial-division table. The last entry is
/// p_1000 = 7919.
pub const SMALL_PRIME_COUNT: usize = 1000;

static SMALL_PRIMES: LazyLock<Vec<u32>> = LazyLock::new(|| first_primes(SMALL_PRIME_COUNT));

/// The first [`SMALL_PRIME_COUNT`] primes, ascending.
pub fn small_primes() -> &'static [u32] {
    &SMALL_PRIMES
}

/// Generate the first `count` primes with a sieve of Eratosthenes.
///
/// The sieve bound comes from Rosser's theorem: p_n < n(ln n + ln ln n)
/// for n >= 6, so a single allocation always suffices.
fn first_primes(count: usize) -> Vec<u32> {
    let limit = if count < 6 {
        12
    } else {
        let n = count as f64;
        (n * (n.ln() + n.ln().ln())).ceil() as usize
    };

    let mut composite = vec![false; limit + 1];
    let mut primes = Vec::with_capacity(count);
    for n in 2..=limit {
        if composite[n] {
            continue;
        }
        primes.push(n as u32);
        if primes.len() == count {
            break;
        }
        let mut m = n * n;
        while m <= limit {
            composite[m] = true;
            m += n;
        }
    }
    debug_assert_eq!(primes.len(), count, "Rosser bound too small for {count}");
    primes
}
