//! Divisor-descent primality checks.
//!
//! Two interchangeable strategies answer the same question for a
//! [`BigUint`] candidate: is it prime? Both test successive divisors from 2
//! until a divisor is found or the divisor's square exceeds the candidate.
//! They differ only in how they use the stack:
//!
//! - [`is_prime_recursive`] takes one call frame per candidate divisor and
//!   overflows the calling thread's stack for large inputs.
//! - [`is_prime_iterative`] runs in constant stack space and is merely slow
//!   for large inputs.
//!
//! Neither is meant to be fast. Trial division keeps the cost of a request
//! proportional to the square root of its input.

mod iterative;
mod recursive;

use num_bigint::BigUint;
use std::fmt;

pub use iterative::is_prime_iterative;
pub use recursive::is_prime_recursive;

/// A primality strategy resolved from an [`AlgorithmVariant`].
pub type PrimalityFn = fn(&BigUint) -> bool;

/// Selects which divisor-descent implementation an endpoint uses.
///
/// Bound once, when routes are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmVariant {
    /// One call frame per divisor, served under `/primes/v1`.
    Recursive,

    /// Constant-stack loop, served under `/primes/v2`.
    Iterative,
}

impl AlgorithmVariant {
    /// The concrete strategy for this variant.
    pub fn strategy(self) -> PrimalityFn {
        match self {
            AlgorithmVariant::Recursive => is_prime_recursive,
            AlgorithmVariant::Iterative => is_prime_iterative,
        }
    }

    /// Route version segment for this variant.
    pub fn version(self) -> &'static str {
        match self {
            AlgorithmVariant::Recursive => "v1",
            AlgorithmVariant::Iterative => "v2",
        }
    }
}

impl fmt::Display for AlgorithmVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmVariant::Recursive => f.write_str("recursive"),
            AlgorithmVariant::Iterative => f.write_str("iterative"),
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    const PRIMES: [u32; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];
    const NON_PRIMES: [u32; 10] = [1, 4, 6, 8, 9, 10, 15, 21, 25, 27];

    fn both(n: u32) -> (bool, bool) {
        let n = BigUint::from(n);
        (is_prime_recursive(&n), is_prime_iterative(&n))
    }

    #[test]
    fn small_primes() {
        // ---
        for p in PRIMES {
            assert_eq!(both(p), (true, true), "{p} is prime");
        }
    }

    #[test]
    fn small_non_primes() {
        // ---
        for n in NON_PRIMES {
            assert_eq!(both(n), (false, false), "{n} is not prime");
        }
    }

    #[test]
    fn boundaries() {
        // ---
        assert_eq!(both(1), (false, false));
        assert_eq!(both(2), (true, true));
        assert_eq!(both(3), (true, true));
        assert_eq!(both(4), (false, false));
    }

    #[test]
    fn zero_is_not_prime() {
        // ---
        assert_eq!(both(0), (false, false));
    }

    #[test]
    fn variants_agree_below_two_thousand() {
        // ---
        for n in 0..2000u32 {
            let (r, i) = both(n);
            assert_eq!(r, i, "variants disagree on {n}");
        }
    }

    #[test]
    fn agrees_with_naive_check() {
        // ---
        let naive = |n: u32| n > 1 && (2..n).all(|d| n % d != 0);
        for n in 0..500u32 {
            assert_eq!(both(n).1, naive(n), "iterative wrong for {n}");
        }
    }

    #[test]
    fn larger_primes() {
        // ---
        assert_eq!(both(10007), (true, true));
        assert_eq!(both(104729), (true, true)); // 10000th prime
        assert_eq!(both(104731), (false, false)); // 11 * 9521
    }

    #[test]
    fn prime_squares_are_composite() {
        // ---
        // the loop must test d where d * d == n
        for p in [2u32, 3, 5, 7, 97, 101] {
            assert_eq!(both(p * p), (false, false), "{}", p * p);
        }
    }

    #[test]
    fn huge_composite_with_small_factor() {
        // ---
        // 2^256 + 2: the first divisor ends the descent at any magnitude
        let n = (BigUint::from(1u32) << 256u32) + 2u32;
        assert!(!is_prime_recursive(&n));
        assert!(!is_prime_iterative(&n));

        // 3 * (2^200 + 1)
        let n = ((BigUint::from(1u32) << 200u32) + 1u32) * 3u32;
        assert!(!is_prime_recursive(&n));
        assert!(!is_prime_iterative(&n));
    }

    #[test]
    fn idempotent() {
        // ---
        let n = BigUint::from(7919u32);
        for _ in 0..5 {
            assert!(is_prime_recursive(&n));
            assert!(is_prime_iterative(&n));
        }
    }

    #[test]
    fn variant_resolves_strategy() {
        // ---
        let n = BigUint::from(25u32);
        for variant in [AlgorithmVariant::Recursive, AlgorithmVariant::Iterative] {
            assert!(!(variant.strategy())(&n));
        }
        assert_eq!(AlgorithmVariant::Recursive.version(), "v1");
        assert_eq!(AlgorithmVariant::Iterative.version(), "v2");
        assert_eq!(AlgorithmVariant::Iterative.to_string(), "iterative");
    }
}
