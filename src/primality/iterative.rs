use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Primality by iterative divisor-descent.
///
/// Same answers as [`is_prime_recursive`](super::is_prime_recursive) in
/// constant stack space. Still O(sqrt(n)) divisions, so large primes are slow.
pub fn is_prime_iterative(n: &BigUint) -> bool {
    // ---
    if *n <= BigUint::one() {
        return false;
    }

    let mut divisor = BigUint::from(2u32);
    loop {
        if &divisor * &divisor > *n {
            return true;
        }

        if (n % &divisor).is_zero() {
            return false;
        }

        divisor += 1u32;
    }
}
