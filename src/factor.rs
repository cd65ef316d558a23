//! Trial-division factorization and primality testing.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

/// Prime factorization of `n` by trial division.
///
/// Each prime appears once per multiplicity, in ascending order; any cofactor
/// left once the trial divisor passes `√n` is the largest prime factor.
/// `prime_factorization(1)` (and 0) is empty. O(√n) divisions, which is fine
/// for the smooth or moderate group orders the solvers target, not for
/// factoring hard composites.
pub fn prime_factorization(n: &BigUint) -> Vec<BigUint> {
    let mut n = n.clone();
    let mut factors = Vec::new();
    let mut f = BigUint::from(2u32);
    while &f * &f <= n {
        while n.is_multiple_of(&f) {
            factors.push(f.clone());
            n /= &f;
        }
        f += 1u32;
    }
    if n > BigUint::one() {
        factors.push(n);
    }
    factors
}

/// Factorization grouped into `(prime, exponent)` pairs, ascending.
pub fn prime_power_factorization(n: &BigUint) -> Vec<(BigUint, u32)> {
    let mut grouped: Vec<(BigUint, u32)> = Vec::new();
    for f in prime_factorization(n) {
        match grouped.last_mut() {
            Some((prime, exponent)) if *prime == f => *exponent += 1,
            _ => grouped.push((f, 1)),
        }
    }
    grouped
}

/// Deterministic trial-division primality test, checking divisors up to `√n`.
pub fn is_prime(n: &BigUint) -> bool {
    if *n < BigUint::from(2u32) {
        return false;
    }
    let mut f = BigUint::from(2u32);
    while &f * &f <= *n {
        if n.is_multiple_of(&f) {
            return false;
        }
        f += 1u32;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::gcd;
    use num_traits::Zero;

    fn nat(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn factors_multiply_back_and_are_sorted() {
        for n in 2u64..200 {
            let n = nat(n);
            let factors = prime_factorization(&n);
            let product: BigUint = factors.iter().product();
            assert_eq!(product, n);
            assert!(factors.windows(2).all(|w| w[0] <= w[1]));
            assert!(factors.iter().all(is_prime));
        }
    }

    #[test]
    fn factorization_of_one_is_empty() {
        assert!(prime_factorization(&BigUint::one()).is_empty());
        assert!(prime_factorization(&BigUint::zero()).is_empty());
    }

    #[test]
    fn multiplicity_is_repeated() {
        let factors = prime_factorization(&nat(360));
        let expected: Vec<BigUint> = [2u64, 2, 2, 3, 3, 5].iter().map(|&f| nat(f)).collect();
        assert_eq!(factors, expected);
    }

    #[test]
    fn prime_power_grouping() {
        assert_eq!(
            prime_power_factorization(&nat(8100)),
            vec![(nat(2), 2), (nat(3), 4), (nat(5), 2)]
        );
        assert_eq!(prime_power_factorization(&nat(13)), vec![(nat(13), 1)]);
    }

    #[test]
    fn small_primes_recognized() {
        for p in [2u64, 3, 5, 7, 11, 13, 65537] {
            assert!(is_prime(&nat(p)), "{p} is prime");
        }
        for c in [0u64, 1, 4, 6, 8, 10, 100, 65535] {
            assert!(!is_prime(&nat(c)), "{c} is not prime");
        }
    }

    // Odd composites must be rejected, not just even ones.
    #[test]
    fn composite_nine_rejected() {
        assert!(!is_prime(&nat(9)));
        assert!(!is_prime(&nat(15)));
        assert!(!is_prime(&nat(21)));
    }

    #[test]
    fn distinct_factors_are_coprime() {
        for (left, right) in prime_power_factorization(&nat(8100))
            .iter()
            .zip(prime_power_factorization(&nat(8100)).iter().skip(1))
        {
            assert_eq!(gcd(&left.0, &right.0), BigUint::one());
        }
    }
}
