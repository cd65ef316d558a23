//! Group order and element order in the multiplicative group mod p.

use num_bigint::BigUint;
use num_traits::{One, Pow};

use crate::error::{Error, Result};
use crate::factor::{is_prime, prime_power_factorization};

/// Order of the multiplicative group of units mod `n`.
///
/// For prime `n` this is `n - 1`. For composite `n` it is `Π(f - 1)` over the
/// distinct prime factors, which equals Euler's totient only when `n` is
/// squarefree (the exact formula needs `f^(e-1) * (f-1)` per factor). The
/// solvers only call this with prime moduli, where the value is exact.
pub fn group_order(n: &BigUint) -> BigUint {
    let one = BigUint::one();
    if is_prime(n) {
        return n - &one;
    }
    let mut res = one.clone();
    for (f, _) in prime_power_factorization(n) {
        res *= f - &one;
    }
    res
}

/// Multiplicative order of `x` mod `p`: the least `t > 0` with `x^t ≡ 1`.
///
/// Starts from the full group order and, for each distinct prime factor,
/// strips the factor out entirely and multiplies it back in until `x^t ≡ 1`
/// again, leaving the minimal exponent.
///
/// Fails with [`Error::InvalidInput`] when `x` is not a unit mod `p` (for
/// example `x == 0`), since such an `x` has no order.
pub fn element_order(x: &BigUint, p: &BigUint) -> Result<BigUint> {
    let n = group_order(p);
    if !x.modpow(&n, p).is_one() {
        return Err(Error::InvalidInput(format!(
            "{x} has no multiplicative order mod {p}"
        )));
    }
    let mut t = n.clone();
    for (f, e) in prime_power_factorization(&n) {
        t /= Pow::pow(&f, e);
        while !x.modpow(&t, p).is_one() {
            t *= &f;
        }
    }
    Ok(t)
}
