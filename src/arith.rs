//! Modular arithmetic primitives: gcd, extended gcd, modular inverse.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// Greatest common divisor via the Euclidean algorithm.
///
/// `gcd(a, 0) == a` and `gcd(0, b) == b`.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `a*x + b*y == g == gcd(a, b)`; in particular
/// `xgcd(0, b) == (b, 0, 1)`. Iterative so that large inputs cannot blow the
/// call stack.
pub fn xgcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);

        let next_t = &old_t - &q * &t;
        old_t = std::mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

/// Modular inverse of `a` mod `m`, or `None` when `gcd(a, m) != 1`.
pub fn mod_inv(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let m_signed = BigInt::from(m.clone());
    let (g, x, _) = xgcd(&BigInt::from(a.clone()), &m_signed);
    if !g.is_one() {
        return None;
    }
    let x = ((x % &m_signed) + &m_signed) % &m_signed;
    x.to_biguint()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> BigInt {
        BigInt::from(n)
    }

    fn nat(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn gcd_identities() {
        assert_eq!(gcd(&nat(12), &nat(0)), nat(12));
        assert_eq!(gcd(&nat(0), &nat(7)), nat(7));
        assert_eq!(gcd(&nat(0), &nat(0)), nat(0));
    }

    #[test]
    fn gcd_small_pairs() {
        assert_eq!(gcd(&nat(12), &nat(18)), nat(6));
        assert_eq!(gcd(&nat(17), &nat(5)), nat(1));
        assert_eq!(gcd(&nat(40), &nat(22)), nat(2));
    }

    #[test]
    fn xgcd_satisfies_bezout() {
        let pairs = [(0, 7), (7, 0), (240, 46), (46, 240), (22, 40), (1, 1)];
        for (a, b) in pairs {
            let (g, x, y) = xgcd(&int(a), &int(b));
            assert_eq!(int(a) * &x + int(b) * &y, g, "bezout failed for ({a}, {b})");
        }
    }

    #[test]
    fn xgcd_zero_base_case() {
        let (g, x, y) = xgcd(&int(0), &int(9));
        assert_eq!((g, x, y), (int(9), int(0), int(1)));
    }

    #[test]
    fn mod_inv_round_trips() {
        for a in 1u64..11 {
            let inv = mod_inv(&nat(a), &nat(11)).unwrap();
            assert_eq!(nat(a) * inv % nat(11), nat(1));
        }
    }

    #[test]
    fn mod_inv_requires_coprimality() {
        assert!(mod_inv(&nat(6), &nat(9)).is_none());
        assert!(mod_inv(&nat(0), &nat(9)).is_none());
    }
}
