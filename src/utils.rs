//! Helpers for generating discrete-log instances.

use num_bigint::{BigUint, RandBigInt};
use rand::Rng;

use crate::error::Result;
use crate::instance::DlpInstance;
use crate::order::element_order;

/// Picks a uniform exponent in `[0, bound)`.
pub fn random_exponent<R: Rng + ?Sized>(rng: &mut R, bound: &BigUint) -> BigUint {
    rng.gen_biguint_below(bound)
}

/// Generates a random solvable instance for the base `g` mod `p`.
///
/// Picks `x` below `ord(g)` and returns `(x, (g, g^x, p))`, so the instance
/// is solvable by construction and `x` is the unique log in `[0, ord(g))`.
pub fn random_instance<R: Rng + ?Sized>(
    rng: &mut R,
    g: &BigUint,
    p: &BigUint,
) -> Result<(BigUint, DlpInstance)> {
    let ord = element_order(g, p)?;
    let x = random_exponent(rng, &ord);
    let h = g.modpow(&x, p);
    let instance = DlpInstance::new(g.clone(), h, p.clone())?;
    Ok((x, instance))
}
