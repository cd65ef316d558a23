//! Discrete-log problem instances.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{Error, Result};

/// A single discrete logarithm problem: find `x` with `g^x ≡ h (mod p)`.
///
/// Instances are plain values and immutable for the duration of a solve;
/// solvers share nothing between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DlpInstance {
    /// The base (a unit mod `p`).
    pub g: BigUint,
    /// The target value.
    pub h: BigUint,
    /// The modulus; the group-order logic treats it as prime.
    pub p: BigUint,
}

impl DlpInstance {
    /// Builds an instance, rejecting inputs outside the group.
    pub fn new(g: BigUint, h: BigUint, p: BigUint) -> Result<Self> {
        if p < BigUint::from(2u32) {
            return Err(Error::InvalidInput(format!(
                "modulus must be at least 2, got {p}"
            )));
        }
        if g.is_zero() || h.is_zero() {
            return Err(Error::InvalidInput(
                "base and target must be nonzero residues".to_string(),
            ));
        }
        if g >= p || h >= p {
            return Err(Error::InvalidInput(format!(
                "base and target must be reduced mod {p}"
            )));
        }
        Ok(DlpInstance { g, h, p })
    }

    /// Convenience constructor for small instances.
    pub fn from_u64(g: u64, h: u64, p: u64) -> Result<Self> {
        DlpInstance::new(BigUint::from(g), BigUint::from(h), BigUint::from(p))
    }

    /// Checks a candidate solution: `g^x ≡ h (mod p)`.
    pub fn verify(&self, x: &BigUint) -> bool {
        self.g.modpow(x, &self.p) == self.h
    }
}
