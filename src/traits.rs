//! Traits for discrete logarithm solvers.

use num_bigint::BigUint;

use crate::error::Result;
use crate::instance::DlpInstance;

/// Trait for discrete logarithm solvers over the multiplicative group mod p.
///
/// All implementations return the log reduced into `[0, ord(g))` and surface
/// failure as an [`Error`](crate::Error), never as a sentinel value.
pub trait DlogSolver {
    /// Solves `g^x ≡ h (mod p)` for `x`.
    fn solve(&self, instance: &DlpInstance) -> Result<BigUint>;
}
