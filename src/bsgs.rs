//! Baby-step Giant-step algorithm for solving discrete logarithms.

use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::arith::mod_inv;
use crate::error::{Error, Result};
use crate::instance::DlpInstance;
use crate::order::group_order;
use crate::traits::DlogSolver;

/// Largest baby-step table the solver will allocate.
const MAX_TABLE_ENTRIES: u64 = 1 << 32;

/// Baby-step Giant-step: a meet-in-the-middle search with O(√order) time and
/// space. The table is rebuilt per solve; nothing is cached between calls.
pub struct BabyStepGiantStep;

impl BabyStepGiantStep {
    /// Solves the discrete logarithm problem using Baby-step Giant-step.
    ///
    /// Algorithm, with `n = ⌊√order⌋ + 1`:
    /// 1. Baby steps: store `g^j -> j` for `j = 0, ..., n-1` in a hash table.
    /// 2. Giant steps: for `i = 0, 1, ...` check `h * (g^-n)^i` against the
    ///    table; a hit at `(i, j)` gives `x = j + i*n`.
    ///
    /// Covers every exponent below `n^2 > order`, so a solution is found
    /// whenever `h` lies in the subgroup generated by `g`.
    pub fn solve(&self, instance: &DlpInstance) -> Result<BigUint> {
        let DlpInstance { g, h, p } = instance;
        if h.is_one() {
            return Ok(BigUint::zero());
        }

        let n = group_order(p).sqrt() + 1u32;
        let steps = match n.to_u64() {
            Some(steps) if steps <= MAX_TABLE_ENTRIES => steps,
            _ => {
                return Err(Error::InvalidInput(format!(
                    "group too large for a baby-step table ({n} entries)"
                )))
            }
        };

        // Baby steps: g^0, g^1, ..., g^(n-1), keeping the first index seen
        // for each residue.
        let mut baby_steps: HashMap<BigUint, u64> = HashMap::with_capacity(steps as usize);
        let mut current = BigUint::one();
        for j in 0..steps {
            baby_steps.entry(current.clone()).or_insert(j);
            current = &current * g % p;
        }

        // Giant-step factor g^(-n).
        let giant_step = mod_inv(g, p)
            .ok_or_else(|| Error::InvalidInput(format!("{g} is not invertible mod {p}")))?
            .modpow(&n, p);

        let mut gamma = h.clone();
        for i in 0..steps {
            if let Some(&j) = baby_steps.get(&gamma) {
                let x = BigUint::from(j) + BigUint::from(i) * &n;
                debug_assert!(instance.verify(&x));
                return Ok(x);
            }
            gamma = &gamma * &giant_step % p;
        }

        // No match after n giant steps: h is outside the subgroup of g.
        Err(Error::NoSolutionFound)
    }
}

impl DlogSolver for BabyStepGiantStep {
    fn solve(&self, instance: &DlpInstance) -> Result<BigUint> {
        BabyStepGiantStep::solve(self, instance)
    }
}
