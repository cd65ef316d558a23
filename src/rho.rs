//! Pollard's rho algorithm for solving discrete logarithms.

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{One, ToPrimitive, Zero};

use crate::arith::xgcd;
use crate::error::{Error, Result};
use crate::instance::DlpInstance;
use crate::order::element_order;
use crate::traits::DlogSolver;

/// Upper bound on the coset scan when the collision congruence is solvable
/// only up to a divisor d: scanning d candidates is fine for the small
/// subgroups Pohlig-Hellman produces, but must not degenerate into a
/// brute-force sweep of a large group.
const MAX_COSET_SCAN: u64 = 1 << 16;

/// Pollard's rho: a cycle-finding walk over the group with O(√order)
/// expected time and O(1) space.
///
/// The walk is a deterministic map, so a single run can be unlucky; each run
/// is capped at [`max_iterations`](Self::max_iterations) steps and up to
/// [`max_restarts`](Self::max_restarts) runs are attempted. The first run
/// starts from the identity with zero exponents; later runs start from a
/// random `g^a * h^b`.
pub struct PollardRho {
    /// Walk steps before a non-colliding run is abandoned.
    pub max_iterations: u64,
    /// Total runs before the solver gives up.
    pub max_restarts: u32,
}

impl Default for PollardRho {
    fn default() -> Self {
        PollardRho {
            max_iterations: 1 << 22,
            max_restarts: 8,
        }
    }
}

/// One walk step: the current value picks a branch by which third of
/// `[0, p)` it falls in, updating the exponent pair `(a, b)` of the running
/// representation `g^a * h^b`.
struct Walk<'a> {
    g: &'a BigUint,
    h: &'a BigUint,
    p: &'a BigUint,
    ord: &'a BigUint,
    low: BigUint,
    high: BigUint,
}

impl<'a> Walk<'a> {
    fn new(g: &'a BigUint, h: &'a BigUint, p: &'a BigUint, ord: &'a BigUint) -> Walk<'a> {
        let low = p / 3u32;
        let high = &low * 2u32;
        Walk {
            g,
            h,
            p,
            ord,
            low,
            high,
        }
    }

    fn step(&self, x: BigUint, a: BigUint, b: BigUint) -> (BigUint, BigUint, BigUint) {
        if x < self.low {
            (&x * self.g % self.p, (a + 1u32) % self.ord, b)
        } else if x < self.high {
            (
                &x * &x % self.p,
                a * 2u32 % self.ord,
                b * 2u32 % self.ord,
            )
        } else {
            (&x * self.h % self.p, a, (b + 1u32) % self.ord)
        }
    }
}

impl PollardRho {
    /// Solves `g^x ≡ h (mod p)` via tortoise-and-hare cycle detection.
    ///
    /// At a collision `g^alpha * h^beta ≡ g^gamma * h^delta`, so
    /// `(delta - beta) * x ≡ alpha - gamma (mod ord)`; the congruence is
    /// solved with the extended gcd and, when the gcd is nontrivial, the
    /// candidate solutions are verified against the instance.
    pub fn solve(&self, instance: &DlpInstance) -> Result<BigUint> {
        let DlpInstance { g, h, p } = instance;
        if h.is_one() {
            return Ok(BigUint::zero());
        }

        let ord = element_order(g, p)?;
        let walk = Walk::new(g, h, p, &ord);
        let mut rng = rand::thread_rng();
        let mut collided = false;

        for attempt in 0..self.max_restarts {
            let (start, a0, b0) = if attempt == 0 {
                (BigUint::one(), BigUint::zero(), BigUint::zero())
            } else {
                let a = rng.gen_biguint_below(&ord);
                let b = rng.gen_biguint_below(&ord);
                let start = g.modpow(&a, p) * h.modpow(&b, p) % p;
                (start, a, b)
            };

            let Some((alpha, beta, gamma, delta)) = self.run_walk(&walk, start, a0, b0) else {
                continue;
            };
            collided = true;

            if let Some(x) = solve_collision(instance, &ord, alpha, beta, gamma, delta) {
                debug_assert!(instance.verify(&x));
                return Ok(x);
            }
        }

        if collided {
            Err(Error::NoSolutionFound)
        } else {
            Err(Error::WalkExhausted {
                iterations: self.max_iterations,
            })
        }
    }

    /// Runs tortoise and hare until their values collide, returning the
    /// exponent pairs, or `None` when the iteration cap is reached.
    fn run_walk(
        &self,
        walk: &Walk<'_>,
        start: BigUint,
        a0: BigUint,
        b0: BigUint,
    ) -> Option<(BigUint, BigUint, BigUint, BigUint)> {
        let (mut x, mut alpha, mut beta) = (start.clone(), a0.clone(), b0.clone());
        let (mut y, mut gamma, mut delta) = (start, a0, b0);

        for _ in 0..self.max_iterations {
            (x, alpha, beta) = walk.step(x, alpha, beta);
            (y, gamma, delta) = walk.step(y, gamma, delta);
            (y, gamma, delta) = walk.step(y, gamma, delta);
            if x == y {
                return Some((alpha, beta, gamma, delta));
            }
        }
        None
    }
}

/// Solves `v * x ≡ u (mod ord)` for the collision exponents and verifies the
/// candidates. `None` means this collision was degenerate and the walk should
/// restart.
fn solve_collision(
    instance: &DlpInstance,
    ord: &BigUint,
    alpha: BigUint,
    beta: BigUint,
    gamma: BigUint,
    delta: BigUint,
) -> Option<BigUint> {
    let DlpInstance { g, h, p } = instance;
    let u = (alpha + ord - gamma) % ord;
    let v = (delta + ord - beta) % ord;

    let (d, s, _) = xgcd(&BigInt::from(v), &BigInt::from(ord.clone()));
    let d = d.to_biguint()?;
    let ord_signed = BigInt::from(ord.clone());
    let s = ((s % &ord_signed + &ord_signed) % ord_signed).to_biguint()?;

    if d.is_one() {
        let x = u * s % ord;
        return instance.verify(&x).then_some(x);
    }

    // gcd(v, ord) = d > 1: d candidate solutions w/d + i*(ord/d), i < d.
    if d > BigUint::from(MAX_COSET_SCAN) {
        return None;
    }
    let w = u * s % ord;
    let base = &w / &d;
    let step = ord / &d;
    for i in 0..d.to_u64()? {
        let l = (&base + &step * i) % ord;
        if g.modpow(&l, p) == *h {
            return Some(l);
        }
    }
    None
}

impl DlogSolver for PollardRho {
    fn solve(&self, instance: &DlpInstance) -> Result<BigUint> {
        PollardRho::solve(self, instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_a_small_instance() {
        let instance = DlpInstance::from_u64(5, 8, 23).unwrap();
        let x = PollardRho::default().solve(&instance).unwrap();
        assert!(instance.verify(&x));
        assert!(x < BigUint::from(22u32));
    }

    #[test]
    fn identity_target_is_zero() {
        let instance = DlpInstance::from_u64(7, 1, 41).unwrap();
        assert_eq!(PollardRho::default().solve(&instance).unwrap(), BigUint::zero());
    }

    #[test]
    fn zero_iteration_cap_exhausts() {
        let solver = PollardRho {
            max_iterations: 0,
            max_restarts: 2,
        };
        let instance = DlpInstance::from_u64(5, 8, 23).unwrap();
        assert!(matches!(
            solver.solve(&instance),
            Err(Error::WalkExhausted { iterations: 0 })
        ));
    }

    #[test]
    fn target_outside_subgroup_fails() {
        // ord(2) = 3 mod 7; 3 is not a power of 2.
        let instance = DlpInstance::from_u64(2, 3, 7).unwrap();
        assert!(matches!(
            PollardRho::default().solve(&instance),
            Err(Error::NoSolutionFound)
        ));
    }
}
