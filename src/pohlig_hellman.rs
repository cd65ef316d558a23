//! Pohlig-Hellman reduction of a smooth-order discrete log.

use num_bigint::BigUint;
use num_traits::Pow;

use crate::arith::mod_inv;
use crate::crt::crt;
use crate::error::{Error, Result};
use crate::factor::prime_power_factorization;
use crate::instance::DlpInstance;
use crate::order::element_order;
use crate::rho::PollardRho;
use crate::traits::DlogSolver;

/// Pohlig-Hellman: splits the problem along the prime-power factorization of
/// `ord(g)`, solves each projection with Pollard's rho, and recombines the
/// subgroup logs with the Chinese Remainder Theorem. Exponentially cheaper
/// than a direct solve when the order is smooth.
pub struct PohligHellman {
    rho: PollardRho,
}

impl PohligHellman {
    pub fn new() -> Self {
        PohligHellman {
            rho: PollardRho::default(),
        }
    }

    /// Uses a custom-tuned rho for the subgroup solves.
    pub fn with_rho(rho: PollardRho) -> Self {
        PohligHellman { rho }
    }

    /// Solves `g^x ≡ h (mod p)` subgroup by subgroup.
    ///
    /// For each prime power `q^e` dividing `ord = ord(g)`, the instance is
    /// projected into the order-`q^e` subgroup via `g2 = g^(ord/q^e)`,
    /// `h2 = h^(ord/q^e)`. A single rho call handles `e == 1`; higher prime
    /// powers are solved one base-`q` digit at a time, dividing the known
    /// digits out of the target before extracting the next one.
    pub fn solve(&self, instance: &DlpInstance) -> Result<BigUint> {
        let DlpInstance { g, h, p } = instance;
        let ord = element_order(g, p)?;

        let mut residues = Vec::new();
        let mut moduli = Vec::new();
        for (q, e) in prime_power_factorization(&ord) {
            let q_e: BigUint = Pow::pow(&q, e);
            let exp = &ord / &q_e;
            let g2 = g.modpow(&exp, p);
            let h2 = h.modpow(&exp, p);

            let x_log = if e == 1 {
                self.subgroup_log(&g2, &h2, p)?
            } else {
                self.lifted_log(&g2, &h2, p, &q, e)?
            };

            residues.push(x_log % &q_e);
            moduli.push(q_e);
        }

        let x = crt(&residues, &moduli)?;
        if instance.verify(&x) {
            Ok(x)
        } else {
            Err(Error::NoSolutionFound)
        }
    }

    /// Discrete log in the subgroup of order `q^e` generated by `g2`,
    /// recovered digit by digit in base `q`.
    ///
    /// `g2^(q^(e-1))` has order exactly `q`; the base digit comes from
    /// projecting both sides down to that subgroup, and each later digit `k`
    /// from the residual target `h_i = h2 * g2^(-x_log)` raised to `q^(e-k)`.
    fn lifted_log(
        &self,
        g2: &BigUint,
        h2: &BigUint,
        p: &BigUint,
        q: &BigUint,
        e: u32,
    ) -> Result<BigUint> {
        let to_prime: BigUint = Pow::pow(q, e - 1);
        let g_base = g2.modpow(&to_prime, p);

        let mut x_log = self.subgroup_log(&g_base, &h2.modpow(&to_prime, p), p)?;

        let g2_inv = mod_inv(g2, p)
            .ok_or_else(|| Error::InvalidInput(format!("{g2} is not invertible mod {p}")))?;
        for k in 2..=e {
            let h_i = h2 * g2_inv.modpow(&x_log, p) % p;
            let projected = h_i.modpow(&Pow::pow(q, e - k), p);
            let digit = self.subgroup_log(&g_base, &projected, p)?;
            x_log += Pow::pow(q, k - 1) * digit;
        }
        Ok(x_log)
    }

    fn subgroup_log(&self, g: &BigUint, h: &BigUint, p: &BigUint) -> Result<BigUint> {
        let instance = DlpInstance::new(g.clone(), h.clone(), p.clone())?;
        self.rho.solve(&instance)
    }
}

impl Default for PohligHellman {
    fn default() -> Self {
        PohligHellman::new()
    }
}

impl DlogSolver for PohligHellman {
    fn solve(&self, instance: &DlpInstance) -> Result<BigUint> {
        PohligHellman::solve(self, instance)
    }
}
