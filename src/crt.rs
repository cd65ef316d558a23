//! Chinese Remainder Theorem reconstruction.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::arith::mod_inv;
use crate::error::{Error, Result};

/// Reconstructs the unique residue mod `N = Π q_i` from `x_i mod q_i`.
///
/// For each congruence the cofactor `n_i = N / q_i` is inverted mod `q_i` and
/// `x_i * n_i * inv(n_i)` accumulated; the moduli must be pairwise coprime or
/// the inverse does not exist. An empty system reconstructs 0 (the unique
/// residue mod 1).
pub fn crt(residues: &[BigUint], moduli: &[BigUint]) -> Result<BigUint> {
    if residues.len() != moduli.len() {
        return Err(Error::InvalidInput(format!(
            "{} residues against {} moduli",
            residues.len(),
            moduli.len()
        )));
    }

    let n: BigUint = moduli.iter().product();
    let mut acc = BigUint::zero();
    for (x_i, q_i) in residues.iter().zip(moduli) {
        let n_i = &n / q_i;
        let s = mod_inv(&(&n_i % q_i), q_i).ok_or_else(|| {
            Error::InvalidInput("moduli are not pairwise coprime".to_string())
        })?;
        acc = (acc + x_i * &n_i % &n * s) % &n;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn nats(values: &[u64]) -> Vec<BigUint> {
        values.iter().map(|&v| BigUint::from(v)).collect()
    }

    #[test]
    fn reconstructs_textbook_system() {
        // x ≡ 2 (mod 3), x ≡ 3 (mod 5), x ≡ 2 (mod 7) => x = 23
        let x = crt(&nats(&[2, 3, 2]), &nats(&[3, 5, 7])).unwrap();
        assert_eq!(x, BigUint::from(23u32));
    }

    #[test]
    fn round_trips_through_residues() {
        let moduli = nats(&[4, 9, 25, 7]);
        let n: BigUint = moduli.iter().product();
        for v in [0u64, 1, 17, 100, 6299] {
            let v = BigUint::from(v) % &n;
            let residues: Vec<BigUint> = moduli.iter().map(|q| &v % q).collect();
            assert_eq!(crt(&residues, &moduli).unwrap(), v);
        }
    }

    #[test]
    fn empty_system_is_zero() {
        assert_eq!(crt(&[], &[]).unwrap(), BigUint::zero());
    }

    #[test]
    fn single_congruence_is_identity() {
        let x = crt(&nats(&[5]), &nats(&[9])).unwrap();
        assert_eq!(x, BigUint::from(5u32));
    }

    #[test]
    fn rejects_non_coprime_moduli() {
        assert!(crt(&nats(&[1, 2]), &nats(&[4, 6])).is_err());
    }

    #[test]
    fn rejects_length_mismatch() {
        assert!(crt(&nats(&[1]), &nats(&[3, 5])).is_err());
        assert!(crt(&nats(&[1, 2]), &[BigUint::one()]).is_err());
    }
}
