//! Discrete logarithm solvers for the multiplicative group of integers mod p.
//!
//! Given a base `g`, a target `h` and a modulus `p`, the solvers find `x`
//! with `g^x ≡ h (mod p)`: Baby-step Giant-step, Pollard's rho, and
//! Pohlig-Hellman (which composes rho over the prime-power subgroups of the
//! group and recombines with the Chinese Remainder Theorem).

pub mod arith;
pub mod bsgs;
pub mod crt;
pub mod error;
pub mod factor;
pub mod instance;
pub mod order;
pub mod pohlig_hellman;
pub mod rho;
pub mod traits;
pub mod utils;

pub use error::{Error, Result};
pub use instance::DlpInstance;
pub use traits::DlogSolver;
