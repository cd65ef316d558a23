//! Error types for the discrete logarithm solvers.

/// Errors returned by the solvers and the underlying group arithmetic.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The search space was exhausted without finding a discrete log.
    ///
    /// For BSGS this means no match after all giant steps; for Pollard's rho
    /// it means every collision produced candidates that failed verification.
    #[error("no discrete log found within the search bound")]
    NoSolutionFound,

    /// Pollard's rho hit its iteration ceiling on every walk attempt without
    /// the tortoise and hare ever colliding.
    #[error("random walk exhausted after {iterations} iterations per attempt")]
    WalkExhausted { iterations: u64 },

    /// Inputs outside the domain the solvers assume.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
