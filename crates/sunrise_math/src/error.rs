//! Error types for numeric routines.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from iterative numeric routines.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MathError {
    /// An iteration hit its cap before meeting the tolerance.
    NonConvergence {
        /// Iterations performed before giving up.
        iterations: usize,
        /// Magnitude of the last correction step.
        residual: f64,
    },
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonConvergence {
                iterations,
                residual,
            } => write!(
                f,
                "no convergence after {iterations} iterations (residual {residual:e})"
            ),
        }
    }
}

impl Error for MathError {}
