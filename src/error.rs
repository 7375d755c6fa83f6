use thiserror::Error;

/// Configuration errors, raised before any integration step runs.
///
/// Numerical divergence is never reported here: a run that blows up still
/// returns its full trajectory.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Step count must be at least 1, got {0}")]
    InvalidStepCount(usize),

    #[error("Time horizon must be finite and positive, got {0}")]
    InvalidTimeHorizon(f64),

    #[error("Initial conditions must be finite, got x0={x0}, v0={v0}")]
    NonFiniteInitialCondition { x0: f64, v0: f64 },

    #[error("Angular frequency must be non-zero for the exact solution")]
    ZeroFrequency,
}
