//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when a coordinate grid is requested with a non-positive number of
/// samples per axis or a non-positive number of dimensions.
#[derive(Debug, Error)]
#[error("grids require at least 1 sample per axis and 1 dimension; got N = {n}, D = {d}")]
pub struct InvalidGridConfig {
    pub n: usize,
    pub d: usize,
}

impl InvalidGridConfig {
    pub(crate) fn check(n: usize, d: usize) -> Result<(), Self> {
        (n >= 1 && d >= 1).then_some(()).ok_or(Self { n, d })
    }
}

/// Returned when a wavefunction's pre-normalization integral is not strictly
/// positive and finite, so no normalizing factor can be divided out.
#[derive(Debug, Error)]
#[error("wavefunction norm must be positive and finite; got {0}")]
pub struct DegenerateNorm(pub f64);

impl DegenerateNorm {
    pub(crate) fn check(norm: f64) -> Result<(), Self> {
        (norm > 0.0 && norm.is_finite()).then_some(()).ok_or(Self(norm))
    }
}

/// Returned from eigenstate solver functions.
#[derive(Debug, Error)]
pub enum VError {
    /// [`InvalidGridConfig`]
    #[error("grid config error: {0}")]
    Grid(#[from] InvalidGridConfig),

    /// Returned when a state's trial wavefunction degenerates mid-solve.
    #[error("degenerate norm for state {state} at iteration {iter}: {source}")]
    DegenerateState {
        /// 1-based order of the state being solved.
        state: usize,
        /// Relaxation loop iteration at which the norm degenerated.
        iter: usize,
        source: DegenerateNorm,
    },

    /// Returned when the orthogonal complement of the previously solved
    /// states contains no basis vectors to perturb along.
    #[error("no free search directions remain for state {0}")]
    EmptyBasis(usize),

    /// Returned when a potential name cannot be resolved and no default
    /// potential is registered either.
    #[error("unknown potential '{0}' and no default registered")]
    UnknownPotential(String),

    /// [`LinalgError`]
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),

    /// [`ndarray::ShapeError`]
    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
