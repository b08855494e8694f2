//! Construction of symmetric D-dimensional coordinate grids.

use ndarray as nd;
use crate::error::InvalidGridConfig;

/// A symmetric, uniformly spaced D-dimensional coordinate grid.
///
/// The coordinate tensor has shape `(D, N, …, N)` (`D` copies of axis length
/// `N`): entry `(a, i₀, …, i_{D−1})` holds the axis-`a` coordinate of the
/// grid point `(i₀, …, i_{D−1})`, i.e. the D-fold "ij"-indexed meshgrid of a
/// single linearly spaced axis. All axes share the same bounds, so the
/// spacing `dr = (stop − start) / N` is uniform across the whole grid.
#[derive(Clone, Debug)]
pub struct Grid {
    // coordinate tensor, shape (d, n, …, n)
    r: nd::ArrayD<f64>,
    start: f64,
    stop: f64,
    n: usize,
    d: usize,
    dr: f64,
}

impl Grid {
    /// Create a new grid spanning `[start, stop]` with `n` samples per axis
    /// over `d` dimensions.
    pub fn new(start: f64, stop: f64, n: usize, d: usize)
        -> Result<Self, InvalidGridConfig>
    {
        InvalidGridConfig::check(n, d)?;
        let x: nd::Array1<f64> = nd::Array1::linspace(start, stop, n);
        let mut shape: Vec<usize> = Vec::with_capacity(d + 1);
        shape.push(d);
        shape.resize(d + 1, n);
        let r: nd::ArrayD<f64>
            = nd::ArrayD::from_shape_fn(
                nd::IxDyn(&shape), |idx| x[idx[idx[0] + 1]]);
        let dr = (stop - start) / n as f64;
        Ok(Self { r, start, stop, n, d, dr })
    }

    /// Get a reference to the coordinate tensor.
    pub fn get_r(&self) -> &nd::ArrayD<f64> { &self.r }

    /// Get the grid spacing.
    pub fn get_dr(&self) -> f64 { self.dr }

    /// Get the grid bounds.
    pub fn bounds(&self) -> (f64, f64) { (self.start, self.stop) }

    /// Get the number of samples per axis.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }

    /// Get the number of dimensions.
    pub fn ndim(&self) -> usize { self.d }

    /// Get the total number of grid points, `N^D`.
    pub fn size(&self) -> usize { self.n.pow(self.d as u32) }
}
