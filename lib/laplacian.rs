//! The discrete Laplacian over a symmetric D-dimensional grid.

use ndarray as nd;
use crate::Arr1;

/// Second-derivative (central-difference) operator for a D-dimensional grid
/// of `N` samples per axis, acting on wavefunctions flattened to length
/// `N^D`.
///
/// The full operator is the sum of one partial second derivative per axis.
/// The axis-`a` partial places `−2` on the main diagonal and `+1` at offsets
/// `±N^a`, with the off-diagonal entry zeroed wherever the offset would step
/// across the boundary of an axis-`a` sub-block — an edge-truncated (not
/// periodic) stencil, tensor-producted over the remaining axes. The whole
/// operator carries a factor of `dr⁻²`.
///
/// Only the band structure is stored; the operator is never materialized as
/// a dense `N^D × N^D` matrix outside of [`Self::to_dense`]. A built value
/// is valid for exactly one `(D, N, dr)` triple and is meant to be shared
/// read-only for as long as that configuration is active; rebuild it if any
/// of the three changes (see [`Self::matches`]).
#[derive(Clone, Debug)]
pub struct Laplacian {
    d: usize,
    n: usize,
    dr: f64,
    // flattened length, n^d
    size: usize,
    // off-diagonal offsets, n^a for each axis a
    strides: Vec<usize>,
}

impl Laplacian {
    /// Build the operator for a grid of `n` samples per axis over `d`
    /// dimensions with spacing `dr`.
    pub fn new(d: usize, n: usize, dr: f64) -> Self {
        let size = n.pow(d as u32);
        let strides: Vec<usize> = (0..d).map(|a| n.pow(a as u32)).collect();
        Self { d, n, dr, size, strides }
    }

    /// Return `true` if `self` was built for exactly the given
    /// configuration.
    pub fn matches(&self, d: usize, n: usize, dr: f64) -> bool {
        self.d == d && self.n == n && self.dr == dr
    }

    /// Get the flattened operator size, `N^D`.
    pub fn size(&self) -> usize { self.size }

    // `true` if row `i` couples to row `i + stride`, i.e. the positive
    // neighbor along the stride's axis does not cross a sub-block boundary
    fn coupled(&self, i: usize, stride: usize) -> bool {
        (i / stride) % self.n != self.n - 1
    }

    /// Apply the operator to a flattened wavefunction.
    ///
    /// *Panics if `psi` does not have length `N^D`*.
    pub fn apply<S>(&self, psi: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        assert_eq!(psi.len(), self.size);
        let odr2 = self.dr.powi(2).recip();
        let diag = -2.0 * self.d as f64;
        let mut out: nd::Array1<f64> = nd::Array1::zeros(self.size);
        for (i, outk) in out.iter_mut().enumerate() {
            let mut acc = diag * psi[i];
            for &k in self.strides.iter() {
                if i + k < self.size && self.coupled(i, k) {
                    acc += psi[i + k];
                }
                if i >= k && self.coupled(i - k, k) {
                    acc += psi[i - k];
                }
            }
            *outk = acc * odr2;
        }
        out
    }

    /// Realize the operator as a dense matrix.
    pub fn to_dense(&self) -> nd::Array2<f64> {
        let odr2 = self.dr.powi(2).recip();
        let mut dense: nd::Array2<f64>
            = nd::Array2::from_diag_elem(self.size, -2.0 * self.d as f64);
        for &k in self.strides.iter() {
            for i in 0..self.size - k {
                if self.coupled(i, k) {
                    dense[[i, i + k]] = 1.0;
                    dense[[i + k, i]] = 1.0;
                }
            }
        }
        dense *= odr2;
        dense
    }
}
