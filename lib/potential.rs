//! Named potential functions and the registry used to resolve them.
//!
//! A potential function maps the coordinate tensor (shape `(D, N, …, N)`)
//! to a tensor of per-axis contributions of the same shape; the registry
//! sums the contributions over the axis dimension to produce the scalar
//! potential grid (shape `(N, …, N)`) consumed by the solver. Entries may
//! be `+∞`, representing impenetrable barriers.

use std::collections::HashMap;
use ndarray as nd;
use ndarray::Dimension;
use crate::error::VError;

/// A per-axis potential contribution function.
pub type PotentialFn = fn(&nd::ArrayD<f64>) -> nd::ArrayD<f64>;

/// Name of the potential used when resolution fails.
pub const DEFAULT_POTENTIAL: &str = "harmonic_oscillator";

/// `V = ½ r²` on each axis.
pub fn harmonic_oscillator(r: &nd::ArrayD<f64>) -> nd::ArrayD<f64> {
    r.mapv(|rk| 0.5 * rk * rk)
}

/// `V = r + ½ r² + ¼ r⁴` on each axis.
pub fn anharmonic_oscillator(r: &nd::ArrayD<f64>) -> nd::ArrayD<f64> {
    r.mapv(|rk| rk + 0.5 * rk.powi(2) + 0.25 * rk.powi(4))
}

// `v0` over the outer index-thirds of each axis, with a linear perturbation
// of the given strength over the well floor in between
fn square_well(r: &nd::ArrayD<f64>, v0: f64, perturbation: f64)
    -> nd::ArrayD<f64>
{
    let n = r.shape()[1];
    let third = n / 3;
    nd::ArrayD::from_shape_fn(r.raw_dim(), |idx| {
        let i = idx[idx[0] + 1];
        if i < third || i >= n - third {
            v0
        } else {
            perturbation * r[idx.slice()]
        }
    })
}

/// Square well with walls of height 10 over the outer index-thirds of each
/// axis, 0 over the middle.
pub fn finite_square_well(r: &nd::ArrayD<f64>) -> nd::ArrayD<f64> {
    square_well(r, 10.0, 0.0)
}

/// Square well with impenetrable (`+∞`) walls over the outer index-thirds
/// of each axis.
pub fn infinite_square_well(r: &nd::ArrayD<f64>) -> nd::ArrayD<f64> {
    square_well(r, f64::INFINITY, 0.0)
}

/// [`finite_square_well`] with a linear perturbation of strength 0.5 over
/// the well floor.
pub fn perturbed_finite_square_well(r: &nd::ArrayD<f64>) -> nd::ArrayD<f64> {
    square_well(r, 10.0, 0.5)
}

/// [`infinite_square_well`] with a linear perturbation of strength 0.5 over
/// the well floor.
pub fn perturbed_infinite_square_well(r: &nd::ArrayD<f64>)
    -> nd::ArrayD<f64>
{
    square_well(r, f64::INFINITY, 0.5)
}

/// Zero everywhere except a single `−∞` sample at the center of the first
/// index row, approximating an attractive delta-function well.
pub fn delta_barrier(r: &nd::ArrayD<f64>) -> nd::ArrayD<f64> {
    let n = r.shape()[1];
    let mut v: nd::ArrayD<f64> = nd::ArrayD::zeros(r.raw_dim());
    let mut center = vec![0; r.ndim()];
    center[r.ndim() - 1] = n / 2;
    v[nd::IxDyn(&center)] = f64::NEG_INFINITY;
    v
}

/// `V = r⁻²` on each axis.
pub fn inverse_square(r: &nd::ArrayD<f64>) -> nd::ArrayD<f64> {
    r.mapv(|rk| rk.powi(2).recip())
}

/// `V = A·C/r + B·C²/r²` on each axis, with `A = −10`, `B = 1.5`, `C = 8`:
/// an attractive Coulomb term plus a repulsive centrifugal term.
pub fn central_potential(r: &nd::ArrayD<f64>) -> nd::ArrayD<f64> {
    r.mapv(|rk| -80.0 / rk + 96.0 / (rk * rk))
}

/// Name → function map for potential resolution.
///
/// Unknown names resolve to [`DEFAULT_POTENTIAL`] with a warning;
/// resolution only fails (with [`VError::UnknownPotential`]) if the default
/// itself is missing from the map.
#[derive(Clone, Debug)]
pub struct PotentialRegistry {
    map: HashMap<String, PotentialFn>,
}

impl PotentialRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { map: HashMap::new() }
    }

    /// Create a registry holding all built-in potentials.
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        reg.register("harmonic_oscillator", harmonic_oscillator);
        reg.register("anharmonic_oscillator", anharmonic_oscillator);
        reg.register("finite_square_well", finite_square_well);
        reg.register("infinite_square_well", infinite_square_well);
        reg.register(
            "perturbed_finite_square_well", perturbed_finite_square_well);
        reg.register(
            "perturbed_infinite_square_well", perturbed_infinite_square_well);
        reg.register("delta_barrier", delta_barrier);
        reg.register("inverse_square", inverse_square);
        reg.register("central_potential", central_potential);
        reg
    }

    /// Add a named potential, replacing any previous entry for the name.
    pub fn register(&mut self, name: &str, f: PotentialFn) {
        self.map.insert(name.to_string(), f);
    }

    /// List all registered names.
    pub fn names(&self) -> Vec<&str> {
        self.map.keys().map(String::as_str).collect()
    }

    /// Resolve a name to its potential function, falling back to
    /// [`DEFAULT_POTENTIAL`] for unknown names.
    pub fn resolve(&self, name: &str) -> Result<PotentialFn, VError> {
        if let Some(f) = self.map.get(name) {
            Ok(*f)
        } else {
            println!(
                "potential::resolve: WARNING: unknown potential '{}', \
                falling back to '{}'",
                name, DEFAULT_POTENTIAL,
            );
            self.map.get(DEFAULT_POTENTIAL).copied()
                .ok_or_else(|| VError::UnknownPotential(name.to_string()))
        }
    }

    /// Evaluate the named potential on a coordinate tensor, summing the
    /// per-axis contributions into the scalar potential grid.
    pub fn evaluate(&self, r: &nd::ArrayD<f64>, name: &str)
        -> Result<nd::ArrayD<f64>, VError>
    {
        let f = self.resolve(name)?;
        Ok(f(r).sum_axis(nd::Axis(0)))
    }
}

impl Default for PotentialRegistry {
    fn default() -> Self { Self::with_builtins() }
}
