//! The energy functional and wavefunction normalization.
//!
//! Integrals over the grid are taken with the rectangular rule, `Σ f · dr`,
//! applied to the flattened arrays; this matches the convention used for
//! normalization everywhere else in the crate, so normalized wavefunctions
//! satisfy `Σ ψ² · dr = 1` exactly.

use ndarray as nd;
use crate::{
    Arr1,
    error::DegenerateNorm,
    laplacian::Laplacian,
    units,
};

/// Compute the rectangular-rule integral of `|ψ|²` over the grid.
pub fn norm<S>(psi: &Arr1<S>, dr: f64) -> f64
where S: nd::Data<Elem = f64>
{
    psi.iter().map(|pk| pk * pk).sum::<f64>() * dr
}

/// Compute the dr-weighted inner product of two wavefunctions.
///
/// *Panics if the arrays have unequal lengths*.
pub fn overlap<S, T>(a: &Arr1<S>, b: &Arr1<T>, dr: f64) -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(ak, bk)| ak * bk).sum::<f64>() * dr
}

/// Rescale a wavefunction in place so that its [`norm`] equals 1.
pub fn renormalize<S>(psi: &mut Arr1<S>, dr: f64) -> Result<(), DegenerateNorm>
where S: nd::DataMut<Elem = f64>
{
    let norm = norm(psi, dr);
    DegenerateNorm::check(norm)?;
    let scale = norm.sqrt().recip();
    psi.iter_mut().for_each(|pk| { *pk *= scale; });
    Ok(())
}

/// Return a normalized copy of a wavefunction.
pub fn normalized<S>(psi: &Arr1<S>, dr: f64)
    -> Result<nd::Array1<f64>, DegenerateNorm>
where S: nd::Data<Elem = f64>
{
    let mut out = psi.to_owned();
    renormalize(&mut out, dr)?;
    Ok(out)
}

/// Compute the energy expectation value ⟨ψ|H|ψ⟩ of a flattened wavefunction
/// in the potential `V`.
///
/// The kinetic term is `(−ħ²/2mₑ)·(L ψ)` with `L` the [`Laplacian`]; the
/// potential term is the pointwise product `V·ψ` with any non-finite entries
/// replaced by 0. An infinite potential is only ever sampled where the
/// wavefunction amplitude is pinned to zero, so the `∞ · 0` products it
/// produces are defined as zero contribution rather than left to propagate
/// as NaN.
///
/// *Panics if `psi` and `V` do not both have length `N^D`*.
pub fn energy<S, T>(psi: &Arr1<S>, V: &Arr1<T>, dr: f64, lap: &Laplacian)
    -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    assert_eq!(psi.len(), V.len());
    let Tp = lap.apply(psi);
    psi.iter().zip(&Tp).zip(V)
        .map(|((pk, tk), vk)| {
            let vp = vk * pk;
            let vp = if vp.is_finite() { vp } else { 0.0 };
            pk * (units::KINETIC_FACTOR * tk + vp)
        })
        .sum::<f64>() * dr
}
