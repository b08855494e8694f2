#![allow(non_upper_case_globals)]

//! Physical constants scaling the kinetic-energy term of the Hamiltonian.
//!
//! Note the mixed unit system: `hbar` is carried in electron-volt seconds
//! while the electron mass is in kilograms, so computed eigenvalues are
//! meaningful relative to each other but are not expressed in a standard
//! energy unit.

/// reduced Planck constant (eV s)
pub const hbar: f64 = 6.5821189e-16;

/// electron mass (kg)
pub const me: f64 = 9.1093819e-31;

/// kinetic-energy prefactor -ħ²/2mₑ
pub const KINETIC_FACTOR: f64 = -hbar * hbar / (2.0 * me);
