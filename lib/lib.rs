#![allow(dead_code, non_snake_case)]

//! Provides functions and higher-level constructs for computing energy
//! eigenstates (wavefunctions and eigenvalues) of the time-independent
//! Schrödinger equation on a D-dimensional coordinate grid via stochastic
//! variational relaxation.
//!
//! Rather than diagonalizing the Hamiltonian directly, each eigenstate is
//! found by a greedy stochastic descent over trial wavefunctions: a smooth
//! seed state is repeatedly perturbed along randomly chosen directions drawn
//! from the orthogonal complement of all previously solved states, with the
//! perturbation magnitude annealed linearly toward zero, and a perturbation
//! kept only when it strictly lowers the energy expectation value ⟨ψ|H|ψ⟩.
//! By the variational principle, this drives each trial state toward the
//! lowest-energy wavefunction orthogonal to every state found before it,
//! producing the spectrum in order.
//!
//! The main entry points are [`solve::compute`], which runs the full
//! pipeline for a [`config::RunConfig`], and [`solve::nth_state`], which
//! solves for a single state given the grid, potential, and the ledger of
//! previously solved states.

pub mod error;
pub mod units;
pub mod config;
pub mod grid;
pub mod laplacian;
pub mod operators;
pub mod potential;
pub mod solve;
pub mod utils;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
