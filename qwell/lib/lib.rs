#![allow(non_snake_case)]

//! Provides solvers for the one-dimensional, time-independent Schrödinger
//! equation in a handful of piecewise-constant potentials, where solutions are
//! either fully analytic or reduce to a transcendental equation in the energy.
//!
//! Provides implementations for the following systems:
//! - Bound states:
//!     - Infinite square well (closed form)
//!     - Finite square well with distinct well/barrier masses (pole-aware
//!       root search over even and odd eigen-branches)
//! - Scattering states:
//!     - Potential step, above and below the step height
//!     - Rectangular barrier in the tunnelling regime
//!
//! Lengths are given in nanometers, energies in electronvolts, and masses in
//! kilograms throughout the public interface. Wavefunctions can be sampled over
//! a coordinate grid and written to plain delimited text with [`sample`].
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod units;
pub mod params;
pub mod infinite;
pub mod finite;
pub mod scatter;
pub mod sample;
pub mod utils;

pub mod docs;

pub(crate) const DEF_EPSILON: f64 = 1e-10;
pub(crate) const DEF_MAXITERS: usize = 1000;
pub(crate) const DEF_SAMPLES: usize = 64;
pub(crate) const DEF_POLE_GUARD: f64 = 1e-12;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
