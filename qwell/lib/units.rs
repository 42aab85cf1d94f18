#![allow(non_upper_case_globals)]

//! Physical constants and the handful of unit conversions needed to move
//! between the electronvolt/nanometer scale of the public interface and SI.
//!
//! Concrete physical constants are taken from NIST.

use std::f64::consts::PI;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// one nanometer (m)
pub const NM: f64 = 1e-9;

/// Convert an energy in electronvolts to joules.
pub fn ev_to_j(energy: f64) -> f64 { energy * e }

/// Convert an energy in joules to electronvolts.
pub fn j_to_ev(energy: f64) -> f64 { energy / e }

/// Return the wavenumber (nm^-1) associated with a momentum `p` (kg m s^-1).
pub fn wavenumber_nm(p: f64) -> f64 { p * NM / hbar }

/// Return the momentum (kg m s^-1) of a particle of mass `mass` (kg) with
/// kinetic energy `energy` (J).
///
/// Negative kinetic energies give `NaN`.
pub fn momentum(mass: f64, energy: f64) -> f64 { (2.0 * mass * energy).sqrt() }
