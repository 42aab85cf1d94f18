//! Closed-form solutions for the infinite square well.
//!
//! ```
//! use qwell::{ infinite::InfiniteWell, units::me };
//!
//! let well = InfiniteWell::from_params(
//!     qwell::params::InfiniteWellParams::new(2.0, me, 0.0).unwrap());
//! let e1 = well.energy(1).unwrap();
//! let e2 = well.energy(2).unwrap();
//! assert!((e2 / e1 - 4.0).abs() < 1e-12);
//! ```

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    error::FError,
    params::InfiniteWellParams,
    sample,
};

pub type IResult<T> = Result<T, FError>;

/// Infinite square well solver.
///
/// Levels are indexed from `n = 1`.
#[derive(Clone, Debug, Default)]
pub struct InfiniteWell {
    params: Option<InfiniteWellParams>,
}

impl InfiniteWell {
    /// Create a new, unconfigured solver.
    pub fn new() -> Self { Self { params: None } }

    /// Create a new solver from an already validated set of parameters.
    pub fn from_params(params: InfiniteWellParams) -> Self {
        Self { params: Some(params) }
    }

    /// Set the well length (nm), particle mass (kg), and well centre (nm).
    ///
    /// On failure, any previous configuration is left in place.
    pub fn configure(&mut self, length: f64, mass: f64, centre: f64)
        -> IResult<()>
    {
        let params = InfiniteWellParams::new(length, mass, centre)?;
        log::debug!(
            "infinite well: L = {length} nm, m = {mass:e} kg, E1 = {:e} eV",
            params.ground_energy(),
        );
        self.params = Some(params);
        Ok(())
    }

    /// Return `true` if parameters have been set.
    pub fn is_configured(&self) -> bool { self.params.is_some() }

    /// Get a reference to the current parameters.
    pub fn params(&self) -> IResult<&InfiniteWellParams> {
        self.params.as_ref().ok_or(FError::NotConfigured)
    }

    fn check_level(n: usize) -> IResult<()> {
        (n > 0).then_some(()).ok_or(FError::BadLevel(n))
    }

    /// Energy (eV) of the `n`-th level, `n ≥ 1`.
    pub fn energy(&self, n: usize) -> IResult<f64> {
        let params = self.params()?;
        Self::check_level(n)?;
        Ok((n as f64).powi(2) * params.e1)
    }

    /// Value of the normalized `n`-th eigenfunction at position `x` (nm).
    ///
    /// The eigenfunction vanishes identically outside the well.
    pub fn eigenfunction(&self, n: usize, x: f64) -> IResult<f64> {
        let params = self.params()?;
        Self::check_level(n)?;
        let g = params.geometry();
        if !g.contains(x) { return Ok(0.0); }
        let kn = n as f64 * PI / g.length();
        Ok(g.norm() * (kn * (x - g.left())).sin())
    }

    /// Sample the `n`-th eigenfunction over a coordinate grid given by
    /// "linspace-style" arguments.
    ///
    /// See [`sample::sample_wavefunction`].
    pub fn sample(&self, n: usize, xargs: (f64, f64, usize))
        -> IResult<nd::Array2<f64>>
    {
        let params = self.params()?;
        Self::check_level(n)?;
        let g = *params.geometry();
        let kn = n as f64 * PI / g.length();
        let table
            = sample::sample_wavefunction(xargs, |x| {
                if g.contains(x) {
                    C64::from(g.norm() * (kn * (x - g.left())).sin())
                } else {
                    C64::from(0.0)
                }
            });
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ sample::probability, units::me };

    fn well() -> InfiniteWell {
        let mut w = InfiniteWell::new();
        w.configure(2.0, me, 0.0).unwrap();
        w
    }

    #[test]
    fn unconfigured() {
        let w = InfiniteWell::new();
        assert!(matches!(w.energy(1), Err(FError::NotConfigured)));
        assert!(matches!(w.eigenfunction(1, 0.0), Err(FError::NotConfigured)));
    }

    #[test]
    fn levels_scale_quadratically() {
        let w = well();
        let e1 = w.energy(1).unwrap();
        // h² / 8 m L² for L = 2 nm is about 0.094 eV
        assert!((e1 - 0.0940).abs() < 1e-3);
        for n in 2..6 {
            let en = w.energy(n).unwrap();
            assert!((en / e1 - (n * n) as f64).abs() < 1e-12);
        }
        assert!(matches!(w.energy(0), Err(FError::BadLevel(0))));
    }

    #[test]
    fn eigenfunction_shape() {
        let w = well();
        assert!(w.eigenfunction(1, -1.0).unwrap().abs() < 1e-12);
        assert!(w.eigenfunction(1, 1.0).unwrap().abs() < 1e-12);
        assert!((w.eigenfunction(1, 0.0).unwrap() - 1.0).abs() < 1e-12);
        assert!(w.eigenfunction(2, 0.0).unwrap().abs() < 1e-12);
        assert_eq!(w.eigenfunction(1, 1.5).unwrap(), 0.0);
    }

    #[test]
    fn sampled_normalized() {
        let w = well();
        for n in 1..4 {
            let table = w.sample(n, (-1.5, 1.5, 3001)).unwrap();
            assert!((probability(&table).unwrap() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn failed_configure_keeps_state() {
        let mut w = well();
        let e1 = w.energy(1).unwrap();
        assert!(w.configure(-2.0, me, 0.0).is_err());
        assert_eq!(w.energy(1).unwrap(), e1);
    }
}
