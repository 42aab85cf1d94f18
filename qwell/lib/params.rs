//! Validated parameter sets for each of the supported potentials.
//!
//! Every constructor checks all of its preconditions at once and returns a
//! [`ConfigError`] listing each one that was violated. Derived quantities are
//! computed once at construction; all parameter types are immutable afterward.
//!
//! Units at the interface are nanometers (lengths), kilograms (masses), and
//! electronvolts (energies). Scattering parameters hold their energies
//! internally in joules.

use crate::{
    error::ConfigError,
    units::{ self, NM, hbar },
};

// strictly positive and not infinite (NaN fails both)
fn positive(x: f64) -> bool { x > 0.0 && x.is_finite() }

/// Geometry of a square well: its length, centre, and the normalization
/// constant `√(2/L)` of the infinite-well eigenfunctions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WellGeometry {
    length: f64,
    half_length: f64,
    centre: f64,
    norm: f64,
}

impl WellGeometry {
    /// Create a new geometry for a well of length `length` (nm) centred at
    /// `centre` (nm).
    pub fn new(length: f64, centre: f64) -> Result<Self, ConfigError> {
        ConfigError::new()
            .require(positive(length), "length is not positive and finite")
            .require(centre.is_finite(), "centre position is not finite")
            .finish()?;
        Ok(Self::new_unchecked(length, centre))
    }

    fn new_unchecked(length: f64, centre: f64) -> Self {
        Self {
            length,
            half_length: 0.5 * length,
            centre,
            norm: (2.0 / length).sqrt(),
        }
    }

    /// Well length (nm).
    pub fn length(&self) -> f64 { self.length }

    /// Half the well length (nm).
    pub fn half_length(&self) -> f64 { self.half_length }

    /// Position of the well centre (nm).
    pub fn centre(&self) -> f64 { self.centre }

    /// Normalization constant `√(2/L)` (nm^-1/2).
    pub fn norm(&self) -> f64 { self.norm }

    /// Left wall position (nm).
    pub fn left(&self) -> f64 { self.centre - self.half_length }

    /// Right wall position (nm).
    pub fn right(&self) -> f64 { self.centre + self.half_length }

    /// Return `true` if `x` (nm) lies within the walls of the well.
    pub fn contains(&self, x: f64) -> bool {
        (x - self.centre).abs() <= self.half_length
    }
}

/// Parameters for an infinite square well.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InfiniteWellParams {
    pub(crate) geometry: WellGeometry,
    pub(crate) mass: f64,
    // ground state energy (eV); E_n = n² e1
    pub(crate) e1: f64,
}

impl InfiniteWellParams {
    /// Create a new parameter set for a well of length `length` (nm) centred
    /// at `centre` (nm), containing a particle of mass `mass` (kg).
    pub fn new(length: f64, mass: f64, centre: f64)
        -> Result<Self, ConfigError>
    {
        ConfigError::new()
            .require(positive(length), "length is not positive and finite")
            .require(positive(mass), "mass is not positive and finite")
            .require(centre.is_finite(), "centre position is not finite")
            .finish()?;
        let geometry = WellGeometry::new_unchecked(length, centre);
        let kL = std::f64::consts::PI * hbar / (length * NM);
        let e1 = units::j_to_ev(kL.powi(2) / (2.0 * mass));
        Ok(Self { geometry, mass, e1 })
    }

    /// Well geometry.
    pub fn geometry(&self) -> &WellGeometry { &self.geometry }

    /// Particle mass (kg).
    pub fn mass(&self) -> f64 { self.mass }

    /// Energy of the lowest level (eV).
    pub fn ground_energy(&self) -> f64 { self.e1 }
}

/// Parameters for a finite square well, allowing the effective mass of the
/// particle to differ between the well and the surrounding barrier.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FiniteWellParams {
    pub(crate) geometry: WellGeometry,
    pub(crate) mass_well: f64,
    pub(crate) mass_barrier: f64,
    pub(crate) mass_ratio: f64,
    pub(crate) depth: f64,
    pub(crate) e_range: f64,
}

impl FiniteWellParams {
    /// Create a new parameter set for a well of length `length` (nm) and depth
    /// `depth` (eV) centred at `centre` (nm), where the particle has mass
    /// `mass_well` (kg) inside the well and `mass_barrier` (kg) outside.
    pub fn new(
        length: f64,
        mass_well: f64,
        mass_barrier: f64,
        depth: f64,
        centre: f64,
    ) -> Result<Self, ConfigError>
    {
        ConfigError::new()
            .require(positive(length), "length is not positive and finite")
            .require(positive(mass_well), "mass in well is not positive and finite")
            .require(positive(mass_barrier), "mass in barrier is not positive and finite")
            .require(positive(depth), "barrier height is not positive and finite")
            .require(centre.is_finite(), "centre position is not finite")
            .finish()?;
        let geometry = WellGeometry::new_unchecked(length, centre);
        let e_range
            = 2.0 * mass_well * units::ev_to_j(depth)
            * (geometry.half_length * NM / hbar).powi(2);
        Ok(Self {
            geometry,
            mass_well,
            mass_barrier,
            mass_ratio: mass_barrier / mass_well,
            depth,
            e_range,
        })
    }

    /// Well geometry.
    pub fn geometry(&self) -> &WellGeometry { &self.geometry }

    /// Particle mass inside the well (kg).
    pub fn mass_well(&self) -> f64 { self.mass_well }

    /// Particle mass inside the barrier (kg).
    pub fn mass_barrier(&self) -> f64 { self.mass_barrier }

    /// Ratio `mass_barrier / mass_well`.
    pub fn mass_ratio(&self) -> f64 { self.mass_ratio }

    /// Barrier height above the well floor (eV).
    pub fn depth(&self) -> f64 { self.depth }

    /// Dimensionless well strength `2 M_well V₀ (L/2ħ)²`.
    ///
    /// This is the square of the largest phase `k L / 2` accumulated across
    /// half the well by a bound state.
    pub fn e_range(&self) -> f64 { self.e_range }

    /// Largest half-well phase `k(V₀) L / 2`.
    pub fn theta_max(&self) -> f64 { self.e_range.sqrt() }

    /// Wavenumber (nm^-1) inside the well at energy `beta` (eV).
    pub fn k(&self, beta: f64) -> f64 {
        units::wavenumber_nm(
            units::momentum(self.mass_well, units::ev_to_j(beta)))
    }

    /// Decay rate (nm^-1) inside the barrier at energy `beta` (eV).
    ///
    /// Energies at or above the barrier height give zero.
    pub fn alpha(&self, beta: f64) -> f64 {
        let excess = units::ev_to_j((self.depth - beta).max(0.0));
        units::wavenumber_nm(units::momentum(self.mass_barrier, excess))
    }

    /// Half-well phase `k(β) L / 2` at energy `beta` (eV).
    pub fn theta(&self, beta: f64) -> f64 {
        self.k(beta) * self.geometry.half_length
    }

    /// Energy (eV) at which the half-well phase equals `theta`; inverse of
    /// [`Self::theta`].
    pub fn beta_of_theta(&self, theta: f64) -> f64 {
        self.depth * theta.powi(2) / self.e_range
    }
}

/// Energy regime of a potential step problem.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepRegime {
    /// Particle energy exceeds the step height; the wave propagates past the
    /// step.
    Above,
    /// Particle energy is at or below the step height; the wave decays past
    /// the step.
    Below,
}

/// Parameters for a potential step at `x = 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepParams {
    pub(crate) mass: f64,
    pub(crate) energy: f64,
    pub(crate) height: f64,
    pub(crate) p1: f64,
    pub(crate) p2: f64,
    pub(crate) regime: StepRegime,
}

impl StepParams {
    /// Create a new parameter set for a particle of mass `mass` (kg) and
    /// energy `energy` (eV) incident on a step of height `height` (eV).
    pub fn new(mass: f64, energy: f64, height: f64)
        -> Result<Self, ConfigError>
    {
        ConfigError::new()
            .require(positive(mass), "particle_mass is not positive and finite")
            .require(positive(energy), "particle_energy is not positive and finite")
            .require(positive(height), "step_height is not positive and finite")
            .finish()?;
        let E = units::ev_to_j(energy);
        let V = units::ev_to_j(height);
        let p1 = units::momentum(mass, E);
        let (p2, regime)
            = if E > V {
                (units::momentum(mass, E - V), StepRegime::Above)
            } else {
                (units::momentum(mass, V - E), StepRegime::Below)
            };
        Ok(Self { mass, energy: E, height: V, p1, p2, regime })
    }

    /// Particle mass (kg).
    pub fn mass(&self) -> f64 { self.mass }

    /// Particle energy (J).
    pub fn energy(&self) -> f64 { self.energy }

    /// Step height (J).
    pub fn height(&self) -> f64 { self.height }

    /// Momentum before the step (kg m s^-1).
    pub fn p1(&self) -> f64 { self.p1 }

    /// Momentum past the step (kg m s^-1); in the [`StepRegime::Below`] regime
    /// this is the magnitude of the imaginary momentum setting the decay rate.
    pub fn p2(&self) -> f64 { self.p2 }

    /// Energy regime.
    pub fn regime(&self) -> StepRegime { self.regime }
}

/// Parameters for a rectangular barrier occupying `0 ≤ x ≤ W`, restricted to
/// the tunnelling regime.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BarrierParams {
    pub(crate) mass: f64,
    pub(crate) energy: f64,
    pub(crate) height: f64,
    pub(crate) width: f64,
    pub(crate) p1: f64,
    pub(crate) p2: f64,
}

impl BarrierParams {
    /// Create a new parameter set for a particle of mass `mass` (kg) and
    /// energy `energy` (eV) incident on a barrier of height `height` (eV) and
    /// width `width` (nm).
    pub fn new(mass: f64, energy: f64, height: f64, width: f64)
        -> Result<Self, ConfigError>
    {
        ConfigError::new()
            .require(positive(mass), "particle_mass is not positive and finite")
            .require(positive(energy), "particle_energy is not positive and finite")
            .require(height > energy, "barr_height is not greater than particle_energy")
            .require(height.is_finite(), "barr_height is not finite")
            .require(positive(width), "barr_width is not positive and finite")
            .finish()?;
        let E = units::ev_to_j(energy);
        let V = units::ev_to_j(height);
        let p1 = units::momentum(mass, E);
        let p2 = units::momentum(mass, V - E);
        Ok(Self { mass, energy: E, height: V, width, p1, p2 })
    }

    /// Particle mass (kg).
    pub fn mass(&self) -> f64 { self.mass }

    /// Particle energy (J).
    pub fn energy(&self) -> f64 { self.energy }

    /// Barrier height (J).
    pub fn height(&self) -> f64 { self.height }

    /// Barrier width (nm).
    pub fn width(&self) -> f64 { self.width }

    /// Momentum outside the barrier (kg m s^-1).
    pub fn p1(&self) -> f64 { self.p1 }

    /// Magnitude of the imaginary momentum inside the barrier (kg m s^-1).
    pub fn p2(&self) -> f64 { self.p2 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::me;

    #[test]
    fn geometry_derived() {
        let g = WellGeometry::new(2.0, 0.5).unwrap();
        assert_eq!(g.half_length(), 1.0);
        assert!((g.norm() - 1.0).abs() < 1e-15);
        assert_eq!(g.left(), -0.5);
        assert_eq!(g.right(), 1.5);
        assert!(g.contains(1.5));
        assert!(!g.contains(1.6));
    }

    #[test]
    fn finite_well_reports_all_violations() {
        let err = FiniteWellParams::new(-1.0, 0.0, -me, 0.0, 0.0).unwrap_err();
        assert_eq!(err.reasons().len(), 4);
        let msg = err.to_string();
        assert!(msg.contains("length is not positive"));
        assert!(msg.contains("mass in well is not positive"));
        assert!(msg.contains("mass in barrier is not positive"));
        assert!(msg.contains("barrier height is not positive"));
    }

    #[test]
    fn finite_well_nan_rejected() {
        assert!(FiniteWellParams::new(f64::NAN, me, me, 1.0, 0.0).is_err());
    }

    #[test]
    fn infinite_inputs_rejected() {
        let inf = f64::INFINITY;
        let err = FiniteWellParams::new(inf, me, me, inf, 0.0).unwrap_err();
        assert_eq!(err.reasons().len(), 2);
        assert!(FiniteWellParams::new(2.0, inf, me, 1.0, 0.0).is_err());
        assert!(FiniteWellParams::new(2.0, me, me, 1.0, inf).is_err());
        assert!(InfiniteWellParams::new(inf, me, 0.0).is_err());
        assert!(StepParams::new(me, inf, 1.0).is_err());
        assert!(StepParams::new(me, 1.0, inf).is_err());
        let err = BarrierParams::new(me, 1.0, inf, 0.5).unwrap_err();
        assert_eq!(err.reasons(), &["barr_height is not finite".to_string()]);
        assert!(BarrierParams::new(me, 1.0, 2.0, inf).is_err());
    }

    #[test]
    fn alpha_clamped_above_depth() {
        let p = FiniteWellParams::new(2.0, me, me, 0.005, 0.0).unwrap();
        assert_eq!(p.alpha(0.005 * (1.0 + f64::EPSILON)), 0.0);
        assert!(p.alpha(0.004) > 0.0);
    }

    #[test]
    fn finite_well_theta_inverse() {
        let p = FiniteWellParams::new(2.0, me, 0.5 * me, 1.1, 0.0).unwrap();
        assert!((p.mass_ratio() - 0.5).abs() < 1e-15);
        assert!((p.theta(p.depth()) - p.theta_max()).abs() < 1e-9);
        for beta in [0.01, 0.3, 0.77, 1.05] {
            let th = p.theta(beta);
            assert!((p.beta_of_theta(th) - beta).abs() < 1e-12);
        }
        assert_eq!(p.alpha(p.depth()), 0.0);
    }

    #[test]
    fn step_regimes() {
        let above = StepParams::new(me, 2.0, 1.0).unwrap();
        assert_eq!(above.regime(), StepRegime::Above);
        let below = StepParams::new(me, 1.0, 1.1).unwrap();
        assert_eq!(below.regime(), StepRegime::Below);
        assert!(below.p2() > 0.0);
        let err = StepParams::new(0.0, -1.0, 0.0).unwrap_err();
        assert_eq!(err.reasons().len(), 3);
    }

    #[test]
    fn barrier_requires_tunnelling() {
        assert!(BarrierParams::new(me, 1.0, 2.0, 0.5).is_ok());
        let err = BarrierParams::new(me, 2.0, 1.0, 0.0).unwrap_err();
        assert_eq!(err.reasons().len(), 2);
        assert!(err.to_string().contains("barr_height"));
        assert!(err.to_string().contains("barr_width"));
    }
}
