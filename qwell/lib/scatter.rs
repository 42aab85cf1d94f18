//! Scattering solutions for the potential step and the rectangular barrier.
//!
//! In both cases the wavefunction is a sum of plane (or evanescent) waves in
//! each region of constant potential, and the complex amplitudes follow in
//! closed form from continuity of ψ and ψ′ at every boundary. Positions are in
//! nanometers, with the step (or the left edge of the barrier) at `x = 0`.
//!
//! ```
//! use qwell::{ scatter::{ PotentialStep, Scattering }, units::me };
//!
//! let mut step = PotentialStep::new();
//! step.configure(me, 2.0, 1.0).unwrap();
//! let res = step.result().unwrap();
//! assert!(res.transmission > 0.0 && res.transmission < 1.0);
//! assert!((res.transmission + res.reflection - 1.0).abs() < 1e-14);
//! ```

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    error::SError,
    params::{ BarrierParams, StepParams, StepRegime },
    sample,
    units,
};

pub type SResult<T> = Result<T, SError>;

/// Transmission and reflection probabilities.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScatteringResult {
    /// Transmission probability.
    pub transmission: f64,
    /// Reflection probability.
    pub reflection: f64,
}

impl ScatteringResult {
    /// Return `T + R`, which should be 1 for any flux-conserving solution.
    pub fn total(&self) -> f64 { self.transmission + self.reflection }
}

/// Behavior shared by the scattering solvers.
pub trait Scattering {
    /// Transmission and reflection probabilities.
    fn result(&self) -> SResult<ScatteringResult>;

    /// Value of the (unnormalized) wavefunction at position `x` (nm).
    fn wavefunction(&self, x: f64) -> SResult<C64>;

    /// Transmission probability.
    fn transmission(&self) -> SResult<f64> {
        self.result().map(|r| r.transmission)
    }

    /// Reflection probability.
    fn reflection(&self) -> SResult<f64> {
        self.result().map(|r| r.reflection)
    }

    /// Sample the wavefunction over a coordinate grid given by
    /// "linspace-style" arguments.
    ///
    /// See [`sample::sample_wavefunction`].
    fn sample(&self, xargs: (f64, f64, usize)) -> SResult<nd::Array2<f64>> {
        self.result()?;
        let table
            = sample::sample_wavefunction(xargs, |x| {
                self.wavefunction(x).unwrap_or(C64::from(f64::NAN))
            });
        Ok(table)
    }
}

/// Complex amplitudes of the potential step solution.
///
/// Before the step, `ψ = incident e^{t1 x} + reflected e^{-t1 x}`; past the
/// step, `ψ = transmitted e^{t2 x}`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepAmplitudes {
    pub incident: C64,
    pub reflected: C64,
    pub transmitted: C64,
    /// `i k₁` (nm^-1).
    pub t1: C64,
    /// `i k₂` above the step height, `-κ` at or below it (nm^-1).
    pub t2: C64,
}

#[derive(Copy, Clone, Debug)]
struct StepSolution {
    params: StepParams,
    amps: StepAmplitudes,
    result: ScatteringResult,
}

impl StepSolution {
    fn new(params: StepParams) -> Self {
        let StepParams { p1, p2, .. } = params;
        let i = C64::i();
        let t1 = i * units::wavenumber_nm(p1);
        let (amps, result)
            = match params.regime {
                StepRegime::Above => {
                    let psum = p1 + p2;
                    let pdiff = p2 - p1;
                    let amps = StepAmplitudes {
                        incident: C64::from(1.0),
                        reflected: C64::from(-pdiff / psum),
                        transmitted: C64::from(2.0 * p1 / psum),
                        t1,
                        t2: i * units::wavenumber_nm(p2),
                    };
                    // R = (p₂ - p₁)² / (p₁ + p₂)² identically
                    let transmission = 4.0 * p1 * p2 / psum.powi(2);
                    let result = ScatteringResult {
                        transmission,
                        reflection: 1.0 - transmission,
                    };
                    (amps, result)
                },
                StepRegime::Below => {
                    let d = p2 / p1;
                    let amps = StepAmplitudes {
                        incident: 0.5 * (1.0 + i * d),
                        reflected: 0.5 * (1.0 - i * d),
                        transmitted: C64::from(1.0),
                        t1,
                        t2: C64::from(-units::wavenumber_nm(p2)),
                    };
                    let result
                        = ScatteringResult { transmission: 0.0, reflection: 1.0 };
                    (amps, result)
                },
            };
        log::debug!(
            "potential step ({:?}): p1 = {p1:e}, p2 = {p2:e}, t1 = {}, t2 = {}, \
            T = {}, R = {}, T + R = {}",
            params.regime,
            amps.t1,
            amps.t2,
            result.transmission,
            result.reflection,
            result.total(),
        );
        Self { params, amps, result }
    }

    fn wavefunction(&self, x: f64) -> C64 {
        let a = &self.amps;
        if x < 0.0 {
            a.incident * (a.t1 * x).exp() + a.reflected * (-a.t1 * x).exp()
        } else {
            a.transmitted * (a.t2 * x).exp()
        }
    }
}

/// Potential step solver.
#[derive(Clone, Debug, Default)]
pub struct PotentialStep {
    solved: Option<StepSolution>,
}

impl PotentialStep {
    /// Create a new, unconfigured solver.
    pub fn new() -> Self { Self { solved: None } }

    /// Create a new solver from an already validated set of parameters.
    pub fn from_params(params: StepParams) -> Self {
        Self { solved: Some(StepSolution::new(params)) }
    }

    /// Set the particle mass (kg), particle energy (eV), and step height (eV).
    ///
    /// On failure, any previous configuration is left in place.
    pub fn configure(&mut self, mass: f64, energy: f64, height: f64)
        -> SResult<()>
    {
        let params = StepParams::new(mass, energy, height)?;
        self.solved = Some(StepSolution::new(params));
        Ok(())
    }

    fn solved(&self) -> SResult<&StepSolution> {
        self.solved.as_ref().ok_or(SError::NotConfigured)
    }

    /// Return `true` if parameters have been set.
    pub fn is_configured(&self) -> bool { self.solved.is_some() }

    /// Get a reference to the current parameters.
    pub fn params(&self) -> SResult<&StepParams> {
        self.solved().map(|s| &s.params)
    }

    /// Energy regime.
    pub fn regime(&self) -> SResult<StepRegime> {
        self.solved().map(|s| s.params.regime)
    }

    /// Momentum before the step (kg m s^-1).
    pub fn p1(&self) -> SResult<f64> { self.solved().map(|s| s.params.p1) }

    /// Momentum past the step (kg m s^-1); see [`StepParams::p2`].
    pub fn p2(&self) -> SResult<f64> { self.solved().map(|s| s.params.p2) }

    /// Complex amplitudes of the solution.
    pub fn amplitudes(&self) -> SResult<StepAmplitudes> {
        self.solved().map(|s| s.amps)
    }
}

impl Scattering for PotentialStep {
    fn result(&self) -> SResult<ScatteringResult> {
        self.solved().map(|s| s.result)
    }

    fn wavefunction(&self, x: f64) -> SResult<C64> {
        self.solved().map(|s| s.wavefunction(x))
    }
}

/// Qualitative barrier classification by the figure of merit `p₂ W / ħ`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BarrierKind {
    /// `p₂ W / ħ < 1`: growing and decaying amplitudes inside the barrier are
    /// comparable.
    Thin,
    /// `p₂ W / ħ ≥ 1`: the decaying amplitude dominates inside the barrier.
    Thick,
}

/// Complex amplitudes of the barrier solution, normalized to unit incident
/// amplitude.
///
/// Before the barrier, `ψ = incident e^{i k x} + reflected e^{-i k x}`; inside,
/// `ψ = growing e^{κ x} + decaying e^{-κ x}`; past it,
/// `ψ = transmitted e^{i k x}`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BarrierAmplitudes {
    pub transmitted: C64,
    pub growing: C64,
    pub decaying: C64,
    pub incident: C64,
    pub reflected: C64,
    /// `k` outside the barrier (nm^-1).
    pub k: f64,
    /// `κ` inside the barrier (nm^-1).
    pub kappa: f64,
}

#[derive(Copy, Clone, Debug)]
struct BarrierSolution {
    params: BarrierParams,
    amps: BarrierAmplitudes,
    // growing amplitude referred to the right edge, `growing e^{κ W}`; keeps
    // the interior evaluation finite for thick barriers
    growing_w: C64,
    result: ScatteringResult,
    fom: f64,
}

impl BarrierSolution {
    fn new(params: BarrierParams) -> Self {
        let BarrierParams { p1, p2, width: W, .. } = params;
        let i = C64::i();
        let k = units::wavenumber_nm(p1);
        let kappa = units::wavenumber_nm(p2);
        let fom = kappa * W;
        let phase = (i * k * W).exp();
        let s = (-fom).exp();

        // match at x = W with the transmitted amplitude set to e^{-κW}
        let A = C64::from(s);
        let Bw = 0.5 * (1.0 + i * (p1 / p2)) * phase * s;
        let B = Bw * s;
        let C = 0.5 * (1.0 - i * (p1 / p2)) * phase;
        // match at x = 0
        let D = 0.5 * C * (1.0 + i * (p2 / p1)) + 0.5 * B * (1.0 - i * (p2 / p1));
        let E = 0.5 * C * (1.0 - i * (p2 / p1)) + 0.5 * B * (1.0 + i * (p2 / p1));

        let result = ScatteringResult {
            transmission: A.norm_sqr() / D.norm_sqr(),
            reflection: E.norm_sqr() / D.norm_sqr(),
        };
        let amps = BarrierAmplitudes {
            transmitted: A / D,
            growing: B / D,
            decaying: C / D,
            incident: C64::from(1.0),
            reflected: E / D,
            k,
            kappa,
        };
        log::debug!(
            "potential barrier: p1 = {p1:e}, p2 = {p2:e}, k = {k}, κ = {kappa}, \
            T = {}, R = {}, T + R = {}, p2 W / ħ = {fom}",
            result.transmission,
            result.reflection,
            result.total(),
        );
        Self { params, amps, growing_w: Bw / D, result, fom }
    }

    fn wavefunction(&self, x: f64) -> C64 {
        let a = &self.amps;
        let ik = C64::i() * a.k;
        if x < 0.0 {
            a.incident * (ik * x).exp() + a.reflected * (-ik * x).exp()
        } else if x > self.params.width {
            a.transmitted * (ik * x).exp()
        } else {
            self.growing_w * (a.kappa * (x - self.params.width)).exp()
                + a.decaying * (-a.kappa * x).exp()
        }
    }
}

/// Rectangular barrier solver, restricted to the tunnelling regime.
#[derive(Clone, Debug, Default)]
pub struct PotentialBarrier {
    solved: Option<BarrierSolution>,
}

impl PotentialBarrier {
    /// Create a new, unconfigured solver.
    pub fn new() -> Self { Self { solved: None } }

    /// Create a new solver from an already validated set of parameters.
    pub fn from_params(params: BarrierParams) -> Self {
        Self { solved: Some(BarrierSolution::new(params)) }
    }

    /// Set the particle mass (kg), particle energy (eV), barrier height (eV),
    /// and barrier width (nm).
    ///
    /// On failure, any previous configuration is left in place.
    pub fn configure(&mut self, mass: f64, energy: f64, height: f64, width: f64)
        -> SResult<()>
    {
        let params = BarrierParams::new(mass, energy, height, width)?;
        self.solved = Some(BarrierSolution::new(params));
        Ok(())
    }

    fn solved(&self) -> SResult<&BarrierSolution> {
        self.solved.as_ref().ok_or(SError::NotConfigured)
    }

    /// Return `true` if parameters have been set.
    pub fn is_configured(&self) -> bool { self.solved.is_some() }

    /// Get a reference to the current parameters.
    pub fn params(&self) -> SResult<&BarrierParams> {
        self.solved().map(|s| &s.params)
    }

    /// Complex amplitudes of the solution.
    pub fn amplitudes(&self) -> SResult<BarrierAmplitudes> {
        self.solved().map(|s| s.amps)
    }

    /// Dimensionless figure of merit `p₂ W / ħ`.
    pub fn figure_of_merit(&self) -> SResult<f64> {
        self.solved().map(|s| s.fom)
    }

    /// Classify the barrier as thin or thick.
    pub fn barrier_kind(&self) -> SResult<BarrierKind> {
        self.figure_of_merit()
            .map(|fom| if fom < 1.0 { BarrierKind::Thin } else { BarrierKind::Thick })
    }
}

impl Scattering for PotentialBarrier {
    fn result(&self) -> SResult<ScatteringResult> {
        self.solved().map(|s| s.result)
    }

    fn wavefunction(&self, x: f64) -> SResult<C64> {
        self.solved().map(|s| s.wavefunction(x))
    }
}

/// Compute the transmission probability through a potential step of height
/// `height` (eV) for a particle of mass `mass` (kg) at each of a set of
/// energies (eV).
///
/// Each energy is solved independently; energies that fail validation give
/// `NaN`.
pub fn step_transmission<S>(mass: f64, height: f64, energies: &Arr1<S>)
    -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    energies.mapv(|e| {
        match StepParams::new(mass, e, height) {
            Ok(params) => StepSolution::new(params).result.transmission,
            Err(err) => {
                log::warn!("scatter::step_transmission: skipping E = {e}: {err}");
                f64::NAN
            },
        }
    })
}

/// Compute the transmission probability through a barrier of height `height`
/// (eV) and width `width` (nm) for a particle of mass `mass` (kg) at each of a
/// set of energies (eV).
///
/// Each energy is solved independently; energies that fail validation
/// (including those at or above the barrier height) give `NaN`.
pub fn barrier_transmission<S>(
    mass: f64,
    height: f64,
    width: f64,
    energies: &Arr1<S>,
) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    energies.mapv(|e| {
        match BarrierParams::new(mass, e, height, width) {
            Ok(params) => BarrierSolution::new(params).result.transmission,
            Err(err) => {
                log::warn!(
                    "scatter::barrier_transmission: skipping E = {e}: {err}");
                f64::NAN
            },
        }
    })
}
