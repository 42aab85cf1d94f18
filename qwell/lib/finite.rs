//! Bound states of the finite square well.
//!
//! Energies are found as the zeros of the two transcendental eigen-branch
//! functions
//! ```text
//! f_even(β) = α(β) - (M_barr / M_well) k(β) tan(k(β) L / 2)
//! f_odd(β)  = α(β) + (M_barr / M_well) k(β) tan(π/2 - k(β) L / 2)
//! ```
//! over `0 < β < V₀`. Both are only piecewise continuous: writing
//! `θ = k L / 2`, `f_even` has poles at `θ = (2j + 1) π / 2` and `f_odd` at
//! `θ = j π`. A naive scan for sign changes would report a spurious zero at
//! every pole, so the energy range is first cut into pole-free segments (the
//! pole locations are known analytically) and only brackets lying on a single
//! pole sheet are refined.
//!
//! ```
//! use qwell::{ finite::{ FiniteWell, Parity }, units::me };
//!
//! let mut well = FiniteWell::new();
//! well.configure(2.0, me, me, 1.1, 0.0).unwrap();
//! let ground = well.state(0).unwrap();
//! assert_eq!(ground.parity, Parity::Even);
//! assert!(ground.energy > 0.0 && ground.energy < 1.1);
//! ```

use std::f64::consts::{ FRAC_PI_2, PI };
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    error::FError,
    params::FiniteWellParams,
    sample,
    DEF_EPSILON,
    DEF_MAXITERS,
    DEF_POLE_GUARD,
    DEF_SAMPLES,
};

pub type FResult<T> = Result<T, FError>;

// smallest distance, in units of f64 spacing at the local phase, kept between
// a sample point and a pole
const POLE_ULPS: f64 = 256.0;

// minimum phase separation from a pole at half-well phase `theta`
fn pole_margin(theta: f64) -> f64 { POLE_ULPS * f64::EPSILON * theta.abs() }

/// Parity of a bound state about the well centre, identifying the eigen-branch
/// it was found on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Index of the pole sheet containing the half-well phase `theta`.
    ///
    /// Two phases on the same sheet have no pole of this branch's function
    /// between them.
    pub fn sheet(self, theta: f64) -> i64 {
        match self {
            Self::Even => (theta / PI + 0.5).floor() as i64,
            Self::Odd => (theta / PI).floor() as i64,
        }
    }

    /// Return `true` if the branch function has a pole between half-well
    /// phases `theta0` and `theta1`.
    pub fn straddles_pole(self, theta0: f64, theta1: f64) -> bool {
        self.sheet(theta0) != self.sheet(theta1)
    }

    /// Distance in half-well phase from `theta` to the nearest pole of the
    /// branch function.
    pub fn pole_distance(self, theta: f64) -> f64 {
        match self {
            Self::Even => {
                let j = (theta / PI - 0.5).round();
                (theta - (j + 0.5) * PI).abs()
            },
            Self::Odd => (theta - (theta / PI).round() * PI).abs(),
        }
    }

    /// All pole locations in half-well phase within `[0, theta_max)`.
    ///
    /// `θ = 0` is reported for the odd branch: the function has a finite limit
    /// there, but cannot be evaluated at the point itself.
    pub fn poles(self, theta_max: f64) -> Vec<f64> {
        let offs = match self { Self::Even => FRAC_PI_2, Self::Odd => 0.0 };
        (0..)
            .map(|j| offs + j as f64 * PI)
            .take_while(|th| *th < theta_max)
            .collect()
    }
}

/// A single bound state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundState {
    /// Level index, counting from 0 in order of increasing energy.
    pub n: usize,
    /// Energy above the well floor (eV).
    pub energy: f64,
    /// Eigen-branch the energy was found on.
    pub parity: Parity,
}

/// Root-search settings.
///
/// `None` fields take crate defaults.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SearchParams {
    /// Absolute energy tolerance (eV) on the final bracket width (default:
    /// `1e-10`).
    pub epsilon: Option<f64>,
    /// Maximum number of refinement iterations per bracket (default: `1000`).
    /// Candidates that fail to converge within this limit are discarded.
    pub maxiters: Option<usize>,
    /// Number of sample points in each pole-free segment (default: `64`).
    pub samples: Option<usize>,
    /// Distance from a pole at which segment endpoints are placed, relative to
    /// the segment width in half-well phase (default: `1e-12`). The distance
    /// never drops below a few hundred ulps of the phase at the pole.
    pub pole_guard: Option<f64>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Search {
    epsilon: f64,
    maxiters: usize,
    samples: usize,
    pole_guard: f64,
}

impl SearchParams {
    fn resolve(&self) -> FResult<Search> {
        let epsilon = self.epsilon.unwrap_or(DEF_EPSILON);
        let maxiters = self.maxiters.unwrap_or(DEF_MAXITERS);
        let samples = self.samples.unwrap_or(DEF_SAMPLES);
        let pole_guard = self.pole_guard.unwrap_or(DEF_POLE_GUARD);
        FError::check_epsilon(epsilon)?;
        FError::check_maxiters(maxiters)?;
        FError::check_samples(samples)?;
        FError::check_epsilon(pole_guard)?;
        Ok(Search { epsilon, maxiters, samples, pole_guard })
    }
}

/// Even-branch characteristic function at energy `beta` (eV).
pub fn f_even(params: &FiniteWellParams, beta: f64) -> f64 {
    let k = params.k(beta);
    params.alpha(beta)
        - params.mass_ratio * k * (k * params.geometry.half_length()).tan()
}

/// Odd-branch characteristic function at energy `beta` (eV).
pub fn f_odd(params: &FiniteWellParams, beta: f64) -> f64 {
    let k = params.k(beta);
    params.alpha(beta)
        + params.mass_ratio * k
        * (FRAC_PI_2 - k * params.geometry.half_length()).tan()
}

/// Characteristic function of the branch selected by `parity`.
pub fn branch_value(params: &FiniteWellParams, parity: Parity, beta: f64)
    -> f64
{
    match parity {
        Parity::Even => f_even(params, beta),
        Parity::Odd => f_odd(params, beta),
    }
}

#[derive(Copy, Clone, Debug)]
struct Bounds<T>(T, T);

impl Bounds<f64> {
    fn midpoint(self) -> f64 { (self.0 + self.1) / 2.0 }

    fn diff(self) -> f64 { self.1 - self.0 }

    // narrower than `epsilon`, or adjacent floats so that no further
    // shrinking is possible
    fn is_resolved(self, epsilon: f64) -> bool {
        let m = self.midpoint();
        self.diff() < epsilon || m <= self.0 || m >= self.1
    }

    fn secant(self, f: Bounds<f64>) -> f64 {
        self.1 - f.1 * (self.1 - self.0) / (f.1 - f.0)
    }
}

impl<T> Bounds<T> {
    fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Bounds<U> {
        (f(self.0), f(self.1)).into()
    }
}

impl<T> From<(T, T)> for Bounds<T> {
    fn from(xx: (T, T)) -> Self { Self(xx.0, xx.1) }
}

// which end of the bracket was replaced on the last iteration
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side { Left, Right, Neither }

// refine a sign-changing bracket with false position (Illinois-modified so
// that a stagnant endpoint is still pulled in), falling back to bisection
// whenever the secant estimate leaves the bracket or two successive steps fail
// to halve it
//
// returns `None` if the bracket is not resolved within `maxiters` iterations
fn refine<F>(f: F, mut b: Bounds<f64>, epsilon: f64, maxiters: usize)
    -> Option<f64>
where F: Fn(f64) -> f64
{
    let mut fb: Bounds<f64> = b.map(&f);
    let mut side = Side::Neither;
    let mut widths = Bounds(b.diff(), b.diff());
    let mut bisect = false;
    let mut E: f64;
    let mut fE: f64;
    for _ in 0..maxiters {
        if b.is_resolved(epsilon) { return Some(b.midpoint()); }
        E = if bisect { b.midpoint() } else { b.secant(fb) };
        if !(E > b.0 && E < b.1) { E = b.midpoint(); }
        fE = f(E);
        if fE == 0.0 { return Some(E); }
        if fE.signum() == fb.0.signum() {
            b.0 = E;
            fb.0 = fE;
            if side == Side::Left { fb.1 /= 2.0; }
            side = Side::Left;
        } else {
            b.1 = E;
            fb.1 = fE;
            if side == Side::Right { fb.0 /= 2.0; }
            side = Side::Right;
        }
        if b.is_resolved(epsilon) { return Some(b.midpoint()); }
        bisect = b.diff() > 0.5 * widths.0;
        widths = Bounds(widths.1, b.diff());
    }
    None
}

// split (0, V₀) at the poles of a branch and return each pole-free segment's
// sampling endpoints in energy
//
// edges are placed in half-well phase and pulled in from any pole by the guard
// distance before mapping to energy; the segments touching 0 and V₀ (when not
// poles) end exactly there
fn segments(params: &FiniteWellParams, parity: Parity, pole_guard: f64)
    -> Vec<Bounds<f64>>
{
    let theta_max = params.theta_max();
    let mut edges: Vec<(f64, bool)> = vec![(0.0, parity == Parity::Odd)];
    parity.poles(theta_max).into_iter()
        .filter(|th| *th > 0.0)
        .for_each(|th| { edges.push((th, true)); });
    edges.push((theta_max, false));
    edges.iter().zip(edges.iter().skip(1))
        .filter_map(|(&(a, pa), &(b, pb))| {
            let guard = (pole_guard * (b - a)).max(pole_margin(b));
            let seg
                = Bounds(
                    if pa { params.beta_of_theta(a + guard) } else { 0.0 },
                    if pb { params.beta_of_theta(b - guard) } else { params.depth },
                );
            (seg.1 > seg.0).then_some(seg)
        })
        .collect()
}

/// Find all zeros of a single eigen-branch function in `(0, V₀)`, in order of
/// increasing energy.
///
/// The energy range is cut into segments at the branch's poles, and each
/// segment is sampled at evenly spaced points. Adjacent samples whose function
/// values differ in sign form a bracket, provided they lie on the same pole
/// sheet; brackets are then refined to within `epsilon` (or as far as
/// floating-point resolution allows). Brackets that fail to converge, or that
/// converge onto a pole instead of a zero, are discarded with a warning.
pub fn find_roots(
    params: &FiniteWellParams,
    parity: Parity,
    search: &SearchParams,
) -> FResult<Vec<f64>>
{
    let Search { epsilon, maxiters, samples, pole_guard } = search.resolve()?;
    let f = |beta: f64| branch_value(params, parity, beta);
    let is_zero = |beta: f64, bound: f64| {
        let theta = params.theta(beta);
        f(beta).abs() <= bound
            && parity.pole_distance(theta) >= pole_margin(theta)
    };
    let mut roots: Vec<f64> = Vec::new();
    for seg in segments(params, parity, pole_guard) {
        let mut beta: nd::Array1<f64>
            = nd::Array1::linspace(seg.0, seg.1, samples);
        beta[0] = seg.0;
        beta[samples - 1] = seg.1;
        let vals: nd::Array1<f64> = beta.mapv(f);
        let pairs
            = beta.iter().zip(beta.iter().skip(1))
            .zip(vals.iter().zip(vals.iter().skip(1)));
        for ((&b0, &b1), (&f0, &f1)) in pairs {
            if !f0.is_finite() || !f1.is_finite() { continue; }
            if f0 == 0.0 {
                roots.push(b0);
                continue;
            }
            if f0 * f1 >= 0.0 { continue; }
            if parity.straddles_pole(params.theta(b0), params.theta(b1)) {
                log::trace!(
                    "{parity:?}: skipping bracket [{b0}, {b1}] across a pole");
                continue;
            }
            log::trace!("{parity:?}: refining bracket [{b0}, {b1}]");
            match refine(f, Bounds(b0, b1), epsilon, maxiters) {
                // the branch is monotonic on a sheet, so a true zero is never
                // larger in magnitude than the bracket's end values
                Some(root) if !is_zero(root, f0.abs().max(f1.abs())) => {
                    log::warn!(
                        "finite::find_roots: {parity:?} bracket [{b0}, {b1}] \
                        converged onto a pole at {root}; discarding"
                    );
                },
                Some(root) => { roots.push(root); },
                None => {
                    log::warn!(
                        "finite::find_roots: {parity:?} bracket [{b0}, {b1}] \
                        did not converge within {maxiters} iterations; \
                        discarding"
                    );
                },
            }
        }
        if vals[samples - 1] == 0.0 { roots.push(beta[samples - 1]); }
    }
    roots.retain(|&beta| beta > 0.0 && beta < params.depth);
    roots.sort_by(|l, r| l.total_cmp(r));
    roots.dedup_by(|r, l| (*r - *l).abs() < epsilon);
    Ok(roots)
}

/// Find all bound states of a finite well, merging both eigen-branches into a
/// single list ordered by increasing energy.
pub fn solve(params: &FiniteWellParams, search: &SearchParams)
    -> FResult<Vec<BoundState>>
{
    let mut found: Vec<(f64, Parity)>
        = find_roots(params, Parity::Even, search)?.into_iter()
        .map(|e| (e, Parity::Even))
        .chain(
            find_roots(params, Parity::Odd, search)?.into_iter()
            .map(|e| (e, Parity::Odd))
        )
        .collect();
    found.sort_by(|l, r| l.0.total_cmp(&r.0));
    let states: Vec<BoundState>
        = found.into_iter().enumerate()
        .map(|(n, (energy, parity))| BoundState { n, energy, parity })
        .collect();
    Ok(states)
}

/// Number of bound states predicted by counting quarter periods of the
/// half-well phase, `⌈θ_max / (π/2)⌉`.
pub fn expected_states(params: &FiniteWellParams) -> usize {
    (params.theta_max() / FRAC_PI_2).ceil() as usize
}

// wavenumbers and normalization constant for a single state
#[derive(Copy, Clone, Debug, PartialEq)]
struct Profile {
    k: f64,
    alpha: f64,
    norm: f64,
}

impl Profile {
    fn new(params: &FiniteWellParams, state: &BoundState) -> Self {
        let a = params.geometry.half_length();
        let k = params.k(state.energy);
        let alpha = params.alpha(state.energy);
        let (s, c) = (k * a).sin_cos();
        let osc = (2.0 * k * a).sin() / (2.0 * k);
        let integral
            = match state.parity {
                Parity::Even => a + osc + c.powi(2) / alpha,
                Parity::Odd => a - osc + s.powi(2) / alpha,
            };
        Self { k, alpha, norm: integral.sqrt().recip() }
    }

    fn eval(&self, parity: Parity, a: f64, u: f64) -> f64 {
        let outside = u.abs() - a;
        match parity {
            Parity::Even if outside <= 0.0 => self.norm * (self.k * u).cos(),
            Parity::Even => {
                self.norm * (self.k * a).cos() * (-self.alpha * outside).exp()
            },
            Parity::Odd if outside <= 0.0 => self.norm * (self.k * u).sin(),
            Parity::Odd => {
                u.signum() * self.norm * (self.k * a).sin()
                    * (-self.alpha * outside).exp()
            },
        }
    }
}

// everything computed for a single configuration; replaced as a unit
#[derive(Clone, Debug)]
struct Solved {
    params: FiniteWellParams,
    search: SearchParams,
    states: Vec<BoundState>,
    profiles: Vec<Profile>,
}

impl Solved {
    fn new(params: FiniteWellParams, search: SearchParams) -> FResult<Self> {
        let states = solve(&params, &search)?;
        let profiles: Vec<Profile>
            = states.iter().map(|s| Profile::new(&params, s)).collect();
        log::debug!(
            "finite well: L = {} nm, V0 = {} eV, M_barr/M_well = {}, \
            E_range = {}, {} bound states",
            params.geometry.length(),
            params.depth,
            params.mass_ratio,
            params.e_range,
            states.len(),
        );
        Ok(Self { params, search, states, profiles })
    }
}

/// Finite square well solver.
///
/// Configuring the solver validates the parameters and immediately solves for
/// all bound states; the result replaces any earlier configuration only if
/// both steps succeed.
#[derive(Clone, Debug, Default)]
pub struct FiniteWell {
    solved: Option<Solved>,
}

impl FiniteWell {
    /// Create a new, unconfigured solver.
    pub fn new() -> Self { Self { solved: None } }

    /// Create a new solver from an already validated set of parameters.
    pub fn from_params(params: FiniteWellParams, search: SearchParams)
        -> FResult<Self>
    {
        Ok(Self { solved: Some(Solved::new(params, search)?) })
    }

    /// Set the well length (nm), particle masses inside and outside the well
    /// (kg), barrier height (eV), and well centre (nm), using default search
    /// settings.
    pub fn configure(
        &mut self,
        length: f64,
        mass_well: f64,
        mass_barrier: f64,
        depth: f64,
        centre: f64,
    ) -> FResult<()>
    {
        let params
            = FiniteWellParams::new(
                length, mass_well, mass_barrier, depth, centre)?;
        self.configure_with(params, SearchParams::default())
    }

    /// Like [`Self::configure`], but with explicit parameter and search
    /// settings.
    pub fn configure_with(
        &mut self,
        params: FiniteWellParams,
        search: SearchParams,
    ) -> FResult<()>
    {
        let solved = Solved::new(params, search)?;
        self.solved = Some(solved);
        Ok(())
    }

    fn solved(&self) -> FResult<&Solved> {
        self.solved.as_ref().ok_or(FError::NotConfigured)
    }

    /// Return `true` if parameters have been set.
    pub fn is_configured(&self) -> bool { self.solved.is_some() }

    /// Get a reference to the current parameters.
    pub fn params(&self) -> FResult<&FiniteWellParams> {
        self.solved().map(|s| &s.params)
    }

    /// Get the current search settings.
    pub fn search(&self) -> FResult<SearchParams> {
        self.solved().map(|s| s.search)
    }

    /// All bound states, in order of increasing energy.
    pub fn states(&self) -> FResult<&[BoundState]> {
        self.solved().map(|s| s.states.as_slice())
    }

    /// Number of bound states found.
    pub fn n_states(&self) -> FResult<usize> {
        self.solved().map(|s| s.states.len())
    }

    /// Number of bound states predicted analytically; see
    /// [`expected_states`].
    pub fn expected_states(&self) -> FResult<usize> {
        self.solved().map(|s| expected_states(&s.params))
    }

    /// Get the `n`-th bound state.
    pub fn state(&self, n: usize) -> FResult<&BoundState> {
        let solved = self.solved()?;
        solved.states.get(n)
            .ok_or(FError::IndexOutOfRange { n, n_states: solved.states.len() })
    }

    /// Energy (eV) of the `n`-th bound state.
    pub fn energy(&self, n: usize) -> FResult<f64> {
        self.state(n).map(|s| s.energy)
    }

    /// Parity of the `n`-th bound state.
    pub fn parity(&self, n: usize) -> FResult<Parity> {
        self.state(n).map(|s| s.parity)
    }

    /// Value of the normalized `n`-th eigenfunction at position `x` (nm).
    ///
    /// Inside the well this is a cosine (even states) or sine (odd states)
    /// about the well centre; outside it decays exponentially at rate
    /// `α(E)`, matched continuously at both walls.
    pub fn eigenfunction(&self, n: usize, x: f64) -> FResult<f64> {
        let solved = self.solved()?;
        let state = self.state(n)?;
        let g = solved.params.geometry();
        let profile = solved.profiles[n];
        Ok(profile.eval(state.parity, g.half_length(), x - g.centre()))
    }

    /// Sample the `n`-th eigenfunction over a coordinate grid given by
    /// "linspace-style" arguments.
    ///
    /// See [`sample::sample_wavefunction`].
    pub fn sample(&self, n: usize, xargs: (f64, f64, usize))
        -> FResult<nd::Array2<f64>>
    {
        let solved = self.solved()?;
        let state = *self.state(n)?;
        let g = *solved.params.geometry();
        let profile = solved.profiles[n];
        let table
            = sample::sample_wavefunction(xargs, |x| {
                C64::from(profile.eval(state.parity, g.half_length(), x - g.centre()))
            });
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        sample::probability,
        units::me,
        utils::{ max_jump, wf_norm },
    };

    const PROTON_MASS: f64 = 1.67262192369e-27; // kg

    fn reference_well() -> FiniteWell {
        let mut well = FiniteWell::new();
        well.configure(2.0, me, me, 1.1, 0.0).unwrap();
        well
    }

    // |f| at a state, relative to the size of the two terms being balanced
    fn relative_residual(params: &FiniteWellParams, state: &BoundState) -> f64 {
        let k = params.k(state.energy);
        let theta = params.theta(state.energy);
        let t = match state.parity {
            Parity::Even => theta.tan(),
            Parity::Odd => (FRAC_PI_2 - theta).tan(),
        };
        let scale = params.alpha(state.energy) + params.mass_ratio() * k * t.abs();
        branch_value(params, state.parity, state.energy).abs() / scale
    }

    // solve with default settings and check the full set of states: one per
    // quarter period of phase, alternating parity, increasing energy, each a
    // zero of its branch
    fn check_well(params: FiniteWellParams) -> FiniteWell {
        let well = FiniteWell::from_params(params, SearchParams::default())
            .unwrap();
        let label
            = format!(
                "L = {}, V0 = {}, ratio = {}",
                params.geometry().length(), params.depth(), params.mass_ratio(),
            );
        let states = well.states().unwrap();
        assert_eq!(states.len(), expected_states(&params), "{label}");
        for (n, s) in states.iter().enumerate() {
            let parity = if n % 2 == 0 { Parity::Even } else { Parity::Odd };
            assert_eq!(s.n, n, "{label}");
            assert_eq!(s.parity, parity, "{label}: state {n}");
            assert!(s.energy > 0.0 && s.energy < params.depth(), "{label}: state {n}");
            let res = relative_residual(&params, s);
            assert!(res < 1e-5, "{label}: state {n} residual {res:e}");
        }
        assert!(
            states.windows(2).all(|w| w[0].energy < w[1].energy),
            "{label}: energies not increasing",
        );
        well
    }

    #[test]
    fn sheets_and_poles() {
        assert_eq!(Parity::Even.sheet(0.0), 0);
        assert_eq!(Parity::Even.sheet(1.0), 0);
        assert_eq!(Parity::Even.sheet(2.0), 1);
        assert_eq!(Parity::Odd.sheet(3.0), 0);
        assert_eq!(Parity::Odd.sheet(3.2), 1);
        assert!(Parity::Even.straddles_pole(1.5, 1.6));
        assert!(!Parity::Odd.straddles_pole(1.5, 1.6));
        let even = Parity::Even.poles(5.0);
        assert_eq!(even.len(), 2);
        assert!((even[1] - 1.5 * PI).abs() < 1e-15);
        let odd = Parity::Odd.poles(5.0);
        assert_eq!(odd, vec![0.0, PI]);
        assert!((Parity::Even.pole_distance(1.5 * PI + 0.1) - 0.1).abs() < 1e-12);
        assert!((Parity::Even.pole_distance(0.2) - (FRAC_PI_2 - 0.2)).abs() < 1e-12);
        assert!((Parity::Odd.pole_distance(0.2) - 0.2).abs() < 1e-12);
        assert!((Parity::Odd.pole_distance(PI - 0.3) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn segments_stay_inside_well() {
        let params
            = FiniteWellParams::new(18.2106, me, 0.3 * me, 0.005, 0.0).unwrap();
        for parity in [Parity::Even, Parity::Odd] {
            let segs = segments(&params, parity, DEF_POLE_GUARD);
            assert_eq!(segs.last().unwrap().1, params.depth());
            for seg in segs.iter() {
                assert!(seg.0 >= 0.0 && seg.0 < seg.1 && seg.1 <= params.depth());
                for beta in [seg.0, seg.1] {
                    if beta == 0.0 || beta == params.depth() { continue; }
                    let theta = params.theta(beta);
                    assert!(parity.pole_distance(theta) >= 100.0 * f64::EPSILON * theta);
                }
            }
        }
    }

    #[test]
    fn resolved_at_float_spacing() {
        let x: f64 = 3.5e7;
        let next = f64::from_bits(x.to_bits() + 1);
        assert!(Bounds(x, next).is_resolved(1e-10));
        assert!(!Bounds(x, x + 1.0).is_resolved(1e-10));
        assert!(Bounds(0.0, 1e-11).is_resolved(1e-10));
    }

    #[test]
    fn refine_converges_and_caps() {
        let f = |x: f64| x.powi(3) - 2.0;
        let root = refine(f, Bounds(0.0, 3.0), 1e-12, 1000).unwrap();
        assert!((root - 2.0_f64.cbrt()).abs() < 1e-11);
        assert!(refine(f, Bounds(0.0, 3.0), 1e-12, 2).is_none());
    }

    #[test]
    fn refine_stops_at_float_resolution() {
        // bracket spacing at this magnitude is far coarser than epsilon
        let f = |x: f64| (x / 3.5e7).powi(3) - 1.0;
        let root = refine(f, Bounds(3.0e7, 4.0e7), 1e-10, 1000).unwrap();
        assert!((root - 3.5e7).abs() < 1e-6);
    }

    #[test]
    fn refine_recovers_from_huge_endpoint() {
        // steep pole-like left endpoint should not stall the iteration
        let f = |x: f64| 1.0 / x - 1.0;
        let root = refine(f, Bounds(1e-12, 3.0), 1e-12, 1000).unwrap();
        assert!((root - 1.0).abs() < 1e-11);
    }

    #[test]
    fn reference_well_states() {
        let well = reference_well();
        let params = *well.params().unwrap();
        let states = well.states().unwrap();
        assert!(!states.is_empty());
        assert_eq!(states.len(), well.expected_states().unwrap());
        assert_eq!(states.len(), 4);
        assert_eq!(states[0].parity, Parity::Even);
        for (n, s) in states.iter().enumerate() {
            assert_eq!(s.n, n);
            assert!(s.energy > 0.0 && s.energy < 1.1);
            assert!(branch_value(&params, s.parity, s.energy).abs() < 1e-5);
        }
        assert!(states.windows(2).all(|w| w[0].energy < w[1].energy));
        let parities: Vec<Parity> = states.iter().map(|s| s.parity).collect();
        assert_eq!(
            parities,
            vec![Parity::Even, Parity::Odd, Parity::Even, Parity::Odd],
        );
    }

    #[test]
    fn below_infinite_well_levels() {
        // a finite well always binds more weakly than an infinite one
        let well = reference_well();
        let mut inf = crate::infinite::InfiniteWell::new();
        inf.configure(2.0, me, 0.0).unwrap();
        for n in 0..well.n_states().unwrap() {
            assert!(well.energy(n).unwrap() < inf.energy(n + 1).unwrap());
        }
    }

    #[test]
    fn unequal_masses() {
        let mut well = FiniteWell::new();
        well.configure(5.0, 0.067 * me, 0.092 * me, 0.3, 1.0).unwrap();
        let params = *well.params().unwrap();
        let n_states = well.n_states().unwrap();
        assert_eq!(n_states, well.expected_states().unwrap());
        for s in well.states().unwrap() {
            assert!(branch_value(&params, s.parity, s.energy).abs() < 1e-5);
        }
    }

    #[test]
    fn shallow_well_single_state() {
        let mut well = FiniteWell::new();
        well.configure(0.5, me, me, 0.05, 0.0).unwrap();
        assert_eq!(well.n_states().unwrap(), 1);
        assert_eq!(well.parity(0).unwrap(), Parity::Even);
    }

    #[test]
    fn eigenfunctions_normalized_and_continuous() {
        let well = reference_well();
        for n in 0..well.n_states().unwrap() {
            let table = well.sample(n, (-8.0, 8.0, 16001)).unwrap();
            assert!((probability(&table).unwrap() - 1.0).abs() < 1e-4);
            let q: nd::Array1<C64>
                = table.rows().into_iter()
                .map(|row| C64::new(row[1], row[2]))
                .collect();
            let dx = table[[1, 0]] - table[[0, 0]];
            assert!((wf_norm(&q, dx) - 1.0).abs() < 1e-4);
            assert!(max_jump(&q) < 6e-3);
            for wall in [-1.0, 1.0] {
                let l = well.eigenfunction(n, wall - 1e-9).unwrap();
                let r = well.eigenfunction(n, wall + 1e-9).unwrap();
                assert!((l - r).abs() < 1e-6);
            }
        }
        // parity about the centre
        let x = 0.37;
        assert!(
            (well.eigenfunction(0, x).unwrap()
                - well.eigenfunction(0, -x).unwrap()).abs() < 1e-12
        );
        assert!(
            (well.eigenfunction(1, x).unwrap()
                + well.eigenfunction(1, -x).unwrap()).abs() < 1e-12
        );
    }

    #[test]
    fn shifted_centre_shifts_eigenfunction() {
        let well = reference_well();
        let mut shifted = FiniteWell::new();
        shifted.configure(2.0, me, me, 1.1, 1.5).unwrap();
        for n in 0..well.n_states().unwrap() {
            assert_eq!(well.energy(n).unwrap(), shifted.energy(n).unwrap());
            let a = well.eigenfunction(n, 0.3).unwrap();
            let b = shifted.eigenfunction(n, 1.8).unwrap();
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn queries_fail_appropriately() {
        let well = FiniteWell::new();
        assert!(matches!(well.energy(0), Err(FError::NotConfigured)));
        assert!(matches!(well.eigenfunction(0, 0.0), Err(FError::NotConfigured)));
        let well = reference_well();
        assert!(matches!(
            well.energy(4),
            Err(FError::IndexOutOfRange { n: 4, n_states: 4 })
        ));
    }

    #[test]
    fn reconfigure_is_idempotent() {
        let mut well = reference_well();
        let first: Vec<BoundState> = well.states().unwrap().to_vec();
        well.configure(2.0, me, me, 1.1, 0.0).unwrap();
        assert_eq!(well.states().unwrap(), first.as_slice());
    }

    #[test]
    fn failed_configure_keeps_state() {
        let mut well = reference_well();
        let first: Vec<BoundState> = well.states().unwrap().to_vec();
        let err = well.configure(-2.0, 0.0, me, -1.0, 0.0).unwrap_err();
        match err {
            FError::Config(c) => { assert_eq!(c.reasons().len(), 3); },
            _ => panic!("expected configuration error"),
        }
        assert_eq!(well.states().unwrap(), first.as_slice());
    }

    #[test]
    fn bad_search_settings() {
        let params = FiniteWellParams::new(2.0, me, me, 1.1, 0.0).unwrap();
        let search = SearchParams { epsilon: Some(0.0), ..Default::default() };
        assert!(matches!(
            FiniteWell::from_params(params, search),
            Err(FError::BadEpsilon(_))
        ));
        let search = SearchParams { samples: Some(1), ..Default::default() };
        assert!(matches!(
            FiniteWell::from_params(params, search),
            Err(FError::BadSamples(1))
        ));
        let search = SearchParams { maxiters: Some(0), ..Default::default() };
        assert!(matches!(
            FiniteWell::from_params(params, search),
            Err(FError::BadMaxiters(0))
        ));
    }

    #[test]
    fn coarse_scan_finds_no_false_roots() {
        // with very few samples per segment every bracket still lies on a
        // single sheet, so nothing spurious is reported at the poles
        let params = FiniteWellParams::new(4.0, me, me, 2.0, 0.0).unwrap();
        let search = SearchParams { samples: Some(2), ..Default::default() };
        let well = FiniteWell::from_params(params, search).unwrap();
        for s in well.states().unwrap() {
            assert!(branch_value(&params, s.parity, s.energy).abs() < 1e-5);
        }
        assert_eq!(well.n_states().unwrap(), expected_states(&params));
    }

    #[test]
    fn state_just_below_top_of_well() {
        // the highest state sits in the last sample interval below V₀
        let params
            = FiniteWellParams::new(18.2106, me, 0.3 * me, 0.005, 0.0).unwrap();
        let well = check_well(params);
        assert_eq!(well.n_states().unwrap(), 3);
    }

    #[test]
    fn no_state_at_narrow_last_pole() {
        for ratio in [0.3, 1.0, 2.7] {
            let params
                = FiniteWellParams::new(20.3945, me, ratio * me, 6.845, 0.0)
                .unwrap();
            let well = check_well(params);
            assert_eq!(well.n_states().unwrap(), 88);
        }
    }

    #[test]
    fn deep_narrow_well() {
        // MeV-scale energies, where f64 spacing exceeds the default epsilon
        let mass = PROTON_MASS / 2.0;
        let params
            = FiniteWellParams::new(4.2e-6, mass, mass, 35e6, 0.0).unwrap();
        let well = check_well(params);
        assert_eq!(well.n_states().unwrap(), 2);
    }

    #[test]
    fn grid_of_wells() {
        for length in [0.5, 1.0, 2.0, 5.0, 18.2106, 20.3945] {
            for depth in [0.005, 0.05, 0.3, 1.1, 6.845] {
                for ratio in [0.3, 1.0, 2.7] {
                    let params
                        = FiniteWellParams::new(
                            length, me, ratio * me, depth, 0.0)
                        .unwrap();
                    check_well(params);
                }
            }
        }
    }
}
