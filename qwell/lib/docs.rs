//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Units](#units)
//! - [Finite square well](#finite-square-well)
//! - [Potential step](#potential-step)
//! - [Rectangular barrier](#rectangular-barrier)
//!
//! # Background
//! All systems here are solutions of the one-dimensional time-independent
//! Schrödinger equation (TISE)
//! ```text
//!    ħ² ∂²
//! - --- --- ψ(x) + V(x) ψ(x) = E ψ(x)
//!   2 m ∂x²
//! ```
//! for potentials *V*(*x*) that are constant on a small number of intervals.
//! On any interval where *V* is constant, the general solution is a sum of two
//! exponentials,
//! ```text
//! ψ(x) = P e^{q x} + Q e^{-q x},   q² = 2 m (V - E) / ħ²
//! ```
//! with *q* imaginary (*q* = *i* *k*) where the particle is classically allowed
//! (*E* > *V*) and real (*q* = *κ*) where it is forbidden. A complete solution
//! is then fixed by requiring ψ and ψ′ (or ψ′/*m* when the effective mass
//! changes between regions) to be continuous at each boundary, and by
//! physical conditions at ±∞: bound states must decay, and scattering states
//! are specified by an incident wave from the left with no wave incident from
//! the right.
//!
//! # Units
//! Lengths are measured in nanometers and energies in electronvolts, which is
//! the natural scale for electrons in semiconductor heterostructures. Masses
//! are given in kilograms (see [`units::me`][crate::units::me]). Internally,
//! momenta are computed in SI and converted to wavenumbers in nm⁻¹ with
//! [`units::wavenumber_nm`][crate::units::wavenumber_nm].
//!
//! # Finite square well
//! For a well of length *L* = 2 *a* centred at the origin with depth *V*₀ and
//! effective masses *M*<sub>w</sub> (inside) and *M*<sub>b</sub> (outside),
//! a bound state at energy 0 < *β* < *V*₀ has
//! ```text
//! k(β) = √(2 M_w β) / ħ           inside
//! α(β) = √(2 M_b (V₀ - β)) / ħ    outside
//! ```
//! Solutions are either even or odd about the centre. Matching ψ and ψ′/*m* at
//! *x* = *a* for `ψ ∝ cos(k x)` gives
//! ```text
//! α = (M_b / M_w) k tan(k a)
//! ```
//! and for `ψ ∝ sin(k x)`
//! ```text
//! α = -(M_b / M_w) k cot(k a)
//! ```
//! These are the even and odd eigen-branch equations. With *θ* = *k* *a* and
//! the well strength
//! ```text
//! θ_max² = 2 M_w V₀ a² / ħ²
//! ```
//! the allowed phases satisfy 0 < *θ* < *θ*<sub>max</sub>. Each quarter period
//! (*j* π/2, (*j* + 1) π/2) of *θ* below *θ*<sub>max</sub> holds exactly one
//! solution, alternating even and odd, so a well binds
//! ⌈*θ*<sub>max</sub> / (π/2)⌉ states. In particular, there is always at least
//! one (even) bound state.
//!
//! Because tan and cot diverge, both branch functions are only piecewise
//! continuous, and change sign at every pole as well as at every root. The
//! search in [`finite`][crate::finite] therefore splits the energy range at the
//! poles before looking for sign changes.
//!
//! Normalized eigenfunctions follow from integrating |ψ|² piecewise. For the
//! even branch,
//! ```text
//! ψ(x) = C cos(k x)                       |x| ≤ a
//!      = C cos(k a) e^{-α (|x| - a)}      |x| > a
//!
//! 1 / C² = a + sin(2 k a) / 2 k + cos²(k a) / α
//! ```
//! and for the odd branch,
//! ```text
//! ψ(x) = C sin(k x)                       |x| ≤ a
//!      = sgn(x) C sin(k a) e^{-α (|x| - a)}   |x| > a
//!
//! 1 / C² = a - sin(2 k a) / 2 k + sin²(k a) / α
//! ```
//!
//! # Potential step
//! For a step of height *V* at *x* = 0 and an incident wave of unit amplitude,
//! ```text
//! ψ(x) = e^{i k₁ x} + r e^{-i k₁ x}     x < 0
//!      = t e^{i k₂ x}                   x ≥ 0
//! ```
//! When *E* > *V*, matching gives
//! ```text
//! r = (k₁ - k₂) / (k₁ + k₂)        t = 2 k₁ / (k₁ + k₂)
//!
//!     4 k₁ k₂                  (k₂ - k₁)²
//! T = ----------           R = ----------
//!     (k₁ + k₂)²               (k₁ + k₂)²
//! ```
//! When *E* < *V*, *k*₂ → *i* *κ* and the transmitted wave decays; no flux is
//! carried past the step (*T* = 0, *R* = 1), but the field is nonzero there and
//! the reflected wave picks up a phase. Normalizing the evanescent amplitude to
//! 1 instead gives incident and reflected amplitudes (1 ± *i* *κ*/*k*₁) / 2.
//!
//! # Rectangular barrier
//! For a barrier of height *V* > *E* occupying 0 ≤ *x* ≤ *W*,
//! ```text
//! ψ(x) = D e^{i k x} + E' e^{-i k x}    x < 0
//!      = B e^{κ x} + C e^{-κ x}         0 ≤ x ≤ W
//!      = A e^{i k x}                    x > W
//! ```
//! Matching at *x* = *W* expresses *B* and *C* in terms of *A*,
//! ```text
//! B = (A/2) (1 + i k/κ) e^{(i k - κ) W}
//! C = (A/2) (1 - i k/κ) e^{(i k + κ) W}
//! ```
//! and matching at *x* = 0 then gives the incident and reflected amplitudes,
//! ```text
//! D  = (C/2) (1 + i κ/k) + (B/2) (1 - i κ/k)
//! E' = (C/2) (1 - i κ/k) + (B/2) (1 + i κ/k)
//! ```
//! with *T* = |*A*|² / |*D*|² and *R* = |*E'*|² / |*D*|². Since *C* grows as
//! e<sup>*κ* *W*</sup>, the computation is carried out with *A* = e<sup>-*κ*
//! *W*</sup> so that every intermediate quantity stays bounded even for very
//! thick barriers. The product *κ* *W* = *p*₂ *W* / *ħ* is a convenient figure
//! of merit: when it is small the barrier is "thin" and |*B*| ≈ |*C*|; when it
//! is large the barrier is "thick", |*C*| ≫ |*B*|, and *T* falls off roughly as
//! e<sup>-2 *κ* *W*</sup>.
