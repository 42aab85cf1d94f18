//! Miscellaneous tools.

use ndarray::{ self as nd, Ix1 };
use num_complex::Complex64 as C64;
use num_traits::{ Float, Zero };

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let inner
        = y.slice(nd::s![1..n - 1]).iter()
        .fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

/// Calculate the norm of a wavefunction, `∫|ψ|² dx`.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S>(q: &nd::ArrayBase<S, Ix1>, dx: f64) -> f64
where S: nd::Data<Elem = C64>
{
    let n: usize = q.len();
    let inner
        = q.iter().skip(1).take(n - 2)
        .fold(f64::zero(), |acc, qk| acc + qk.norm_sqr());
    (dx / 2.0) * (q[0].norm_sqr() + 2.0 * inner + q[n - 1].norm_sqr())
}

/// Return the largest absolute jump between adjacent elements of `q`.
///
/// Used to check that sampled wavefunctions have no discontinuities at region
/// boundaries beyond what the grid spacing accounts for.
pub fn max_jump<S>(q: &nd::ArrayBase<S, Ix1>) -> f64
where S: nd::Data<Elem = C64>
{
    q.iter().zip(q.iter().skip(1))
        .map(|(qk, qkp1)| (*qkp1 - *qk).norm())
        .fold(0.0, f64::max)
}
