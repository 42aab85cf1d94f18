//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use std::fmt;
use thiserror::Error;

/// Returned when a set of physical parameters fails validation.
///
/// Holds every violated precondition, not just the first one encountered, and
/// displays them one per line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigError(pub Vec<String>);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration:")?;
        for reason in self.0.iter() {
            write!(f, "\n  {}", reason)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError { }

impl ConfigError {
    pub(crate) fn new() -> Self { Self(Vec::new()) }

    /// Record `reason` if `cond` does not hold.
    pub(crate) fn require(&mut self, cond: bool, reason: &str) -> &mut Self {
        if !cond { self.0.push(reason.to_string()); }
        self
    }

    /// Return `Ok` if nothing was recorded.
    pub(crate) fn finish(&mut self) -> Result<(), Self> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(std::mem::take(self))
        }
    }

    /// Return the list of violated preconditions.
    pub fn reasons(&self) -> &[String] { &self.0 }
}

/// Returned from bound-state (well) solvers.
#[derive(Debug, Error)]
pub enum FError {
    /// [`ConfigError`]
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Returned when a query is made before the solver has been configured.
    #[error("no parameters have been set for this well")]
    NotConfigured,

    /// Returned when a requested energy level does not exist.
    #[error("level index {n} is out of range; {n_states} levels available")]
    IndexOutOfRange { n: usize, n_states: usize },

    /// Returned when level `0` is requested from a well whose levels are
    /// indexed from `1`.
    #[error("levels are indexed from 1; got {0}")]
    BadLevel(usize),

    /// Returned when a non-positive `epsilon` value is encountered.
    #[error("epsilon values must be greater than 0; got {0}")]
    BadEpsilon(f64),

    /// Returned when a non-positive `maxiters` value is encountered.
    #[error("maxiters must be greater than 0; got {0}")]
    BadMaxiters(usize),

    /// Returned when fewer than two samples per scan segment are requested.
    #[error("scan segments must be sampled at least twice; got {0}")]
    BadSamples(usize),
}

impl FError {
    pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), Self> {
        (epsilon > 0.0).then_some(()).ok_or(Self::BadEpsilon(epsilon))
    }

    pub(crate) fn check_maxiters(maxiters: usize) -> Result<(), Self> {
        (maxiters != 0).then_some(()).ok_or(Self::BadMaxiters(maxiters))
    }

    pub(crate) fn check_samples(samples: usize) -> Result<(), Self> {
        (samples >= 2).then_some(()).ok_or(Self::BadSamples(samples))
    }
}

/// Returned from scattering solvers.
#[derive(Debug, Error)]
pub enum SError {
    /// [`ConfigError`]
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Returned when a query is made before the solver has been configured.
    #[error("no parameters have been set for this scattering problem")]
    NotConfigured,
}

/// Returned from functions in [`sample`][crate::sample].
#[derive(Debug, Error)]
pub enum SinkError {
    /// Returned when a sampling grid has fewer than two points.
    #[error("sampling grids must have at least 2 points; got {0}")]
    BadGrid(usize),

    /// [`std::io::Error`]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl SinkError {
    pub(crate) fn check_grid(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::BadGrid(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_lists_every_reason() {
        let err
            = ConfigError::new()
            .require(false, "length is not positive")
            .require(true, "never shown")
            .require(false, "mass is not positive")
            .finish()
            .unwrap_err();
        assert_eq!(err.reasons().len(), 2);
        let msg = err.to_string();
        assert!(msg.contains("length is not positive"));
        assert!(msg.contains("mass is not positive"));
        assert!(!msg.contains("never shown"));
        assert_eq!(msg.lines().count(), 3);
    }

    #[test]
    fn config_error_empty_is_ok() {
        assert!(ConfigError::new().require(true, "fine").finish().is_ok());
    }
}
