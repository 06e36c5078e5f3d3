//! # Potentials Module
//!
//! Pairwise interaction models and the near-overlap safety policy.
//!
//! ## Overview
//!
//! A [`Potential`] is a closed set of interaction variants sharing one
//! two-operation capability contract: a scalar force magnitude and a scalar
//! energy, both functions of the inter-particle separation alone. The variant
//! set is deliberately small and closed; adding a form means adding a variant,
//! not subclassing.
//!
//! ## Key Components
//!
//! - [`functions`] - The raw mathematical forms as pure inline functions
//! - [`Potential`] - The tagged variant set with validation
//! - [`ForceClamp`] - The near-overlap flooring and force-capping policy
//! - [`params`] - TOML-loadable parameter descriptions

pub mod functions;
pub mod params;

use serde::Deserialize;
use thiserror::Error;

/// Default separation floor applied before any pair evaluation.
pub const DEFAULT_MIN_DISTANCE: f64 = 1e-6;
/// Default cap on the magnitude of a pair force.
pub const DEFAULT_MAX_FORCE: f64 = 1e12;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum PotentialError {
    #[error("Well depth (epsilon) must be positive and finite, got {0}")]
    InvalidEpsilon(f64),

    #[error("Length scale (sigma) must be positive and finite, got {0}")]
    InvalidSigma(f64),

    #[error(
        "Mie exponents must satisfy repulsive > attractive > 0, got {repulsive} and {attractive}"
    )]
    InvalidExponentPair { repulsive: f64, attractive: f64 },

    #[error("Soft-sphere exponent must be positive and finite, got {0}")]
    InvalidExponent(f64),

    #[error("Clamp minimum distance must be positive and finite, got {0}")]
    InvalidMinDistance(f64),

    #[error("Clamp force magnitude must be positive and finite, got {0}")]
    InvalidMaxForce(f64),
}

/// A pairwise interaction model.
///
/// Force magnitudes follow the convention that positive values are repulsive
/// along the separation direction. All variants are immutable once a
/// simulation starts and safe to share read-only across pair evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Potential {
    /// No interaction at all; free flight.
    Ideal,
    /// The 12-6 Lennard-Jones potential.
    LennardJones { epsilon: f64, sigma: f64 },
    /// The generalized (m, n) Mie potential; reduces to Lennard-Jones at
    /// exponents (12, 6).
    Mie {
        epsilon: f64,
        sigma: f64,
        repulsive_exponent: f64,
        attractive_exponent: f64,
    },
    /// A finite-range, purely repulsive power law that is identically zero
    /// beyond `sigma`.
    SoftSphere {
        epsilon: f64,
        sigma: f64,
        exponent: f64,
    },
}

impl Potential {
    /// Scalar force magnitude at separation `r > 0`.
    pub fn force_magnitude(&self, r: f64) -> f64 {
        match *self {
            Self::Ideal => 0.0,
            Self::LennardJones { epsilon, sigma } => {
                functions::lennard_jones_force(r, epsilon, sigma)
            }
            Self::Mie {
                epsilon,
                sigma,
                repulsive_exponent,
                attractive_exponent,
            } => functions::mie_force(r, epsilon, sigma, repulsive_exponent, attractive_exponent),
            Self::SoftSphere {
                epsilon,
                sigma,
                exponent,
            } => functions::soft_sphere_force(r, epsilon, sigma, exponent),
        }
    }

    /// Pair energy at separation `r > 0`.
    pub fn potential_energy(&self, r: f64) -> f64 {
        match *self {
            Self::Ideal => 0.0,
            Self::LennardJones { epsilon, sigma } => {
                functions::lennard_jones_energy(r, epsilon, sigma)
            }
            Self::Mie {
                epsilon,
                sigma,
                repulsive_exponent,
                attractive_exponent,
            } => functions::mie_energy(r, epsilon, sigma, repulsive_exponent, attractive_exponent),
            Self::SoftSphere {
                epsilon,
                sigma,
                exponent,
            } => functions::soft_sphere_energy(r, epsilon, sigma, exponent),
        }
    }

    /// Checks the coefficient set, failing fast before any step executes.
    pub fn validate(&self) -> Result<(), PotentialError> {
        let check_epsilon = |epsilon: f64| {
            if epsilon.is_finite() && epsilon > 0.0 {
                Ok(())
            } else {
                Err(PotentialError::InvalidEpsilon(epsilon))
            }
        };
        let check_sigma = |sigma: f64| {
            if sigma.is_finite() && sigma > 0.0 {
                Ok(())
            } else {
                Err(PotentialError::InvalidSigma(sigma))
            }
        };

        match *self {
            Self::Ideal => Ok(()),
            Self::LennardJones { epsilon, sigma } => {
                check_epsilon(epsilon)?;
                check_sigma(sigma)
            }
            Self::Mie {
                epsilon,
                sigma,
                repulsive_exponent,
                attractive_exponent,
            } => {
                check_epsilon(epsilon)?;
                check_sigma(sigma)?;
                let ordered = repulsive_exponent.is_finite()
                    && attractive_exponent.is_finite()
                    && repulsive_exponent > attractive_exponent
                    && attractive_exponent > 0.0;
                if ordered {
                    Ok(())
                } else {
                    Err(PotentialError::InvalidExponentPair {
                        repulsive: repulsive_exponent,
                        attractive: attractive_exponent,
                    })
                }
            }
            Self::SoftSphere {
                epsilon,
                sigma,
                exponent,
            } => {
                check_epsilon(epsilon)?;
                check_sigma(sigma)?;
                if exponent.is_finite() && exponent > 0.0 {
                    Ok(())
                } else {
                    Err(PotentialError::InvalidExponent(exponent))
                }
            }
        }
    }
}

/// The near-overlap safety policy.
///
/// Separations are floored at `min_distance` before evaluating force or
/// energy, and the resulting force magnitude is capped at `max_magnitude`,
/// so a near-overlapping pair produces a large but bounded kick instead of
/// blowing up the integrator.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ForceClamp {
    #[serde(default = "default_min_distance")]
    pub min_distance: f64,
    #[serde(default = "default_max_force")]
    pub max_magnitude: f64,
}

fn default_min_distance() -> f64 {
    DEFAULT_MIN_DISTANCE
}

fn default_max_force() -> f64 {
    DEFAULT_MAX_FORCE
}

impl Default for ForceClamp {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            max_magnitude: DEFAULT_MAX_FORCE,
        }
    }
}

impl ForceClamp {
    #[inline]
    pub fn floor_distance(&self, r: f64) -> f64 {
        r.max(self.min_distance)
    }

    #[inline]
    pub fn limit(&self, force: f64) -> f64 {
        force.clamp(-self.max_magnitude, self.max_magnitude)
    }

    pub fn validate(&self) -> Result<(), PotentialError> {
        if !(self.min_distance.is_finite() && self.min_distance > 0.0) {
            return Err(PotentialError::InvalidMinDistance(self.min_distance));
        }
        if !(self.max_magnitude.is_finite() && self.max_magnitude > 0.0) {
            return Err(PotentialError::InvalidMaxForce(self.max_magnitude));
        }
        Ok(())
    }
}
