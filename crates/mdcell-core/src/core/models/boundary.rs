use crate::core::utils::geometry::{self, Vector};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum BoundaryError {
    #[error("Box edge along axis {axis} must be positive and finite, got {value}")]
    InvalidEdge { axis: usize, value: f64 },

    #[error("Restitution coefficient must lie in (0, 1], got {0}")]
    InvalidRestitution(f64),

    #[error("Unsupported spatial dimension {0}; expected 1, 2, or 3")]
    UnsupportedDimension(usize),
}

/// How particles interact with the edges of the simulation box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryMode {
    /// Coordinates wrap modulo the box edge; separations use the
    /// minimum-image convention.
    Periodic,
    /// Particles bounce off the walls. The restitution coefficient scales the
    /// reflected velocity component (1.0 is a perfectly elastic wall).
    Reflective { restitution: f64 },
}

impl BoundaryMode {
    /// A perfectly elastic reflecting wall.
    pub fn reflective() -> Self {
        Self::Reflective { restitution: 1.0 }
    }
}

/// A `D`-dimensional axis-aligned box with a boundary mode.
///
/// The box spans `[0, length)` along each axis under periodic boundaries and
/// `[0, length]` under reflecting walls. Edge lengths are validated at
/// construction and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationBox<const D: usize> {
    lengths: Vector<D>,
    mode: BoundaryMode,
}

impl<const D: usize> SimulationBox<D> {
    /// Creates a box with per-axis edge lengths.
    ///
    /// # Errors
    ///
    /// Returns a `BoundaryError` if `D` is not 1, 2, or 3, if any edge is
    /// non-positive or non-finite, or if a reflective restitution coefficient
    /// lies outside `(0, 1]`.
    pub fn new(lengths: Vector<D>, mode: BoundaryMode) -> Result<Self, BoundaryError> {
        if !(1..=3).contains(&D) {
            return Err(BoundaryError::UnsupportedDimension(D));
        }
        for (axis, &value) in lengths.iter().enumerate() {
            if !(value.is_finite() && value > 0.0) {
                return Err(BoundaryError::InvalidEdge { axis, value });
            }
        }
        if let BoundaryMode::Reflective { restitution } = mode {
            if !(restitution.is_finite() && restitution > 0.0 && restitution <= 1.0) {
                return Err(BoundaryError::InvalidRestitution(restitution));
            }
        }
        Ok(Self { lengths, mode })
    }

    /// Creates a cubic box with the same edge length along every axis.
    pub fn cubic(length: f64, mode: BoundaryMode) -> Result<Self, BoundaryError> {
        Self::new(Vector::<D>::repeat(length), mode)
    }

    pub fn lengths(&self) -> &Vector<D> {
        &self.lengths
    }

    pub fn mode(&self) -> BoundaryMode {
        self.mode
    }

    /// The shortest box edge.
    pub fn min_edge(&self) -> f64 {
        self.lengths.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Returns `true` if the position lies inside the box for this boundary
    /// mode: `[0, L)` per axis when periodic, `[0, L]` when reflective.
    pub fn contains(&self, position: &Vector<D>) -> bool {
        (0..D).all(|axis| {
            let x = position[axis];
            let length = self.lengths[axis];
            match self.mode {
                BoundaryMode::Periodic => (0.0..length).contains(&x),
                BoundaryMode::Reflective { .. } => (0.0..=length).contains(&x),
            }
        })
    }

    /// Applies the minimum-image convention to a separation vector.
    ///
    /// Under reflecting walls there are no periodic images and the separation
    /// is returned unchanged.
    pub fn minimum_image(&self, dr: Vector<D>) -> Vector<D> {
        match self.mode {
            BoundaryMode::Periodic => geometry::minimum_image(dr, &self.lengths),
            BoundaryMode::Reflective { .. } => dr,
        }
    }

    /// Enforces the boundary condition on a single particle, in place.
    ///
    /// Periodic: each coordinate is wrapped into `[0, L)`. Reflective: a
    /// particle whose surface crossed a wall is clamped at the contact point
    /// and the offending velocity component is negated and scaled by the
    /// restitution coefficient.
    pub fn apply(&self, position: &mut Vector<D>, velocity: &mut Vector<D>, radius: f64) {
        match self.mode {
            BoundaryMode::Periodic => {
                for axis in 0..D {
                    position[axis] = position[axis].rem_euclid(self.lengths[axis]);
                }
            }
            BoundaryMode::Reflective { restitution } => {
                for axis in 0..D {
                    let length = self.lengths[axis];
                    if position[axis] - radius < 0.0 {
                        position[axis] = radius;
                        velocity[axis] = velocity[axis].abs() * restitution;
                    } else if position[axis] + radius > length {
                        position[axis] = length - radius;
                        velocity[axis] = -velocity[axis].abs() * restitution;
                    }
                }
            }
        }
    }
}
