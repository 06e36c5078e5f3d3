use super::boundary::{BoundaryMode, SimulationBox};
use crate::core::utils::geometry::{self, Vector};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum SystemError {
    #[error("A particle system must contain at least one particle")]
    Empty,

    #[error("Mismatched array lengths: {name} has {actual} entries, expected {expected}")]
    MismatchedLengths {
        name: &'static str,
        actual: usize,
        expected: usize,
    },

    #[error("Mass of particle {index} must be positive and finite, got {value}")]
    InvalidMass { index: usize, value: f64 },

    #[error("Radius of particle {index} must be non-negative and finite, got {value}")]
    InvalidRadius { index: usize, value: f64 },

    #[error("Velocity of particle {index} has a non-finite component")]
    NonFiniteVelocity { index: usize },

    #[error("Position of particle {index} lies outside the simulation box")]
    OutOfBox { index: usize },
}

/// The mutable particle ensemble of one simulation.
///
/// Holds positions, velocities, accelerations, and per-particle scalars for a
/// fixed population of `N` particles in a `D`-dimensional box. The population
/// is fixed after construction; every mutation during a run goes through the
/// integrator, which owns the system exclusively for the duration of a step.
///
/// All quantities are expressed in reduced units with `k_B = 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSystem<const D: usize> {
    positions: Vec<Vector<D>>,
    velocities: Vec<Vector<D>>,
    accelerations: Vec<Vector<D>>,
    masses: Vec<f64>,
    radii: Vec<f64>,
    bounds: SimulationBox<D>,
}

impl<const D: usize> ParticleSystem<D> {
    /// Creates a validated particle system.
    ///
    /// # Arguments
    ///
    /// * `positions` - One `D`-dimensional position per particle, inside the box.
    /// * `velocities` - One velocity per particle, all components finite.
    /// * `masses` - Per-particle masses, positive and finite.
    /// * `radii` - Per-particle radii, non-negative and finite.
    /// * `bounds` - The box geometry and boundary mode.
    ///
    /// # Errors
    ///
    /// Returns a `SystemError` describing the first violated invariant. All
    /// checks run before any step executes, so a constructed system is safe
    /// to integrate.
    pub fn new(
        positions: Vec<Vector<D>>,
        velocities: Vec<Vector<D>>,
        masses: Vec<f64>,
        radii: Vec<f64>,
        bounds: SimulationBox<D>,
    ) -> Result<Self, SystemError> {
        let n = positions.len();
        if n == 0 {
            return Err(SystemError::Empty);
        }
        for (name, actual) in [
            ("velocities", velocities.len()),
            ("masses", masses.len()),
            ("radii", radii.len()),
        ] {
            if actual != n {
                return Err(SystemError::MismatchedLengths {
                    name,
                    actual,
                    expected: n,
                });
            }
        }
        for (index, &value) in masses.iter().enumerate() {
            if !(value.is_finite() && value > 0.0) {
                return Err(SystemError::InvalidMass { index, value });
            }
        }
        for (index, &value) in radii.iter().enumerate() {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SystemError::InvalidRadius { index, value });
            }
        }
        for (index, velocity) in velocities.iter().enumerate() {
            if !geometry::is_finite(velocity) {
                return Err(SystemError::NonFiniteVelocity { index });
            }
        }
        for (index, position) in positions.iter().enumerate() {
            if !geometry::is_finite(position) || !bounds.contains(position) {
                return Err(SystemError::OutOfBox { index });
            }
        }

        let accelerations = vec![Vector::<D>::zeros(); n];
        Ok(Self {
            positions,
            velocities,
            accelerations,
            masses,
            radii,
            bounds,
        })
    }

    /// Creates a system in which every particle shares one mass and radius.
    pub fn with_uniform_particles(
        positions: Vec<Vector<D>>,
        velocities: Vec<Vector<D>>,
        mass: f64,
        radius: f64,
        bounds: SimulationBox<D>,
    ) -> Result<Self, SystemError> {
        let n = positions.len();
        Self::new(positions, velocities, vec![mass; n], vec![radius; n], bounds)
    }

    /// The number of particles, fixed after construction.
    pub fn num_particles(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[Vector<D>] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vector<D>] {
        &self.velocities
    }

    pub fn accelerations(&self) -> &[Vector<D>] {
        &self.accelerations
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    pub fn bounds(&self) -> &SimulationBox<D> {
        &self.bounds
    }

    pub(crate) fn positions_mut(&mut self) -> &mut [Vector<D>] {
        &mut self.positions
    }

    pub(crate) fn velocities_mut(&mut self) -> &mut [Vector<D>] {
        &mut self.velocities
    }

    pub(crate) fn accelerations_mut(&mut self) -> &mut [Vector<D>] {
        &mut self.accelerations
    }

    /// Runs the boundary-enforcement pass over every particle.
    ///
    /// After this call the box invariant holds: every coordinate lies in
    /// `[0, L)` (periodic) or `[0, L]` (reflective, with no outward velocity
    /// at a wall).
    pub(crate) fn apply_boundaries(&mut self) {
        let bounds = self.bounds;
        for index in 0..self.positions.len() {
            bounds.apply(
                &mut self.positions[index],
                &mut self.velocities[index],
                self.radii[index],
            );
        }
    }

    /// Total kinetic energy, `Σ ½ m v²`.
    pub fn kinetic_energy(&self) -> f64 {
        self.velocities
            .iter()
            .zip(&self.masses)
            .map(|(v, &m)| 0.5 * m * v.norm_squared())
            .sum()
    }

    /// Instantaneous temperature from equipartition, `2·KE / (D·N)`.
    pub fn temperature(&self) -> f64 {
        2.0 * self.kinetic_energy() / (D as f64 * self.num_particles() as f64)
    }

    /// Total momentum, `Σ m v`.
    pub fn total_momentum(&self) -> Vector<D> {
        self.velocities
            .iter()
            .zip(&self.masses)
            .fold(Vector::<D>::zeros(), |acc, (v, &m)| acc + v * m)
    }

    /// Mass-weighted centre of mass.
    ///
    /// Returns `None` under periodic boundaries, where the centre of mass of
    /// wrapped coordinates is not meaningful.
    pub fn center_of_mass(&self) -> Option<Vector<D>> {
        if matches!(self.bounds.mode(), BoundaryMode::Periodic) {
            return None;
        }
        let total_mass: f64 = self.masses.iter().sum();
        let weighted = self
            .positions
            .iter()
            .zip(&self.masses)
            .fold(Vector::<D>::zeros(), |acc, (x, &m)| acc + x * m);
        Some(weighted / total_mass)
    }

    /// Radius of gyration: the root-mean-squared distance to the centre of
    /// mass. `None` whenever the centre of mass is unavailable.
    pub fn radius_of_gyration(&self) -> Option<f64> {
        let com = self.center_of_mass()?;
        let n = self.num_particles() as f64;
        let squared_sum: f64 = self
            .positions
            .iter()
            .map(|x| (x - com).norm_squared())
            .sum();
        Some((squared_sum / n).sqrt())
    }

    /// Rescales every velocity so the instantaneous temperature matches the
    /// target. A system at zero temperature is left unchanged.
    pub fn rescale_to_temperature(&mut self, target: f64) {
        let current = self.temperature();
        if current > 0.0 {
            let factor = (target / current).sqrt();
            for velocity in &mut self.velocities {
                *velocity *= factor;
            }
        }
    }
}
