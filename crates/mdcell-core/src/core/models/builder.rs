use super::boundary::{BoundaryError, BoundaryMode, SimulationBox};
use super::system::{ParticleSystem, SystemError};
use crate::core::utils::geometry::Vector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use std::f64::consts::PI;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Particle count must be at least 1")]
    InvalidParticleCount,

    #[error("Temperature must be non-negative and finite, got {0}")]
    InvalidTemperature(f64),

    #[error("Mass must be positive and finite, got {0}")]
    InvalidMass(f64),

    #[error("Radius must be non-negative and finite, got {0}")]
    InvalidRadius(f64),

    #[error("Volume fraction must lie in (0, 1), got {0}")]
    InvalidVolumeFraction(f64),

    #[error("A volume fraction requires a positive particle radius")]
    VolumeFractionWithoutRadius,

    #[error("Specify either an explicit box length or a volume fraction, not both")]
    OverspecifiedBox,

    #[error(transparent)]
    Boundary(#[from] BoundaryError),

    #[error(transparent)]
    System(#[from] SystemError),
}

/// Builds a validated [`ParticleSystem`] from a simple-cubic lattice with
/// Maxwell–Boltzmann velocities.
///
/// This is a convenience for embedders and tests; the engine accepts any
/// fully-populated system regardless of how it was constructed. The box edge
/// can be given explicitly or derived from a particle-volume fraction, and a
/// fixed seed makes the generated velocities reproducible.
#[derive(Debug, Clone)]
pub struct SystemBuilder<const D: usize> {
    num_particles: Option<usize>,
    box_length: Option<f64>,
    volume_fraction: Option<f64>,
    boundary: BoundaryMode,
    temperature: f64,
    mass: f64,
    radius: f64,
    seed: Option<u64>,
}

impl<const D: usize> Default for SystemBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize> SystemBuilder<D> {
    pub fn new() -> Self {
        Self {
            num_particles: None,
            box_length: None,
            volume_fraction: None,
            boundary: BoundaryMode::Periodic,
            temperature: 0.0,
            mass: 1.0,
            radius: 0.5,
            seed: None,
        }
    }

    pub fn num_particles(mut self, n: usize) -> Self {
        self.num_particles = Some(n);
        self
    }

    pub fn box_length(mut self, length: f64) -> Self {
        self.box_length = Some(length);
        self
    }

    /// Derives the box edge from the fraction of the box volume occupied by
    /// the particles themselves.
    pub fn volume_fraction(mut self, fraction: f64) -> Self {
        self.volume_fraction = Some(fraction);
        self
    }

    pub fn boundary(mut self, mode: BoundaryMode) -> Self {
        self.boundary = mode;
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration and assembles the system.
    ///
    /// Positions fill a simple-cubic lattice centred in each cell; velocities
    /// are drawn per component from the Maxwell–Boltzmann distribution at the
    /// requested temperature, drift-corrected to zero net momentum, and
    /// rescaled so the instantaneous temperature matches the target exactly.
    pub fn build(self) -> Result<ParticleSystem<D>, BuildError> {
        let n = self
            .num_particles
            .ok_or(BuildError::MissingParameter("num_particles"))?;
        if n == 0 {
            return Err(BuildError::InvalidParticleCount);
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(BuildError::InvalidMass(self.mass));
        }
        if !(self.radius.is_finite() && self.radius >= 0.0) {
            return Err(BuildError::InvalidRadius(self.radius));
        }
        if !(self.temperature.is_finite() && self.temperature >= 0.0) {
            return Err(BuildError::InvalidTemperature(self.temperature));
        }

        let length = match (self.box_length, self.volume_fraction) {
            (Some(_), Some(_)) => return Err(BuildError::OverspecifiedBox),
            (Some(length), None) => length,
            (None, Some(fraction)) => {
                if !(fraction.is_finite() && fraction > 0.0 && fraction < 1.0) {
                    return Err(BuildError::InvalidVolumeFraction(fraction));
                }
                if self.radius <= 0.0 {
                    return Err(BuildError::VolumeFractionWithoutRadius);
                }
                (n as f64 * sphere_volume::<D>(self.radius) / fraction).powf(1.0 / D as f64)
            }
            (None, None) => {
                return Err(BuildError::MissingParameter(
                    "box_length or volume_fraction",
                ));
            }
        };
        let bounds = SimulationBox::<D>::cubic(length, self.boundary)?;

        let positions = lattice_positions::<D>(n, length);
        let spacing = length / cells_per_side::<D>(n) as f64;
        if spacing < 2.0 * self.radius {
            tracing::warn!(
                spacing,
                radius = self.radius,
                "Lattice spacing is below one particle diameter; neighbours overlap."
            );
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let velocities = maxwell_boltzmann::<D>(n, self.temperature, self.mass, &mut rng)?;

        let mut system =
            ParticleSystem::with_uniform_particles(positions, velocities, self.mass, self.radius, bounds)?;
        if self.temperature > 0.0 {
            system.rescale_to_temperature(self.temperature);
        }
        Ok(system)
    }
}

fn cells_per_side<const D: usize>(n: usize) -> usize {
    // `powf` can land a hair off an exact root in either direction; round,
    // then bump until the grid actually fits.
    let mut cells = (n as f64).powf(1.0 / D as f64).round().max(1.0) as usize;
    while cells.pow(D as u32) < n {
        cells += 1;
    }
    cells
}

fn lattice_positions<const D: usize>(n: usize, length: f64) -> Vec<Vector<D>> {
    let cells = cells_per_side::<D>(n);
    let spacing = length / cells as f64;

    (0..n)
        .map(|site| {
            let mut position = Vector::<D>::zeros();
            let mut remainder = site;
            for axis in 0..D {
                position[axis] = (remainder % cells) as f64 * spacing + 0.5 * spacing;
                remainder /= cells;
            }
            position
        })
        .collect()
}

fn maxwell_boltzmann<const D: usize>(
    n: usize,
    temperature: f64,
    mass: f64,
    rng: &mut impl Rng,
) -> Result<Vec<Vector<D>>, BuildError> {
    if temperature == 0.0 {
        return Ok(vec![Vector::<D>::zeros(); n]);
    }

    let sigma = (temperature / mass).sqrt();
    let normal =
        Normal::new(0.0, sigma).map_err(|_| BuildError::InvalidTemperature(temperature))?;
    let mut velocities: Vec<Vector<D>> = (0..n)
        .map(|_| Vector::<D>::from_fn(|_, _| rng.sample(normal)))
        .collect();

    // Remove centre-of-mass drift so momentum-conservation holds from step 0.
    if n > 1 {
        let drift = velocities
            .iter()
            .fold(Vector::<D>::zeros(), |acc, v| acc + v)
            / n as f64;
        for velocity in &mut velocities {
            *velocity -= drift;
        }
    }
    Ok(velocities)
}

fn sphere_volume<const D: usize>(radius: f64) -> f64 {
    match D {
        1 => 2.0 * radius,
        2 => PI * radius.powi(2),
        _ => 4.0 / 3.0 * PI * radius.powi(3),
    }
}
