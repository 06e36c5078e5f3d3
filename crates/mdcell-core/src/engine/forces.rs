use crate::core::models::system::ParticleSystem;
use crate::core::potentials::{ForceClamp, Potential, PotentialError};
use crate::core::utils::geometry::{self, Vector};
use itertools::Itertools;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Number of consecutive `i` rows handled by one partial accumulator under
/// the `parallel` feature. Fixed so the merge order, and therefore the
/// floating-point summation order, does not depend on thread scheduling.
#[cfg(feature = "parallel")]
const ROW_CHUNK: usize = 32;

/// Computes net pairwise forces and the total pair energy for a system.
///
/// Every unordered pair `(i, j)` with `i < j` is visited exactly once, in
/// lexicographic order: the separation is taken under the box's image
/// convention, floored by the clamp, turned into a scalar force magnitude by
/// the potential, and accumulated onto `i` and (negated) onto `j`. The input
/// system is never mutated, and the pair order is fixed so identical inputs
/// produce bit-identical force arrays across runs.
#[derive(Debug, Clone, Copy)]
pub struct ForceEvaluator {
    potential: Potential,
    clamp: ForceClamp,
}

impl ForceEvaluator {
    /// Validates the potential and clamp, failing fast before any step runs.
    pub fn new(potential: Potential, clamp: ForceClamp) -> Result<Self, PotentialError> {
        potential.validate()?;
        clamp.validate()?;
        Ok(Self { potential, clamp })
    }

    pub fn potential(&self) -> &Potential {
        &self.potential
    }

    pub fn clamp(&self) -> &ForceClamp {
        &self.clamp
    }

    /// The net force on every particle, one vector per particle.
    pub fn forces<const D: usize>(&self, system: &ParticleSystem<D>) -> Vec<Vector<D>> {
        #[cfg(not(feature = "parallel"))]
        {
            self.forces_sequential(system)
        }
        #[cfg(feature = "parallel")]
        {
            self.forces_chunked(system)
        }
    }

    /// Total potential energy, summed over the same pair enumeration as the
    /// forces and evaluated at the clamp-floored separations.
    pub fn total_potential_energy<const D: usize>(&self, system: &ParticleSystem<D>) -> f64 {
        let positions = system.positions();
        (0..positions.len())
            .tuple_combinations()
            .map(|(i, j)| {
                let (_, dist) = self.pair_geometry(system, i, j);
                self.potential.potential_energy(dist)
            })
            .sum()
    }

    /// The clamped force exerted on `i` by `j`, directed along their floored
    /// unit separation.
    pub fn pair_force<const D: usize>(
        &self,
        system: &ParticleSystem<D>,
        i: usize,
        j: usize,
    ) -> Vector<D> {
        let (unit, dist) = self.pair_geometry(system, i, j);
        unit * self.clamp.limit(self.potential.force_magnitude(dist))
    }

    fn pair_geometry<const D: usize>(
        &self,
        system: &ParticleSystem<D>,
        i: usize,
        j: usize,
    ) -> (Vector<D>, f64) {
        let dr = system
            .bounds()
            .minimum_image(system.positions()[i] - system.positions()[j]);
        geometry::unit_and_distance(&dr, self.clamp.min_distance)
    }

    #[cfg(not(feature = "parallel"))]
    fn forces_sequential<const D: usize>(&self, system: &ParticleSystem<D>) -> Vec<Vector<D>> {
        let n = system.num_particles();
        let mut forces = vec![Vector::<D>::zeros(); n];
        for (i, j) in (0..n).tuple_combinations() {
            let force = self.pair_force(system, i, j);
            forces[i] += force;
            forces[j] -= force;
        }
        forces
    }

    #[cfg(feature = "parallel")]
    fn forces_chunked<const D: usize>(&self, system: &ParticleSystem<D>) -> Vec<Vector<D>> {
        let n = system.num_particles();
        let row_starts: Vec<usize> = (0..n).step_by(ROW_CHUNK).collect();

        // One full-length partial accumulator per row chunk; `collect`
        // preserves chunk order, and the sequential merge below fixes the
        // summation order independently of thread scheduling.
        let partials: Vec<Vec<Vector<D>>> = row_starts
            .par_iter()
            .map(|&start| {
                let mut local = vec![Vector::<D>::zeros(); n];
                for i in start..(start + ROW_CHUNK).min(n) {
                    for j in (i + 1)..n {
                        let force = self.pair_force(system, i, j);
                        local[i] += force;
                        local[j] -= force;
                    }
                }
                local
            })
            .collect();

        let mut forces = vec![Vector::<D>::zeros(); n];
        for partial in partials {
            for (total, contribution) in forces.iter_mut().zip(partial) {
                *total += contribution;
            }
        }
        forces
    }
}
