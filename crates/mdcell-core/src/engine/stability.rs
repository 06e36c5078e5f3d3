use super::error::EngineError;
use super::integrator::StepReport;
use crate::core::models::system::ParticleSystem;
use crate::core::utils::geometry;
use tracing::error;

/// Watches each completed step for signs of a blown-up integration.
///
/// Instability is detected, not prevented: the engine never tunes `dt`.
/// A tripped check halts the run with the state at the last completed step
/// so the caller can restart with a smaller time step.
pub(crate) struct StabilityMonitor {
    max_displacement: f64,
}

impl StabilityMonitor {
    pub fn new(max_displacement: f64) -> Self {
        Self { max_displacement }
    }

    pub fn check<const D: usize>(
        &self,
        step: u64,
        system: &ParticleSystem<D>,
        report: &StepReport,
    ) -> Result<(), EngineError> {
        if !report.max_displacement.is_finite() || report.max_displacement > self.max_displacement {
            let reason = format!(
                "single-step displacement {:.3e} exceeded the sanity bound {:.3e}",
                report.max_displacement, self.max_displacement
            );
            error!(step, %reason, "Halting unstable simulation.");
            return Err(EngineError::NumericalInstability { step, reason });
        }

        for (index, position) in system.positions().iter().enumerate() {
            if !geometry::is_finite(position) {
                let reason = format!("position of particle {index} became non-finite");
                error!(step, %reason, "Halting unstable simulation.");
                return Err(EngineError::NumericalInstability { step, reason });
            }
        }
        for (index, velocity) in system.velocities().iter().enumerate() {
            if !geometry::is_finite(velocity) {
                let reason = format!("velocity of particle {index} became non-finite");
                error!(step, %reason, "Halting unstable simulation.");
                return Err(EngineError::NumericalInstability { step, reason });
            }
        }
        Ok(())
    }
}
