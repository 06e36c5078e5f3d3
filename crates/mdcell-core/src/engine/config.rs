use crate::core::potentials::{ForceClamp, PotentialError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("Displacement bound must be positive and finite, got {0}")]
    InvalidDisplacementBound(f64),

    #[error("Thermostat target temperature must be non-negative and finite, got {0}")]
    InvalidTargetTemperature(f64),

    #[error("Invalid force clamp: {source}")]
    Clamp {
        #[from]
        source: PotentialError,
    },
}

/// An optional per-step velocity intervention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Thermostat {
    /// Rescale all velocities once per step so the instantaneous temperature
    /// matches the target.
    VelocityRescale { target_temperature: f64 },
}

/// Validated parameters for one simulation run.
///
/// The time step is a fixed input: the engine detects instability rather than
/// auto-tuning `dt`. When no displacement bound is given the driver derives
/// one from the box (half the smallest edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub dt: f64,
    pub total_steps: u64,
    pub force_clamp: ForceClamp,
    pub max_displacement: Option<f64>,
    pub thermostat: Option<Thermostat>,
}

#[derive(Debug, Default)]
pub struct SimulationConfigBuilder {
    dt: Option<f64>,
    total_steps: Option<u64>,
    force_clamp: Option<ForceClamp>,
    max_displacement: Option<f64>,
    thermostat: Option<Thermostat>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = Some(dt);
        self
    }

    pub fn total_steps(mut self, steps: u64) -> Self {
        self.total_steps = Some(steps);
        self
    }

    pub fn force_clamp(mut self, clamp: ForceClamp) -> Self {
        self.force_clamp = Some(clamp);
        self
    }

    pub fn max_displacement(mut self, bound: f64) -> Self {
        self.max_displacement = Some(bound);
        self
    }

    pub fn thermostat(mut self, thermostat: Thermostat) -> Self {
        self.thermostat = Some(thermostat);
        self
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let dt = self.dt.ok_or(ConfigError::MissingParameter("dt"))?;
        if !(dt.is_finite() && dt > 0.0) {
            return Err(ConfigError::InvalidTimeStep(dt));
        }
        let total_steps = self
            .total_steps
            .ok_or(ConfigError::MissingParameter("total_steps"))?;
        if let Some(bound) = self.max_displacement {
            if !(bound.is_finite() && bound > 0.0) {
                return Err(ConfigError::InvalidDisplacementBound(bound));
            }
        }
        if let Some(Thermostat::VelocityRescale {
            target_temperature,
        }) = self.thermostat
        {
            if !(target_temperature.is_finite() && target_temperature >= 0.0) {
                return Err(ConfigError::InvalidTargetTemperature(target_temperature));
            }
        }
        let force_clamp = self.force_clamp.unwrap_or_default();
        force_clamp.validate()?;

        Ok(SimulationConfig {
            dt,
            total_steps,
            force_clamp,
            max_displacement: self.max_displacement,
            thermostat: self.thermostat,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_dt_and_total_steps() {
        assert_eq!(
            SimulationConfigBuilder::new().total_steps(10).build(),
            Err(ConfigError::MissingParameter("dt"))
        );
        assert_eq!(
            SimulationConfigBuilder::new().dt(0.01).build(),
            Err(ConfigError::MissingParameter("total_steps"))
        );
    }

    #[test]
    fn build_rejects_non_positive_dt() {
        let result = SimulationConfigBuilder::new()
            .dt(0.0)
            .total_steps(10)
            .build();
        assert_eq!(result, Err(ConfigError::InvalidTimeStep(0.0)));
    }

    #[test]
    fn build_rejects_non_finite_dt() {
        let result = SimulationConfigBuilder::new()
            .dt(f64::NAN)
            .total_steps(10)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidTimeStep(_))));
    }

    #[test]
    fn build_rejects_non_positive_displacement_bound() {
        let result = SimulationConfigBuilder::new()
            .dt(0.01)
            .total_steps(10)
            .max_displacement(-1.0)
            .build();
        assert_eq!(result, Err(ConfigError::InvalidDisplacementBound(-1.0)));
    }

    #[test]
    fn build_rejects_negative_thermostat_target() {
        let result = SimulationConfigBuilder::new()
            .dt(0.01)
            .total_steps(10)
            .thermostat(Thermostat::VelocityRescale {
                target_temperature: -1.0,
            })
            .build();
        assert_eq!(result, Err(ConfigError::InvalidTargetTemperature(-1.0)));
    }

    #[test]
    fn build_rejects_an_invalid_clamp() {
        let result = SimulationConfigBuilder::new()
            .dt(0.01)
            .total_steps(10)
            .force_clamp(crate::core::potentials::ForceClamp {
                min_distance: -1.0,
                max_magnitude: 1e12,
            })
            .build();
        assert!(matches!(result, Err(ConfigError::Clamp { .. })));
    }

    #[test]
    fn build_applies_defaults_for_optional_parameters() {
        let config = SimulationConfigBuilder::new()
            .dt(0.005)
            .total_steps(100)
            .build()
            .unwrap();

        assert_eq!(config.dt, 0.005);
        assert_eq!(config.total_steps, 100);
        assert_eq!(config.force_clamp, crate::core::potentials::ForceClamp::default());
        assert!(config.max_displacement.is_none());
        assert!(config.thermostat.is_none());
    }

    #[test]
    fn build_accepts_zero_total_steps() {
        let config = SimulationConfigBuilder::new()
            .dt(0.005)
            .total_steps(0)
            .build()
            .unwrap();
        assert_eq!(config.total_steps, 0);
    }
}
