use crate::core::models::system::ParticleSystem;
use crate::core::potentials::Potential;
use crate::engine::config::{SimulationConfig, Thermostat};
use crate::engine::error::EngineError;
use crate::engine::forces::ForceEvaluator;
use crate::engine::integrator::VelocityVerlet;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::snapshot::{Snapshot, SnapshotSink};
use crate::engine::stability::StabilityMonitor;
use crate::engine::state::{RunSummary, SimulationClock};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{info, instrument};

/// Runs a complete simulation.
///
/// For every step in `0..config.total_steps`: advance the velocity-Verlet
/// integrator, verify numerical stability, apply the optional thermostat,
/// and emit an owned [`Snapshot`] to the sink. The cancellation flag is
/// polled once per step boundary; a cancelled run exits cleanly with the
/// system at the last fully completed step.
///
/// # Errors
///
/// - [`EngineError::Potential`] if the potential or force clamp is malformed
///   (checked before any step executes).
/// - [`EngineError::NumericalInstability`] if a step produces non-finite
///   state or a displacement beyond the sanity bound.
/// - [`EngineError::Sink`] if the sink rejects a snapshot; the sink call is
///   never retried.
#[instrument(skip_all, name = "simulation_run")]
pub fn run<const D: usize>(
    system: &mut ParticleSystem<D>,
    potential: &Potential,
    config: &SimulationConfig,
    sink: &mut impl SnapshotSink<D>,
    reporter: &ProgressReporter,
    cancel: &AtomicBool,
) -> Result<RunSummary, EngineError> {
    let evaluator = ForceEvaluator::new(*potential, config.force_clamp)?;
    let displacement_bound = config
        .max_displacement
        .unwrap_or_else(|| 0.5 * system.bounds().min_edge());
    let monitor = StabilityMonitor::new(displacement_bound);
    let integrator = VelocityVerlet;
    let mut clock = SimulationClock::new(config.total_steps, config.dt);

    let started = Instant::now();
    info!(
        particles = system.num_particles(),
        total_steps = config.total_steps,
        dt = config.dt,
        "Starting simulation run."
    );
    reporter.report(Progress::RunStart {
        total_steps: config.total_steps,
    });

    integrator.seed_accelerations(system, &evaluator);

    let mut cancelled = false;
    while !clock.is_finished() {
        if cancel.load(Ordering::Relaxed) {
            cancelled = true;
            info!(step = clock.step(), "Cancellation requested; stopping.");
            break;
        }

        let step = clock.step();
        let report = integrator.advance(system, &evaluator, clock.dt());
        monitor.check(step, system, &report)?;

        if let Some(Thermostat::VelocityRescale { target_temperature }) = config.thermostat {
            system.rescale_to_temperature(target_temperature);
        }

        let potential_energy = evaluator.total_potential_energy(system);
        let time = (step + 1) as f64 * clock.dt();
        sink.emit(Snapshot::capture(system, step, time, potential_energy))
            .map_err(|source| EngineError::Sink { step, source })?;

        clock.advance();
        reporter.report(Progress::StepComplete {
            step: clock.step(),
            total_steps: clock.total_steps(),
            elapsed: started.elapsed(),
        });
    }

    reporter.report(Progress::RunFinish);
    let summary = RunSummary {
        steps_completed: clock.step(),
        elapsed: started.elapsed(),
        cancelled,
    };
    info!(
        steps_completed = summary.steps_completed,
        cancelled = summary.cancelled,
        "Simulation run finished."
    );
    Ok(summary)
}
