use crate::core::models::system::ParticleSystem;
use crate::core::utils::geometry::Vector;

/// Errors a snapshot sink may surface; opaque to the engine, which propagates
/// them without retrying.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// An immutable, fully-owned copy of the simulation state after one step.
///
/// The engine produces one snapshot per completed step and transfers it to
/// the sink; it retains no reference afterwards, so the sink may persist the
/// data asynchronously without synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<const D: usize> {
    /// 0-based index of the completed step; increases by exactly 1 between
    /// consecutive emissions.
    pub step: u64,
    /// Simulated time after the step, `(step + 1) · dt`.
    pub time: f64,
    pub positions: Vec<Vector<D>>,
    pub velocities: Vec<Vector<D>>,
    pub kinetic_energy: f64,
    pub potential_energy: f64,
    pub temperature: f64,
}

impl<const D: usize> Snapshot<D> {
    /// Copies the observable state out of a system.
    pub fn capture(
        system: &ParticleSystem<D>,
        step: u64,
        time: f64,
        potential_energy: f64,
    ) -> Self {
        Self {
            step,
            time,
            positions: system.positions().to_vec(),
            velocities: system.velocities().to_vec(),
            kinetic_energy: system.kinetic_energy(),
            potential_energy,
            temperature: system.temperature(),
        }
    }

    /// Total energy, kinetic plus potential.
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy + self.potential_energy
    }
}

/// The persistence seam between the engine and the outside world.
///
/// `emit` is called exactly once per completed step. A returned error halts
/// the run with the system state left at the last completed step.
pub trait SnapshotSink<const D: usize> {
    fn emit(&mut self, snapshot: Snapshot<D>) -> Result<(), SinkError>;
}

/// A sink that collects snapshots in memory, for tests and short runs.
#[derive(Debug, Default)]
pub struct MemorySink<const D: usize> {
    snapshots: Vec<Snapshot<D>>,
}

impl<const D: usize> MemorySink<D> {
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    pub fn snapshots(&self) -> &[Snapshot<D>] {
        &self.snapshots
    }

    pub fn into_snapshots(self) -> Vec<Snapshot<D>> {
        self.snapshots
    }
}

impl<const D: usize> SnapshotSink<D> for MemorySink<D> {
    fn emit(&mut self, snapshot: Snapshot<D>) -> Result<(), SinkError> {
        self.snapshots.push(snapshot);
        Ok(())
    }
}
