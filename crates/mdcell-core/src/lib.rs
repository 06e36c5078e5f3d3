//! # mdcell Core Library
//!
//! A high-performance library for molecular dynamics simulation of short-range
//! pairwise potentials in periodic and reflecting boxes.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`ParticleSystem`,
//!   `SimulationBox`), pure mathematical representations of the interaction models
//!   (`potentials`), and initial-condition builders.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer drives the numerical
//!   integration. It includes the pairwise `ForceEvaluator`, the velocity-Verlet
//!   integrator, per-step stability monitoring, and the snapshot/progress seams
//!   through which external collaborators observe a running simulation.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to execute a complete simulation run,
//!   providing a simple and powerful entry point for end-users of the library.

pub mod core;
pub mod engine;
pub mod workflows;
