//! # Workflows Module
//!
//! This module provides the high-level entry point that orchestrates a
//! complete simulation run.
//!
//! ## Overview
//!
//! Workflows are the top-level API of mdcell. They tie the stateless `core`
//! foundations and the stateful `engine` machinery together: validating the
//! configuration, seeding the integrator, driving the step loop, and routing
//! per-step state to the external snapshot sink.
//!
//! ## Key Capabilities
//!
//! - **End-to-end simulation** from a validated initial state to a run summary
//! - **Cooperative cancellation** checked once per step boundary, never
//!   mid-step
//! - **Typed failure reporting** distinguishing configuration mistakes from
//!   numerical instability and sink errors
//! - **Progress monitoring** through a caller-supplied callback

pub mod simulate;
