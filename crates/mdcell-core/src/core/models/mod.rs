//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent the
//! mutable state of a molecular dynamics simulation.
//!
//! ## Overview
//!
//! The models module defines the particle ensemble and the box geometry it
//! lives in. These models are designed to:
//!
//! - **Represent simulation state** - Positions, velocities, accelerations, and
//!   per-particle scalars with a fixed population
//! - **Enforce invariants at construction** - Every externally supplied ensemble
//!   is validated before the first step executes
//! - **Support both boundary modes** - Periodic wrapping and reflecting walls
//!   with a configurable restitution coefficient
//!
//! ## Key Components
//!
//! - [`boundary`] - Box geometry, boundary modes, and the per-particle
//!   enforcement pass
//! - [`system`] - The particle ensemble with derived observables (kinetic
//!   energy, temperature, momentum)
//! - [`builder`] - Lattice and Maxwell–Boltzmann initial-condition generation

pub mod boundary;
pub mod builder;
pub mod system;
