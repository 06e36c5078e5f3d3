//! # Core Module
//!
//! This module provides the fundamental building blocks for molecular dynamics
//! simulation in mdcell, serving as the stateless computational foundation of
//! the library.
//!
//! ## Overview
//!
//! The core module implements the essential data structures and pure functions
//! required for integrating Newtonian dynamics of a pairwise-interacting particle
//! ensemble. It provides a complete framework for representing the simulation
//! state, evaluating interaction models, and constructing initial conditions.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! aspects of the simulation foundation:
//!
//! - **State Representation** ([`models`]) - The particle ensemble, box geometry,
//!   and boundary conditions
//! - **Interaction Models** ([`potentials`]) - Pairwise potential variants and
//!   near-overlap safety policies
//! - **Geometry** ([`utils`]) - Fixed-dimension vector math and the
//!   minimum-image convention
//!
//! ## Key Capabilities
//!
//! - **Dimension-generic state** over 1-, 2-, and 3-dimensional boxes with
//!   stack-allocated vectors
//! - **Closed potential variant set** (Lennard-Jones, Mie, soft-sphere) behind a
//!   two-operation capability contract
//! - **Fail-fast validation** of every externally supplied quantity before a
//!   single step executes
//! - **Reproducible initial conditions** from seeded lattice and
//!   Maxwell–Boltzmann generators

pub mod models;
pub mod potentials;
pub mod utils;
