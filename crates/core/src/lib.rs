//! Gridfire Core Library
//!
//! A stochastic forest-fire simulation over a 2D vegetation grid.
//! Fire spreads between neighboring cells with a probability shaped by
//! per-cell humidity, rain, and local fire density, while short-lived
//! ember particles rise from burning cells and drift with the wind.
//!
//! The crate is a pure engine: no windowing, rendering, or input polling.
//! A host feeds it [`Command`]s and reads the immutable [`Snapshot`]
//! produced once per tick.

// Core types and utilities
pub mod core_types;

// Engine modules
pub mod config;
pub mod grid;
pub mod humidity;
pub mod particles;
pub mod random;
pub mod simulation;
pub mod wind;

// Re-export core types
pub use core_types::{CellState, Particle, Vec2};

// Re-export engine types
pub use config::{ConfigError, SimulationConfig};
pub use grid::{FireParams, Grid};
pub use humidity::HumidityField;
pub use particles::ParticleSystem;
pub use random::{RandomSource, Scripted};
pub use simulation::{Command, ParticleView, Simulation, Snapshot};
pub use wind::{WindField, WindMode};
