//! Core types and utilities

pub mod cell;
pub mod noise;
pub mod particle;
pub mod vec2;

pub use cell::CellState;
pub use particle::Particle;
pub use vec2::Vec2;
