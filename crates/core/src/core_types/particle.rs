//! Ember particle record.
//!
//! A particle is plain data: the particle system owns the collection and
//! free functions drive the physics (see [`crate::particles`]). There is
//! exactly one particle shape, so no trait indirection is needed.

use serde::{Deserialize, Serialize};

use crate::core_types::vec2::Vec2;

/// A single ember rising from a burning cell.
///
/// Created by [`crate::ParticleSystem::spawn_for`], advanced once per tick,
/// and removed when `life` reaches zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    /// World position.
    pub position: Vec2,
    /// Velocity in world units per tick.
    pub velocity: Vec2,
    /// Remaining lifetime in ticks; decremented on every advance.
    pub life: u32,
    /// RGB color drawn from the ember palette at spawn.
    pub color: [u8; 3],
}

/// Advance one particle by one tick: couple velocity to the wind,
/// integrate position, and age the particle.
///
/// `coupling` scales how strongly the wind accelerates the ember.
pub fn advance(particle: &mut Particle, wind: Vec2, coupling: f32) {
    particle.velocity += wind * coupling;
    particle.position += particle.velocity;
    particle.life = particle.life.saturating_sub(1);
}
