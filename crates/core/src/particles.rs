//! Ember particle lifecycle.
//!
//! Burning cells shed short-lived embers that rise, drift with the wind,
//! and fade out. The system owns the live set exclusively: spawn is
//! capped (refused, not queued, beyond the cap), advance applies the
//! wind coupling to every particle, and prune drops the expired ones.

use tracing::debug;

use crate::core_types::particle::{advance, Particle};
use crate::core_types::vec2::Vec2;
use crate::random::RandomSource;

/// Ember color palette; one entry is drawn uniformly per particle.
const PALETTE: [[u8; 3]; 3] = [[255, 140, 0], [255, 100, 0], [255, 180, 0]];

/// Spawn jitter around the cell position, world units per axis.
const SPAWN_JITTER: f32 = 2.0;
/// Initial horizontal velocity band.
const SPAWN_VX: (f32, f32) = (-0.5, 0.5);
/// Initial vertical velocity band (negative y is up).
const SPAWN_VY: (f32, f32) = (-2.0, -0.5);
/// How strongly the wind accelerates an ember each tick.
const WIND_COUPLING: f32 = 0.01;

/// Owner of all live ember particles.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    max_particles: usize,
    per_cell: usize,
    life_min: u32,
    life_max: u32,
    cell_size: f32,
}

impl ParticleSystem {
    /// Empty system with the given spawn parameters.
    pub fn new(
        max_particles: usize,
        per_cell: usize,
        life_min: u32,
        life_max: u32,
        cell_size: f32,
    ) -> Self {
        Self {
            particles: Vec::with_capacity(max_particles),
            max_particles,
            per_cell,
            life_min,
            life_max,
            cell_size,
        }
    }

    /// Live particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Live particle count.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether no particles are live.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Lifetime ceiling, the denominator for the presentation alpha hint.
    pub fn max_life(&self) -> u32 {
        self.life_max
    }

    /// Spawn embers for every burning cell, up to `per_cell` each, while
    /// the live count stays below the cap. Once the cap is hit the rest
    /// of the batch is silently skipped; nothing is queued and nothing
    /// errors.
    pub fn spawn_for<R, I>(&mut self, burning_cells: I, rng: &mut R)
    where
        R: RandomSource + ?Sized,
        I: IntoIterator<Item = (usize, usize)>,
    {
        let before = self.particles.len();
        'cells: for (row, col) in burning_cells {
            let origin = Vec2::new(col as f32 * self.cell_size, row as f32 * self.cell_size);
            for _ in 0..self.per_cell {
                if self.particles.len() >= self.max_particles {
                    break 'cells;
                }
                self.particles.push(Particle {
                    position: origin
                        + Vec2::new(
                            rng.range_f32(-SPAWN_JITTER, SPAWN_JITTER),
                            rng.range_f32(-SPAWN_JITTER, SPAWN_JITTER),
                        ),
                    velocity: Vec2::new(
                        rng.range_f32(SPAWN_VX.0, SPAWN_VX.1),
                        rng.range_f32(SPAWN_VY.0, SPAWN_VY.1),
                    ),
                    life: rng.range_u32(self.life_min, self.life_max),
                    color: PALETTE[rng.index(PALETTE.len())],
                });
            }
        }
        if self.particles.len() > before {
            debug!(spawned = self.particles.len() - before, "embers spawned");
        }
    }

    /// Advance every live particle by one tick under the given wind.
    pub fn advance(&mut self, wind: Vec2) {
        for particle in &mut self.particles {
            advance(particle, wind, WIND_COUPLING);
        }
    }

    /// Remove all particles whose life has run out. Survivors keep their
    /// state; removal order is unobservable.
    pub fn prune(&mut self) {
        self.particles.retain(|p| p.life > 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Scripted;

    #[test]
    fn test_cap_is_never_exceeded() {
        let mut system = ParticleSystem::new(10, 5, 30, 60, 4.0);
        let mut rng = Scripted::constant(0.5);

        // 3 cells x 5 per cell = 15 wanted, cap is 10
        system.spawn_for([(0, 0), (1, 1), (2, 2)], &mut rng);
        assert_eq!(system.len(), 10);

        // Already full: refused, not queued
        system.spawn_for([(3, 3)], &mut rng);
        assert_eq!(system.len(), 10);
    }

    #[test]
    fn test_spawn_position_near_cell() {
        let mut system = ParticleSystem::new(100, 1, 30, 60, 4.0);
        let mut rng = Scripted::constant(0.5);

        system.spawn_for([(2, 3)], &mut rng);
        let p = &system.particles()[0];
        // Cell origin (col*4, row*4) = (12, 8), jitter within +/- 2
        assert!((p.position.x - 12.0).abs() <= SPAWN_JITTER);
        assert!((p.position.y - 8.0).abs() <= SPAWN_JITTER);
        // Initial velocity points upward
        assert!(p.velocity.y < 0.0);
    }

    #[test]
    fn test_spawned_lifetime_in_range() {
        let mut system = ParticleSystem::new(100, 5, 30, 60, 4.0);
        let mut rng = Scripted::new(vec![0.0, 0.25, 0.5, 0.75, 0.999]);

        system.spawn_for([(0, 0)], &mut rng);
        for p in system.particles() {
            assert!((30..=60).contains(&p.life), "life {} out of range", p.life);
        }
    }

    #[test]
    fn test_palette_colors_only() {
        let mut system = ParticleSystem::new(100, 5, 30, 60, 4.0);
        let mut rng = Scripted::new(vec![0.1, 0.4, 0.7, 0.95]);

        system.spawn_for([(0, 0), (0, 1)], &mut rng);
        for p in system.particles() {
            assert!(PALETTE.contains(&p.color), "color {:?} not in palette", p.color);
        }
    }

    #[test]
    fn test_prune_keeps_survivors_intact() {
        let mut system = ParticleSystem::new(100, 1, 1, 1, 4.0);
        let mut rng = Scripted::constant(0.0);
        system.spawn_for([(0, 0)], &mut rng);

        // Second particle with a longer life
        let mut long = ParticleSystem::new(100, 1, 5, 5, 4.0);
        long.spawn_for([(0, 0)], &mut rng);
        system.particles.push(long.particles()[0].clone());

        system.advance(Vec2::zeros());
        let survivor_life_before = system.particles()[1].life;
        system.prune();

        assert_eq!(system.len(), 1);
        assert_eq!(system.particles()[0].life, survivor_life_before);
    }
}
