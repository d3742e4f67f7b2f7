//! Startup configuration and its validation.
//!
//! Configuration is fixed for the run. Validation happens once, at
//! [`crate::Simulation::new`]; it is the engine's only error surface.
//! Everything after construction is infallible by design (out-of-bounds
//! commands are ignored, not errors).

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::wind::WindMode;

/// Fixed-for-the-run simulation parameters.
///
/// Grid dimensions are derived: `rows = world_height / cell_size`,
/// `cols = world_width / cell_size`, truncating. The defaults mirror the
/// tuning the engine was calibrated with (1000x800 world, 4-unit cells,
/// 2% spread chance, 0.5% burnout chance).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// World width in world units.
    pub world_width: f32,
    /// World height in world units.
    pub world_height: f32,
    /// Edge length of one square cell, in world units.
    pub cell_size: f32,
    /// Probability that a cell starts as vegetation rather than bare ground.
    pub tree_density: f32,
    /// Base per-tick ignition chance before humidity/rain/density modifiers.
    pub spread_chance: f32,
    /// Base per-tick chance that a burning cell burns out.
    pub burnout_chance: f32,
    /// Noise scale for the humidity field (larger = smoother moisture).
    pub humidity_scale: f32,
    /// Seed for the humidity noise layer.
    pub humidity_seed: u32,
    /// Hard cap on live ember particles.
    pub max_particles: usize,
    /// Particles spawned per burning cell per tick (cap permitting).
    pub particles_per_cell: usize,
    /// Minimum particle lifetime in ticks (inclusive).
    pub particle_life_min: u32,
    /// Maximum particle lifetime in ticks (inclusive).
    pub particle_life_max: u32,
    /// Which wind source is authoritative for the run.
    pub wind_mode: WindMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            world_width: 1000.0,
            world_height: 800.0,
            cell_size: 4.0,
            tree_density: 0.7,
            spread_chance: 0.02,
            burnout_chance: 0.005,
            humidity_scale: 50.0,
            humidity_seed: 0,
            max_particles: 1500,
            particles_per_cell: 5,
            particle_life_min: 30,
            particle_life_max: 60,
            wind_mode: WindMode::Deterministic,
        }
    }
}

impl SimulationConfig {
    /// Number of grid rows derived from the world height.
    pub fn rows(&self) -> usize {
        if self.cell_size > 0.0 {
            (self.world_height / self.cell_size) as usize
        } else {
            0
        }
    }

    /// Number of grid columns derived from the world width.
    pub fn cols(&self) -> usize {
        if self.cell_size > 0.0 {
            (self.world_width / self.cell_size) as usize
        } else {
            0
        }
    }

    /// Fail-fast validation of the startup parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first malformed parameter:
    /// non-positive cell size, a zero-cell grid, a zero particle cap or
    /// spawn count, an inverted or zero lifetime range, or a probability
    /// outside [0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            return Err(ConfigError::NonPositiveCellSize(self.cell_size));
        }
        if self.rows() == 0 || self.cols() == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        if self.max_particles == 0 {
            return Err(ConfigError::ZeroParticleCap);
        }
        if self.particles_per_cell == 0 {
            return Err(ConfigError::ZeroParticlesPerCell);
        }
        if self.particle_life_min == 0 || self.particle_life_min > self.particle_life_max {
            return Err(ConfigError::BadLifetimeRange {
                min: self.particle_life_min,
                max: self.particle_life_max,
            });
        }
        for (name, value) in [
            ("tree_density", self.tree_density),
            ("spread_chance", self.spread_chance),
            ("burnout_chance", self.burnout_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }
        if self.humidity_scale.is_nan() || self.humidity_scale <= 0.0 {
            return Err(ConfigError::NonPositiveNoiseScale(self.humidity_scale));
        }
        Ok(())
    }
}

/// Malformed startup configuration.
///
/// The only fatal condition in the engine; never surfaces mid-run.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Cell edge length must be strictly positive.
    NonPositiveCellSize(f32),
    /// Derived grid dimensions came out zero.
    EmptyGrid { rows: usize, cols: usize },
    /// The particle cap must allow at least one particle.
    ZeroParticleCap,
    /// Spawning zero particles per burning cell disables the subsystem.
    ZeroParticlesPerCell,
    /// Lifetime range must satisfy `0 < min <= max`.
    BadLifetimeRange { min: u32, max: u32 },
    /// A chance/density parameter fell outside [0, 1].
    ProbabilityOutOfRange { name: &'static str, value: f32 },
    /// Humidity noise scale must be strictly positive.
    NonPositiveNoiseScale(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveCellSize(v) => {
                write!(f, "cell_size must be positive, got {v}")
            }
            ConfigError::EmptyGrid { rows, cols } => {
                write!(f, "grid has no cells ({rows} rows x {cols} cols)")
            }
            ConfigError::ZeroParticleCap => write!(f, "max_particles must be at least 1"),
            ConfigError::ZeroParticlesPerCell => {
                write!(f, "particles_per_cell must be at least 1")
            }
            ConfigError::BadLifetimeRange { min, max } => {
                write!(f, "particle lifetime range [{min}, {max}] is invalid")
            }
            ConfigError::ProbabilityOutOfRange { name, value } => {
                write!(f, "{name} must be in [0, 1], got {value}")
            }
            ConfigError::NonPositiveNoiseScale(v) => {
                write!(f, "humidity_scale must be positive, got {v}")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rows(), 200);
        assert_eq!(config.cols(), 250);
    }

    #[test]
    fn test_rejects_non_positive_cell_size() {
        let config = SimulationConfig {
            cell_size: 0.0,
            ..SimulationConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveCellSize(0.0))
        );
    }

    #[test]
    fn test_rejects_empty_grid() {
        let config = SimulationConfig {
            world_width: 2.0,
            cell_size: 4.0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_particle_cap() {
        let config = SimulationConfig {
            max_particles: 0,
            ..SimulationConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroParticleCap));
    }

    #[test]
    fn test_rejects_inverted_lifetime_range() {
        let config = SimulationConfig {
            particle_life_min: 60,
            particle_life_max: 30,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadLifetimeRange { .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_chance() {
        let config = SimulationConfig {
            spread_chance: 1.5,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ProbabilityOutOfRange {
                name: "spread_chance",
                ..
            })
        ));
    }
}
