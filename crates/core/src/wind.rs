//! Wind vector source.
//!
//! Two sources exist and exactly one is authoritative per run:
//! a deterministic oscillation driven purely by the tick counter, or a
//! manual accumulator nudged by discrete directional commands. The wind
//! feeds particle advection and the snapshot; fire spread does not read
//! it yet (spread bias is reserved for a future rule).

use std::f32::consts::FRAC_PI_4;

use serde::{Deserialize, Serialize};

use crate::core_types::vec2::Vec2;

/// Angular frequency of the deterministic direction swing.
const ANGLE_RATE: f32 = 0.001;
/// Angular frequency of the deterministic speed swell.
const SPEED_RATE: f32 = 0.002;
/// Mean wind speed in deterministic mode.
const BASE_SPEED: f32 = 1.5;

/// Which wind source is authoritative for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindMode {
    /// Pure function of the tick counter; ignores manual adjustments.
    Deterministic,
    /// Accumulator mutated by `AdjustWind` commands; persists across ticks.
    Manual,
}

/// Per-tick wind vector provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindField {
    mode: WindMode,
    manual: Vec2,
}

impl WindField {
    /// Create a field in the given mode with a zero manual accumulator.
    pub fn new(mode: WindMode) -> Self {
        Self {
            mode,
            manual: Vec2::zeros(),
        }
    }

    /// The configured mode.
    pub fn mode(&self) -> WindMode {
        self.mode
    }

    /// Deterministic oscillating wind as a pure function of the tick:
    /// the direction swings within +/- 45 degrees while the speed swells
    /// around [`BASE_SPEED`].
    pub fn deterministic(tick: u64) -> Vec2 {
        let t = tick as f32;
        let angle = (t * ANGLE_RATE).sin() * FRAC_PI_4;
        let speed = BASE_SPEED + (t * SPEED_RATE).cos();
        Vec2::new(angle.cos() * speed, angle.sin() * speed)
    }

    /// Add a discrete step to the manual accumulator.
    ///
    /// Applied unconditionally; the accumulator is simply not consulted
    /// in deterministic mode.
    pub fn adjust(&mut self, dx: f32, dy: f32) {
        self.manual += Vec2::new(dx, dy);
    }

    /// The wind vector for this tick, from whichever source the mode selects.
    pub fn current(&self, tick: u64) -> Vec2 {
        match self.mode {
            WindMode::Deterministic => Self::deterministic(tick),
            WindMode::Manual => self.manual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_deterministic_at_tick_zero() {
        // angle = sin(0) * pi/4 = 0, speed = 1.5 + cos(0) = 2.5
        let wind = WindField::deterministic(0);
        assert_relative_eq!(wind.x, 2.5, epsilon = 1e-6);
        assert_relative_eq!(wind.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_deterministic_is_pure() {
        assert_eq!(
            WindField::deterministic(1234),
            WindField::deterministic(1234)
        );
    }

    #[test]
    fn test_deterministic_speed_bounded() {
        for tick in (0..20_000).step_by(37) {
            let wind = WindField::deterministic(tick);
            let speed = wind.norm();
            assert!(
                (0.5 - 1e-4..=2.5 + 1e-4).contains(&speed),
                "speed {speed} out of band at tick {tick}"
            );
        }
    }

    #[test]
    fn test_manual_accumulates_and_persists() {
        let mut field = WindField::new(WindMode::Manual);
        field.adjust(0.5, 0.0);
        field.adjust(0.5, -0.5);
        assert_eq!(field.current(10), Vec2::new(1.0, -0.5));
        // Persists across ticks until the next command
        assert_eq!(field.current(999), Vec2::new(1.0, -0.5));
    }

    #[test]
    fn test_deterministic_mode_ignores_accumulator() {
        let mut field = WindField::new(WindMode::Deterministic);
        field.adjust(100.0, 100.0);
        assert_eq!(field.current(0), WindField::deterministic(0));
    }
}
