//! Vector type alias for 2D positions and directions.

use nalgebra::Vector2;

/// 2D vector type for positions, velocities, and wind.
///
/// This is a simple alias for `nalgebra::Vector2<f32>`, used throughout
/// the simulation for particle motion and the wind vector.
pub type Vec2 = Vector2<f32>;
