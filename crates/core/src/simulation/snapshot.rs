//! Immutable per-tick state for the Display boundary.

use serde::Serialize;

use crate::core_types::cell::CellState;
use crate::core_types::vec2::Vec2;

/// Presentation view of one ember particle.
#[derive(Debug, Clone, Serialize)]
pub struct ParticleView {
    /// World position.
    pub x: f32,
    pub y: f32,
    /// Palette color assigned at spawn.
    pub color: [u8; 3],
    /// Opacity hint in [0, 1], derived from remaining life over the
    /// lifetime ceiling. Presentation only.
    pub alpha: f32,
}

/// Read-only copy of everything the Display boundary needs for one tick.
///
/// Produced at tick end and never mutated by the consumer.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Tick this snapshot describes.
    pub tick: u64,
    /// Grid rows.
    pub rows: usize,
    /// Grid columns.
    pub cols: usize,
    /// Cell states in row-major order.
    pub cells: Vec<CellState>,
    /// Live ember particles.
    pub particles: Vec<ParticleView>,
    /// Wind vector in effect this tick.
    pub wind: Vec2,
    /// Whether it is raining this tick.
    pub raining: bool,
}

impl Snapshot {
    /// Cell state at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> CellState {
        self.cells[row * self.cols + col]
    }

    /// Number of cells currently burning.
    pub fn burning_count(&self) -> usize {
        self.count(CellState::Burning)
    }

    /// Number of cells burnt out.
    pub fn burnt_count(&self) -> usize {
        self.count(CellState::Burnt)
    }

    /// Number of cells still unburned.
    pub fn unburned_count(&self) -> usize {
        self.count(CellState::Unburned)
    }

    fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }
}
