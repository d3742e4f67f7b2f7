//! Per-cell combustion state.

use serde::{Deserialize, Serialize};

/// Combustion state of a single grid cell.
///
/// The lifecycle is monotone: `Unburned -> Burning -> Burnt`. A cell never
/// reverses, and `Burnt` is terminal until the simulation is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Intact vegetation, eligible for ignition.
    Unburned,
    /// Actively burning; spreads fire and spawns ember particles.
    Burning,
    /// Consumed (or bare ground); inert for the rest of the run.
    Burnt,
}

impl CellState {
    /// Whether this cell can catch fire.
    pub fn is_flammable(self) -> bool {
        self == CellState::Unburned
    }

    /// Whether this cell is actively on fire.
    pub fn is_burning(self) -> bool {
        self == CellState::Burning
    }
}
