//! External command intake.
//!
//! The Display/Input boundary submits commands at any point during a
//! tick; the orchestrator drains the queue atomically at the start of
//! the next tick, so no partial-command state is ever observable.

use serde::{Deserialize, Serialize};

/// Discrete command from the Display/Input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Ignite the cell at (row, col). Out-of-bounds or non-`Unburned`
    /// targets are silently ignored.
    Ignite { row: usize, col: usize },
    /// Flip the rain flag.
    ToggleRain,
    /// Add a step to the manual wind accumulator. Only consulted when
    /// the wind field runs in manual mode.
    AdjustWind { dx: f32, dy: f32 },
}

/// FIFO queue of commands pending for the next tick.
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: Vec<Command>,
}

impl CommandQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self {
            pending: Vec::with_capacity(16),
        }
    }

    /// Queue a command for the next tick.
    pub fn submit(&mut self, command: Command) {
        self.pending.push(command);
    }

    /// Number of commands waiting.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drain all pending commands in submission order.
    pub fn take_pending(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.pending)
    }

    /// Drop all pending commands.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
