//! Combustion grid and the per-tick transition rule.
//!
//! The grid owns one [`CellState`] per cell and mutates only through
//! [`Grid::ignite`] and [`Grid::step`]. The step is double-buffered:
//! every ignition and burnout decision for tick `t -> t+1` reads the
//! frozen pre-step snapshot, and writes land in a scratch buffer that
//! replaces the live cells only after the full scan. Without this, a
//! single ignition could cascade several cells deep within one tick.

use tracing::debug;

use crate::core_types::cell::CellState;
use crate::humidity::HumidityField;
use crate::random::RandomSource;

/// Offsets of the 8 surrounding cells (Moore neighborhood).
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Rain multiplier on ignition chance.
const RAIN_SPREAD_DAMPING: f32 = 0.3;
/// Rain multiplier on burnout chance.
const RAIN_BURNOUT_BOOST: f32 = 1.5;
/// Burning-neighbor count at which density acceleration kicks in.
const DENSITY_THRESHOLD: usize = 5;
/// Ignition multiplier once the density threshold is reached.
const DENSITY_MULTIPLIER: f32 = 3.0;

/// Per-run fire behavior constants.
#[derive(Debug, Clone, Copy)]
pub struct FireParams {
    /// Base per-tick ignition chance before modifiers.
    pub spread_chance: f32,
    /// Base per-tick burnout chance before modifiers.
    pub burnout_chance: f32,
}

/// Per-tick ignition chance for one candidate cell.
///
/// Humidity damps the base chance, rain damps it further, and a dense
/// burning neighborhood around the *candidate* accelerates it. The
/// density input is the candidate cell's own burning-neighbor count,
/// not the igniter's; local fire density is a property of the target.
pub fn ignition_chance(
    base: f32,
    humidity: f32,
    raining: bool,
    burning_neighbors: usize,
) -> f32 {
    let mut chance = base * (1.0 - humidity);
    if raining {
        chance *= RAIN_SPREAD_DAMPING;
    }
    if burning_neighbors >= DENSITY_THRESHOLD {
        chance *= DENSITY_MULTIPLIER;
    }
    chance
}

/// Per-tick burnout chance for a burning cell. Rain speeds burnout up.
pub fn burnout_chance(base: f32, raining: bool) -> f32 {
    if raining {
        base * RAIN_BURNOUT_BOOST
    } else {
        base
    }
}

/// Fixed-size 2D array of combustion states.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    params: FireParams,
    cells: Vec<CellState>,
    /// Next-state buffer reused across ticks; swapped in at scan end.
    scratch: Vec<CellState>,
}

impl Grid {
    /// All-vegetation grid (every cell `Unburned`).
    pub fn new(rows: usize, cols: usize, params: FireParams) -> Self {
        Self {
            rows,
            cols,
            params,
            cells: vec![CellState::Unburned; rows * cols],
            scratch: vec![CellState::Unburned; rows * cols],
        }
    }

    /// Grid with random vegetation coverage: each cell is `Unburned` with
    /// probability `tree_density`, otherwise `Burnt` (bare ground that can
    /// never carry fire).
    pub fn generate<R: RandomSource + ?Sized>(
        rows: usize,
        cols: usize,
        params: FireParams,
        tree_density: f32,
        rng: &mut R,
    ) -> Self {
        let mut grid = Self::new(rows, cols, params);
        for cell in &mut grid.cells {
            if rng.uniform() >= tree_density {
                *cell = CellState::Burnt;
            }
        }
        grid
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// State of the cell at (row, col).
    #[inline]
    pub fn state(&self, row: usize, col: usize) -> CellState {
        self.cells[row * self.cols + col]
    }

    /// All cell states in row-major order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Coordinates of every currently burning cell, row-major.
    pub fn burning_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_burning())
            .map(|(i, _)| (i / self.cols, i % self.cols))
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Externally ignite a cell. Only an `Unburned` cell catches; anything
    /// else (including out-of-bounds coordinates) is a silent no-op, since
    /// this is an interactive command rather than a programming error.
    pub fn ignite(&mut self, row: usize, col: usize) {
        if row >= self.rows || col >= self.cols {
            return;
        }
        let idx = row * self.cols + col;
        if self.cells[idx] == CellState::Unburned {
            self.cells[idx] = CellState::Burning;
        }
    }

    /// Advance the grid by one tick.
    ///
    /// Every decision reads the frozen pre-step snapshot; writes go to the
    /// scratch buffer, which replaces the live cells atomically at the end
    /// of the scan. For each burning cell, each of its 8 in-bounds
    /// `Unburned` neighbors rolls against [`ignition_chance`]; the cell
    /// itself independently rolls against [`burnout_chance`]. A neighbor
    /// already claimed by an earlier igniter this tick is skipped, so no
    /// candidate rolls twice.
    pub fn step<R: RandomSource + ?Sized>(
        &mut self,
        humidity: &HumidityField,
        raining: bool,
        rng: &mut R,
    ) {
        debug_assert_eq!(humidity.rows(), self.rows);
        debug_assert_eq!(humidity.cols(), self.cols);

        self.scratch.copy_from_slice(&self.cells);

        let mut ignitions = 0usize;
        for row in 0..self.rows {
            for col in 0..self.cols {
                if !self.cells[row * self.cols + col].is_burning() {
                    continue;
                }

                for (dr, dc) in NEIGHBOR_OFFSETS {
                    let nr = row as i32 + dr;
                    let nc = col as i32 + dc;
                    if nr < 0 || nr >= self.rows as i32 || nc < 0 || nc >= self.cols as i32 {
                        continue;
                    }
                    let (nr, nc) = (nr as usize, nc as usize);
                    let nidx = nr * self.cols + nc;
                    if self.cells[nidx] != CellState::Unburned {
                        continue;
                    }
                    // Claimed by another igniter this tick; no second roll.
                    if self.scratch[nidx] == CellState::Burning {
                        continue;
                    }

                    let chance = ignition_chance(
                        self.params.spread_chance,
                        humidity.get(nr, nc),
                        raining,
                        self.burning_neighbors(nr, nc),
                    );
                    if rng.uniform() < chance {
                        self.scratch[nidx] = CellState::Burning;
                        ignitions += 1;
                    }
                }

                if rng.uniform() < burnout_chance(self.params.burnout_chance, raining) {
                    self.scratch[row * self.cols + col] = CellState::Burnt;
                }
            }
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
        debug!(ignitions, "grid step complete");
    }

    /// Count of burning cells among the 8 neighbors of (row, col), read
    /// from the frozen pre-step snapshot.
    fn burning_neighbors(&self, row: usize, col: usize) -> usize {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter(|&(dr, dc)| {
                let nr = row as i32 + dr;
                let nc = col as i32 + dc;
                nr >= 0
                    && nr < self.rows as i32
                    && nc >= 0
                    && nc < self.cols as i32
                    && self.cells[nr as usize * self.cols + nc as usize].is_burning()
            })
            .count()
    }
}
