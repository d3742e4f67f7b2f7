//! Static per-cell moisture field.
//!
//! Generated once at startup from coherent 2D noise and never mutated.
//! Humidity acts as a damping multiplier on ignition probability: the
//! spread rule uses `1 - humidity[cell]`, so wetter cells resist fire.
//! Values keep the raw noise range (roughly [-1, 1]); they are not
//! clamped to [0, 1], matching the tuning of the spread constants.

use serde::{Deserialize, Serialize};

use crate::core_types::noise::value_noise_2d;

/// Immutable moisture values, co-indexed with the grid by (row, col).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HumidityField {
    rows: usize,
    cols: usize,
    values: Vec<f32>,
}

impl HumidityField {
    /// Generate the field by sampling value noise at `(row/scale, col/scale)`
    /// per cell. Deterministic for a fixed `seed`.
    pub fn generate(rows: usize, cols: usize, scale: f32, seed: u32) -> Self {
        let mut values = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                values.push(value_noise_2d(row as f32, col as f32, scale, seed));
            }
        }
        Self { rows, cols, values }
    }

    /// Constant field, mainly for tests and synthetic scenarios.
    pub fn uniform(rows: usize, cols: usize, value: f32) -> Self {
        Self {
            rows,
            cols,
            values: vec![value; rows * cols],
        }
    }

    /// Moisture value at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < self.rows && col < self.cols);
        self.values[row * self.cols + col]
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }
}
