use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LifeConfig {
    pub rows: usize,
    pub cols: usize,
    pub cell_width: u32,  // Pixels per cell, horizontally.
    pub cell_height: u32, // Pixels per cell, vertically.
    pub tick_interval_ms: u64,
}

impl LifeConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Window size in pixels as `(width, height)`.
    pub fn window_size(&self) -> (u32, u32) {
        (
            self.cols as u32 * self.cell_width,
            self.rows as u32 * self.cell_height,
        )
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            cell_width: 20,
            cell_height: 20,
            tick_interval_ms: 10,
        }
    }
}
