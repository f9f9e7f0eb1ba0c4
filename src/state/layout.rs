// Grid geometry and decorative edge tags for one puzzle.
use serde::{Deserialize, Serialize};

use super::rng::PuzzleRng;
use crate::model::{DifficultyTier, EdgeKind, EdgeShape};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    /// Row-major; length = rows * cols.
    pub shapes: Vec<EdgeShape>,
}

impl Layout {
    pub fn piece_count(&self) -> usize {
        self.rows * self.cols
    }

    #[cfg(test)]
    pub fn shape(&self, row: usize, col: usize) -> Option<&EdgeShape> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.shapes.get(row * self.cols + col)
    }
}

fn interior_edge(rng: &mut PuzzleRng) -> EdgeKind {
    if rng.next_bool() { EdgeKind::TabOut } else { EdgeKind::TabIn }
}

/// Boundary edges are flat; every interior edge is an independent coin flip.
/// Neighbouring cells are not made complementary, the marks are decorative.
pub fn generate_layout(tier: DifficultyTier, rng: &mut PuzzleRng) -> Layout {
    let settings = tier.settings();
    let (rows, cols) = (settings.rows, settings.cols);
    let mut shapes = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let top = if r > 0 { interior_edge(rng) } else { EdgeKind::Flat };
            let right = if c + 1 < cols { interior_edge(rng) } else { EdgeKind::Flat };
            let bottom = if r + 1 < rows { interior_edge(rng) } else { EdgeKind::Flat };
            let left = if c > 0 { interior_edge(rng) } else { EdgeKind::Flat };
            shapes.push(EdgeShape { top, right, bottom, left });
        }
    }
    Layout { rows, cols, shapes }
}
