//! Core data models for the jigsaw game.
//! Tiers, pictures, piece records and the bits of screen geometry the drag logic needs.

use serde::{Deserialize, Serialize};

/// Difficulty tier, keyed by the age of the child playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyTier {
    Age3,
    Age4,
    Age5,
    Age6,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSettings {
    pub pieces: usize,
    pub rows: usize,
    pub cols: usize,
    /// Show a faint copy of the picture inside every empty drop target.
    pub show_guide: bool,
    /// Carried as data only; pieces are never rotated.
    pub rotation: bool,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 4] = [
        DifficultyTier::Age3,
        DifficultyTier::Age4,
        DifficultyTier::Age5,
        DifficultyTier::Age6,
    ];

    pub fn settings(self) -> TierSettings {
        match self {
            DifficultyTier::Age3 => TierSettings { pieces: 4, rows: 2, cols: 2, show_guide: true, rotation: false },
            DifficultyTier::Age4 => TierSettings { pieces: 6, rows: 2, cols: 3, show_guide: true, rotation: false },
            DifficultyTier::Age5 => TierSettings { pieces: 9, rows: 3, cols: 3, show_guide: false, rotation: false },
            DifficultyTier::Age6 => TierSettings { pieces: 12, rows: 3, cols: 4, show_guide: false, rotation: true },
        }
    }

    pub fn age(self) -> u8 {
        match self {
            DifficultyTier::Age3 => 3,
            DifficultyTier::Age4 => 4,
            DifficultyTier::Age5 => 5,
            DifficultyTier::Age6 => 6,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Picture {
    pub id: &'static str,
    pub glyph: &'static str,
    pub name: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    /// Glyph shown on the theme card.
    pub icon: &'static str,
    pub pictures: &'static [Picture],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    Flat,
    TabOut,
    TabIn,
}

/// Four decorative edge tags of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeShape {
    pub top: EdgeKind,
    pub right: EdgeKind,
    pub bottom: EdgeKind,
    pub left: EdgeKind,
}

impl EdgeShape {
    pub fn edges(&self) -> [EdgeKind; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementState {
    #[default]
    Unplaced,
    Placed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub id: usize,
    /// Always equal to `id`; kept separate so call sites read as "which cell accepts me".
    pub target_cell: usize,
    pub edges: EdgeShape,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTarget {
    pub cell_id: usize,
    pub occupied: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_by(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn delta_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Axis-aligned client-space rectangle (what `getBoundingClientRect` reports).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn translated(&self, by: Point) -> Rect {
        Rect::new(self.left + by.x, self.top + by.y, self.width, self.height)
    }

    /// Edges are inclusive.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_table_is_consistent() {
        for tier in DifficultyTier::ALL {
            let s = tier.settings();
            assert_eq!(s.rows * s.cols, s.pieces, "{:?}", tier);
        }
    }

    #[test]
    fn ages_follow_tier_order() {
        let ages: Vec<u8> = DifficultyTier::ALL.iter().map(|t| t.age()).collect();
        assert_eq!(ages, vec![3, 4, 5, 6]);
    }

    #[test]
    fn rect_contains_is_inclusive() {
        let r = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(110.0, 60.0)));
        assert!(!r.contains(Point::new(110.1, 30.0)));
        assert_eq!(r.center(), Point::new(60.0, 35.0));
    }
}
