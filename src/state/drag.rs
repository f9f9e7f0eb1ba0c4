// Drag gesture resolution.
// A `Drag` is created on pointer-down over an unplaced piece and discarded on release;
// everything here is a pure function of the drag value, the session and measured bounds.
use super::pieces::PuzzleSession;
use crate::model::{PlacementState, Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drag {
    pub piece_id: usize,
    pub target_cell: usize,
    /// Pointer position at drag start.
    pub pointer_origin: Point,
    /// Piece offset at drag start (pieces always rest at zero).
    pub origin_offset: Point,
    /// Current visual translation of the piece.
    pub live_offset: Point,
    /// Piece bounds at zero offset.
    pub rest_rect: Rect,
}

/// Client-space bounds of one drop target, measured by the view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetBounds {
    pub cell_id: usize,
    pub rect: Rect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropDecision {
    Accept { piece_id: usize, cell_id: usize },
    Reject { piece_id: usize },
}

impl Drag {
    /// `None` when the piece is unknown or already placed; placed pieces never move.
    pub fn begin(
        session: &PuzzleSession,
        piece_id: usize,
        pointer: Point,
        rest_rect: Rect,
    ) -> Option<Drag> {
        let piece = session.piece(piece_id)?;
        if session.placement_of(piece_id)? != PlacementState::Unplaced {
            return None;
        }
        Some(Drag {
            piece_id,
            target_cell: piece.target_cell,
            pointer_origin: pointer,
            origin_offset: Point::default(),
            live_offset: Point::default(),
            rest_rect,
        })
    }

    pub fn moved(&self, pointer: Point) -> Drag {
        Drag {
            live_offset: self.origin_offset.offset_by(pointer.delta_from(self.pointer_origin)),
            ..*self
        }
    }

    /// Center of the piece's bounding box at its live position.
    pub fn center(&self) -> Point {
        self.rest_rect.translated(self.live_offset).center()
    }
}

/// The drop target currently eligible for this drag, if any: the piece's center must lie
/// inside the target's bounds and the target must be the piece's own, still-empty cell.
pub fn candidate(drag: &Drag, session: &PuzzleSession, targets: &[TargetBounds]) -> Option<usize> {
    let center = drag.center();
    targets
        .iter()
        .filter(|t| t.cell_id == drag.target_cell)
        .filter(|t| session.target(t.cell_id).is_some_and(|dt| !dt.occupied))
        .find(|t| t.rect.contains(center))
        .map(|t| t.cell_id)
}

pub fn resolve_drop(drag: &Drag, session: &PuzzleSession, targets: &[TargetBounds]) -> DropDecision {
    match candidate(drag, session, targets) {
        Some(cell_id) => DropDecision::Accept { piece_id: drag.piece_id, cell_id },
        None => DropDecision::Reject { piece_id: drag.piece_id },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::model::DifficultyTier;
    use crate::state::layout::generate_layout;
    use crate::state::pieces::build_puzzle;
    use crate::state::rng::PuzzleRng;

    const CELL: f64 = 150.0;

    fn two_by_two() -> PuzzleSession {
        let mut rng = PuzzleRng::new(17);
        let layout = generate_layout(DifficultyTier::Age3, &mut rng);
        let dog = catalog::theme("animals").expect("animals").pictures[0];
        build_puzzle(DifficultyTier::Age3, dog, layout, &mut rng)
    }

    /// Target grid at (0,0); tray row below it at y = 400.
    fn grid() -> Vec<TargetBounds> {
        (0..4)
            .map(|cell_id| TargetBounds {
                cell_id,
                rect: Rect::new((cell_id % 2) as f64 * CELL, (cell_id / 2) as f64 * CELL, CELL, CELL),
            })
            .collect()
    }

    fn tray_rect(slot: usize) -> Rect {
        Rect::new(slot as f64 * CELL, 400.0, CELL, CELL)
    }

    #[test]
    fn move_tracks_pointer_delta() {
        let s = two_by_two();
        let d = Drag::begin(&s, 0, Point::new(75.0, 475.0), tray_rect(0)).expect("drag");
        let d = d.moved(Point::new(100.0, 300.0));
        assert_eq!(d.live_offset, Point::new(25.0, -175.0));
        assert_eq!(d.center(), Point::new(100.0, 300.0));
    }

    #[test]
    fn center_over_own_cell_is_accepted() {
        let s = two_by_two();
        let d = Drag::begin(&s, 0, Point::new(75.0, 475.0), tray_rect(0)).expect("drag");
        let d = d.moved(Point::new(70.0, 80.0));
        assert_eq!(candidate(&d, &s, &grid()), Some(0));
        assert_eq!(resolve_drop(&d, &s, &grid()), DropDecision::Accept { piece_id: 0, cell_id: 0 });
    }

    #[test]
    fn center_over_other_cell_is_rejected() {
        let s = two_by_two();
        let d = Drag::begin(&s, 0, Point::new(75.0, 475.0), tray_rect(0)).expect("drag");
        let d = d.moved(Point::new(225.0, 75.0));
        assert_eq!(candidate(&d, &s, &grid()), None);
        assert_eq!(resolve_drop(&d, &s, &grid()), DropDecision::Reject { piece_id: 0 });
    }

    #[test]
    fn overlap_without_center_inside_is_rejected() {
        let s = two_by_two();
        let d = Drag::begin(&s, 0, Point::new(75.0, 475.0), tray_rect(0)).expect("drag");
        // Piece covers most of cell 0 but its center sits just inside cell 1.
        let d = d.moved(Point::new(CELL + 1.0, 75.0));
        assert_eq!(resolve_drop(&d, &s, &grid()), DropDecision::Reject { piece_id: 0 });
    }

    #[test]
    fn regrab_center_depends_on_resting_box() {
        let s = two_by_two();
        let grab = Point::new(75.0, 475.0);
        let dest = Point::new(75.0, 75.0);
        let from_slot = Drag::begin(&s, 0, grab, tray_rect(0)).expect("drag").moved(dest);
        assert_eq!(from_slot.center(), dest);
        assert_eq!(resolve_drop(&from_slot, &s, &grid()), DropDecision::Accept { piece_id: 0, cell_id: 0 });
        // A box measured while the piece is still sliding back carries its leftover offset.
        let sliding = tray_rect(0).translated(Point::new(CELL, 0.0));
        let from_sliding = Drag::begin(&s, 0, grab, sliding).expect("drag").moved(dest);
        assert_eq!(resolve_drop(&from_sliding, &s, &grid()), DropDecision::Reject { piece_id: 0 });
    }

    #[test]
    fn placed_piece_cannot_be_dragged() {
        let mut s = two_by_two();
        assert!(s.place(1, 1));
        assert!(Drag::begin(&s, 1, Point::default(), tray_rect(1)).is_none());
        assert!(Drag::begin(&s, 42, Point::default(), tray_rect(1)).is_none());
    }

    #[test]
    fn missing_target_bounds_reject() {
        let s = two_by_two();
        let d = Drag::begin(&s, 3, Point::new(75.0, 475.0), tray_rect(0)).expect("drag");
        let d = d.moved(Point::new(225.0, 225.0));
        assert_eq!(resolve_drop(&d, &s, &[]), DropDecision::Reject { piece_id: 3 });
    }
}
