// Builds the pieces and drop targets for one round and owns them for its lifetime.
use super::layout::Layout;
use super::rng::PuzzleRng;
use super::tracker::PlacementTracker;
use crate::model::{DifficultyTier, DropTarget, Picture, Piece, PlacementState};

/// One playthrough of a single picture.
#[derive(Clone, Debug, PartialEq)]
pub struct PuzzleSession {
    pub tier: DifficultyTier,
    pub picture: Picture,
    pub layout: Layout,
    pieces: Vec<Piece>,
    targets: Vec<DropTarget>,
    tracker: PlacementTracker,
    /// Piece ids in the order the tray offers them.
    tray_order: Vec<usize>,
}

/// Pieces bound 1:1 to cells, offered in an independently shuffled order.
pub fn build_puzzle(
    tier: DifficultyTier,
    picture: Picture,
    layout: Layout,
    rng: &mut PuzzleRng,
) -> PuzzleSession {
    let count = layout.piece_count();
    let pieces: Vec<Piece> = layout
        .shapes
        .iter()
        .enumerate()
        .map(|(id, edges)| Piece { id, target_cell: id, edges: *edges })
        .collect();
    let targets = (0..count)
        .map(|cell_id| DropTarget { cell_id, occupied: false })
        .collect();
    let mut tray_order: Vec<usize> = (0..count).collect();
    rng.shuffle(&mut tray_order);
    PuzzleSession {
        tier,
        picture,
        layout,
        pieces,
        targets,
        tracker: PlacementTracker::new(count),
        tray_order,
    }
}

impl PuzzleSession {
    #[cfg(test)]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, piece_id: usize) -> Option<&Piece> {
        self.pieces.get(piece_id)
    }

    pub fn targets(&self) -> &[DropTarget] {
        &self.targets
    }

    pub fn target(&self, cell_id: usize) -> Option<&DropTarget> {
        self.targets.get(cell_id)
    }

    pub fn tray_order(&self) -> &[usize] {
        &self.tray_order
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn placed_count(&self) -> usize {
        self.tracker.placed_count()
    }

    pub fn placement_of(&self, piece_id: usize) -> Option<PlacementState> {
        self.tracker.state_of(piece_id)
    }

    pub fn is_complete(&self) -> bool {
        self.tracker.is_complete()
    }

    /// Places `piece_id` into `cell_id`. Only the matching cell accepts a piece;
    /// anything else (wrong cell, unknown ids, already placed) is a no-op.
    pub fn place(&mut self, piece_id: usize, cell_id: usize) -> bool {
        let Some(piece) = self.pieces.get(piece_id) else { return false };
        if piece.target_cell != cell_id {
            return false;
        }
        let Some(target) = self.targets.get_mut(cell_id) else { return false };
        if !self.tracker.record_placement(piece_id) {
            return false;
        }
        target.occupied = true;
        true
    }
}
