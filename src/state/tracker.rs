// Per-piece placement state. Placement is one-way: unplaced -> placed.
use serde::{Deserialize, Serialize};

use crate::model::PlacementState;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementTracker {
    states: Vec<PlacementState>,
    placed_count: usize,
}

impl PlacementTracker {
    pub fn new(piece_count: usize) -> Self {
        Self {
            states: vec![PlacementState::Unplaced; piece_count],
            placed_count: 0,
        }
    }

    pub fn placed_count(&self) -> usize {
        self.placed_count
    }

    pub fn state_of(&self, piece_id: usize) -> Option<PlacementState> {
        self.states.get(piece_id).copied()
    }

    /// Returns true when the piece moved to `Placed`. Unknown ids and
    /// already-placed pieces are ignored.
    pub fn record_placement(&mut self, piece_id: usize) -> bool {
        match self.states.get_mut(piece_id) {
            Some(state @ PlacementState::Unplaced) => {
                *state = PlacementState::Placed;
                self.placed_count += 1;
                true
            }
            _ => false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.placed_count == self.states.len()
    }
}
