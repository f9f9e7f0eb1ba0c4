pub mod drag;
pub mod layout;
pub mod pieces;
pub mod rng;
pub mod tracker;

pub use drag::{candidate, resolve_drop, Drag, DropDecision, TargetBounds};
pub use layout::generate_layout;
pub use pieces::{build_puzzle, PuzzleSession};
pub use rng::PuzzleRng;
