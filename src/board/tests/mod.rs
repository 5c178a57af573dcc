//! Board module tests.
//!
//! Organized by category:
//! - `magics.rs` - perfect-hash property of the magic tables
//! - `movegen.rs` - legal move generation cases
//! - `completeness.rs` - cross-check against a reference generator
//! - `perft.rs` - perft vectors
//! - `make_unmake.rs` - make/undo correctness
//! - `endgame.rs` - end-of-game adjudication
//! - `proptest.rs` - property-based tests

mod perft;

use super::state::Board;
use super::types::{Move, Piece, Square};

/// Find a generated move by coordinates, panicking if absent.
pub(crate) fn find_move(
    board: &mut Board,
    from: Square,
    to: Square,
    promotion: Option<Piece>,
) -> Move {
    for mv in &board.generate_moves() {
        if mv.from() == from && mv.to() == to && mv.promotion() == promotion {
            return mv;
        }
    }
    panic!("expected move {from}{to} not found");
}
