//! Making and unmaking moves.
//!
//! `make_move` journals the pre-move state onto the history stack and
//! mutates the position in place, keeping the bitboards, piece lists,
//! square array, Zobrist hash, clocks, and material tallies in sync.
//! `undo_move` pops the journal and reverses everything bit for bit;
//! the saved hash makes recomputation unnecessary.

use super::state::{
    Board, HistoryEntry, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
};
use super::types::{Color, Move, Piece, Square};
use super::zobrist::ZOBRIST;

const A1: usize = 0;
const E1: usize = 4;
const H1: usize = 7;
const A8: usize = 56;
const E8: usize = 60;
const H8: usize = 63;

/// The rook's start and end squares for a castling move, keyed by the
/// king's destination.
fn rook_castle_squares(king_to: Square) -> (Square, Square) {
    match king_to.index() {
        6 => (Square::from_index(7), Square::from_index(5)),   // g1: h1 -> f1
        2 => (Square::from_index(0), Square::from_index(3)),   // c1: a1 -> d1
        62 => (Square::from_index(63), Square::from_index(61)), // g8: h8 -> f8
        _ => (Square::from_index(56), Square::from_index(59)), // c8: a8 -> d8
    }
}

impl Board {
    /// Apply a legal move and update the repetition counter.
    ///
    /// The move must come from `generate_moves`; the board does not
    /// re-validate it.
    pub fn make_move(&mut self, mv: Move) {
        self.make_move_impl(mv, true);
    }

    /// Apply a legal move without repetition bookkeeping. Used by
    /// perft, where the counter is irrelevant and the journal restores
    /// state exactly either way.
    pub fn make_move_untracked(&mut self, mv: Move) {
        self.make_move_impl(mv, false);
    }

    fn make_move_impl(&mut self, mv: Move, track: bool) {
        let from = mv.from();
        let to = mv.to();
        let (color, piece) = self
            .piece_at(from)
            .expect("make_move: start square is empty");
        let captured = if mv.is_en_passant() || mv.is_castling() {
            None
        } else {
            self.piece_at(to)
        };

        self.history.push(HistoryEntry {
            castling: self.castling_rights,
            en_passant: self.en_passant,
            halfmove: self.halfmove_clock,
            hash: self.hash,
            mv,
            captured,
            counted: track,
        });

        if let Some(ep) = self.en_passant.take() {
            self.hash ^= ZOBRIST.en_passant_keys[ep.file()];
        }

        if let Some((cap_color, cap_piece)) = captured {
            self.remove_piece(cap_color, cap_piece, to);
            self.hash ^= ZOBRIST.piece(cap_color, cap_piece, to);
        }

        self.remove_piece(color, piece, from);
        self.hash ^= ZOBRIST.piece(color, piece, from);

        if mv.is_promotion() {
            let promo = mv.promotion().expect("promotion move carries a piece");
            self.add_piece(color, promo, to);
            self.hash ^= ZOBRIST.piece(color, promo, to);
        } else {
            self.add_piece(color, piece, to);
            self.hash ^= ZOBRIST.piece(color, piece, to);
        }

        if mv.is_castling() {
            let (rook_from, rook_to) = rook_castle_squares(to);
            self.remove_piece(color, Piece::Rook, rook_from);
            self.add_piece(color, Piece::Rook, rook_to);
            self.hash ^= ZOBRIST.piece(color, Piece::Rook, rook_from)
                ^ ZOBRIST.piece(color, Piece::Rook, rook_to);
        } else if mv.is_en_passant() {
            // The captured pawn sits behind the destination square.
            let captured_sq = to.offset(if color == Color::White { -8 } else { 8 });
            self.remove_piece(color.opponent(), Piece::Pawn, captured_sq);
            self.hash ^= ZOBRIST.piece(color.opponent(), Piece::Pawn, captured_sq);
        } else if piece == Piece::Pawn {
            let rank_diff = to.rank() as i32 - from.rank() as i32;
            if rank_diff.abs() == 2 {
                let ep = from.offset(if rank_diff > 0 { 8 } else { -8 });
                self.en_passant = Some(ep);
                self.hash ^= ZOBRIST.en_passant_keys[ep.file()];
            }
        }

        self.update_castling_rights(from.index(), to.index());

        self.white_to_move = !self.white_to_move;
        self.hash ^= ZOBRIST.turn_key;
        if !self.white_to_move {
            self.fullmove_number += 1;
        }
        if piece == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        if track {
            self.repetition_counts.increment(self.hash);
        }
    }

    /// Remove castling rights when a king or rook leaves its original
    /// square, or a rook is captured on one. The hash swaps the old
    /// castling-state key for the new one.
    fn update_castling_rights(&mut self, from: usize, to: usize) {
        let mut rights = self.castling_rights;
        if from == E1 {
            rights &= !(CASTLE_WHITE_K | CASTLE_WHITE_Q);
        }
        if from == E8 {
            rights &= !(CASTLE_BLACK_K | CASTLE_BLACK_Q);
        }
        if from == H1 || to == H1 {
            rights &= !CASTLE_WHITE_K;
        }
        if from == A1 || to == A1 {
            rights &= !CASTLE_WHITE_Q;
        }
        if from == H8 || to == H8 {
            rights &= !CASTLE_BLACK_K;
        }
        if from == A8 || to == A8 {
            rights &= !CASTLE_BLACK_Q;
        }
        if rights != self.castling_rights {
            self.hash ^= ZOBRIST.castling_keys[self.castling_rights as usize]
                ^ ZOBRIST.castling_keys[rights as usize];
            self.castling_rights = rights;
        }
    }

    /// Reverse the most recent `make_move`, restoring every field to
    /// its pre-move value.
    ///
    /// # Panics
    /// Panics if no move has been made.
    pub fn undo_move(&mut self) {
        let entry = self
            .history
            .pop()
            .expect("undo_move called with no move to undo");
        if entry.counted {
            self.repetition_counts.decrement(self.hash);
        }

        self.white_to_move = !self.white_to_move;
        if self.white_to_move {
            self.fullmove_number -= 1;
        }

        let color = self.current_color();
        let mv = entry.mv;
        let from = mv.from();
        let to = mv.to();

        if mv.is_castling() {
            self.remove_piece(color, Piece::King, to);
            self.add_piece(color, Piece::King, from);
            let (rook_from, rook_to) = rook_castle_squares(to);
            self.remove_piece(color, Piece::Rook, rook_to);
            self.add_piece(color, Piece::Rook, rook_from);
        } else if mv.is_en_passant() {
            self.remove_piece(color, Piece::Pawn, to);
            self.add_piece(color, Piece::Pawn, from);
            let captured_sq = to.offset(if color == Color::White { -8 } else { 8 });
            self.add_piece(color.opponent(), Piece::Pawn, captured_sq);
        } else {
            let piece = if mv.is_promotion() {
                let promo = mv.promotion().expect("promotion move carries a piece");
                self.remove_piece(color, promo, to);
                Piece::Pawn
            } else {
                let (_, piece) = self
                    .piece_at(to)
                    .expect("undo_move: destination square is empty");
                self.remove_piece(color, piece, to);
                piece
            };
            self.add_piece(color, piece, from);
            if let Some((cap_color, cap_piece)) = entry.captured {
                self.add_piece(cap_color, cap_piece, to);
            }
        }

        self.castling_rights = entry.castling;
        self.en_passant = entry.en_passant;
        self.halfmove_clock = entry.halfmove;
        self.hash = entry.hash;
    }
}
