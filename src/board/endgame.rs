//! End-of-game adjudication.

use super::state::Board;
use super::types::MoveList;

/// The outcome of a position, as seen after generating its moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitCode {
    /// The game continues.
    NormalPly,
    WhiteWins,
    BlackWins,
    Stalemate,
    ThreefoldRepetition,
    FiftyMoveRule,
    InsufficientMaterial,
}

impl Board {
    /// Adjudicate the position given its legal moves (from
    /// `generate_moves`). Draws by rule are checked before mate and
    /// stalemate.
    #[must_use]
    pub fn end_of_game(&self, moves: &MoveList) -> ExitCode {
        let code = self.end_of_game_inner(moves);
        #[cfg(feature = "logging")]
        if code != ExitCode::NormalPly {
            log::debug!("game over: {code:?}");
        }
        code
    }

    fn end_of_game_inner(&self, moves: &MoveList) -> ExitCode {
        if self.repetition_counts.get(self.hash) >= 3 {
            return ExitCode::ThreefoldRepetition;
        }
        if self.halfmove_clock >= 100 {
            return ExitCode::FiftyMoveRule;
        }
        if self.insufficient_material() {
            return ExitCode::InsufficientMaterial;
        }
        if moves.is_empty() {
            if !self.in_check() {
                return ExitCode::Stalemate;
            }
            return if self.white_to_move {
                ExitCode::BlackWins
            } else {
                ExitCode::WhiteWins
            };
        }
        ExitCode::NormalPly
    }

    /// Neither side can force mate: bare kings, same-coloured bishops
    /// against a bare king or against each other, or a lone knight.
    fn insufficient_material(&self) -> bool {
        let total = self.piece_count;
        if total == 2 {
            return true;
        }

        let [wl, bl] = self.light_bishops;
        let [wd, bd] = self.dark_bishops;

        // One side's same-coloured bishops against a bare king.
        if (wl > 0 && total - wl == 2)
            || (wd > 0 && total - wd == 2)
            || (bl > 0 && total - bl == 2)
            || (bd > 0 && total - bd == 2)
        {
            return true;
        }

        // Same-coloured bishops on both sides.
        if (wl > 0 && bl > 0 && total - wl - bl == 2)
            || (wd > 0 && bd > 0 && total - wd - bd == 2)
        {
            return true;
        }

        // A lone knight beside the kings.
        self.knight_count == 1 && total == 3
    }
}
