//! Reversi placement rules.

use crate::core::{Coordinate, GameState, MoveList, Player};
use crate::rules::{flips, is_legal_placement, RulesEngine};

/// Standard Reversi rules on a board of any even size.
///
/// A placement is legal on an empty cell that brackets at least one run of
/// opposing discs in one of the eight directions. Every bracketed run flips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReversiRules;

impl RulesEngine for ReversiRules {
    fn legal_moves(&self, state: &GameState, player: Player) -> MoveList {
        let board = state.board();
        let mark = player.mark();
        board
            .coordinates()
            .filter(|&at| is_legal_placement(board, at, mark))
            .collect()
    }

    fn apply_move(&self, state: &mut GameState, at: Coordinate) -> Option<u32> {
        let player = state.to_move();
        let mark = player.mark();
        let board = state.board();
        if !board.mark_at(at)?.is_empty() {
            return None;
        }
        let flipped = flips(board, at, mark);
        if flipped.is_empty() {
            return None;
        }

        let board = state.board_mut();
        for &cell in std::iter::once(&at).chain(flipped.iter()) {
            board.set(cell, mark).ok()?;
        }

        let count = flipped.len() as u32;
        state.record_placement(player, at, count);
        Some(count)
    }
}
