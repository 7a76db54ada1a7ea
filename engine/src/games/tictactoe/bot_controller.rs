use crate::games::SessionRng;
use crate::log_debug;

use super::board::Board;
use super::types::{Outcome, Player, Position};
use super::win_detector::outcome_after;

/// Best move found from some position and the utility it guarantees.
/// `position` is `None` when the position was already terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub position: Option<Position>,
    pub utility: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub utility: i32,
    pub random_opening: bool,
}

/// Full-depth minimax player for one mark.
///
/// Utilities are +1 (engine wins), 0 (draw), -1 (engine loses), undiscounted.
/// Moves are tried in ascending index order and only a strictly better
/// utility replaces the current best, so among equally good moves the lowest
/// index wins and the same board always yields the same move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    mark: Player,
}

impl SearchEngine {
    pub fn new(mark: Player) -> Self {
        Self { mark }
    }

    pub fn mark(&self) -> Player {
        self.mark
    }

    pub fn opponent(&self) -> Player {
        self.mark.opponent()
    }

    /// Picks the engine's move, or `None` if the game is already over.
    ///
    /// An empty board gets a uniformly random opening from `rng` without
    /// searching. The board is handed back exactly as it came in.
    pub fn choose_move(&self, board: &mut Board, rng: &mut SessionRng) -> Option<Position> {
        self.choose_move_with_stats(board, rng)
            .map(|(position, _)| position)
    }

    pub fn choose_move_with_stats(
        &self,
        board: &mut Board,
        rng: &mut SessionRng,
    ) -> Option<(Position, SearchStats)> {
        let outcome = board.outcome();
        if outcome.is_terminal() {
            return None;
        }

        if board.is_empty() {
            let position = *rng.choose(&board.available_moves())?;
            log_debug!("{} opens at random with {}", self.mark, position);
            return Some((
                position,
                SearchStats {
                    nodes: 0,
                    utility: 0,
                    random_opening: true,
                },
            ));
        }

        let mut nodes = 0;
        let result = self.search(board, true, outcome, &mut nodes);
        let position = result.position?;

        log_debug!(
            "{} chose {} with utility {} after {} nodes",
            self.mark,
            position,
            result.utility,
            nodes
        );

        Some((
            position,
            SearchStats {
                nodes,
                utility: result.utility,
                random_opening: false,
            },
        ))
    }

    /// Best move for the engine's own mark.
    pub fn maximize(&self, board: &mut Board) -> SearchResult {
        let outcome = board.outcome();
        self.search(board, true, outcome, &mut 0)
    }

    /// Best reply for the opponent, from the engine's point of view.
    pub fn minimize(&self, board: &mut Board) -> SearchResult {
        let outcome = board.outcome();
        self.search(board, false, outcome, &mut 0)
    }

    pub fn utility(&self, board: &Board) -> i32 {
        self.utility_of(board.outcome())
    }

    fn utility_of(&self, outcome: Outcome) -> i32 {
        match outcome.winner() {
            Some(winner) if winner == self.mark => 1,
            Some(_) => -1,
            None => 0,
        }
    }

    // `outcome` is the state of `board` as it stands, passed down from the
    // caller so that only the cell needs restoring when a move is undone.
    fn search(
        &self,
        board: &mut Board,
        engine_to_move: bool,
        outcome: Outcome,
        nodes: &mut u64,
    ) -> SearchResult {
        *nodes += 1;

        if outcome.is_terminal() {
            return SearchResult {
                position: None,
                utility: self.utility_of(outcome),
            };
        }

        let (mover, mut best_utility) = if engine_to_move {
            (self.mark, i32::MIN)
        } else {
            (self.opponent(), i32::MAX)
        };
        let mut best_position = None;

        for position in board.available_moves() {
            board.place(mover, position);
            let child_outcome = outcome_after(board, position, mover);
            let child = self.search(board, !engine_to_move, child_outcome, nodes);
            board.clear(position);

            let improves = if engine_to_move {
                child.utility > best_utility
            } else {
                child.utility < best_utility
            };
            if improves {
                best_utility = child.utility;
                best_position = Some(position);
            }
        }

        SearchResult {
            position: best_position,
            utility: best_utility,
        }
    }
}
