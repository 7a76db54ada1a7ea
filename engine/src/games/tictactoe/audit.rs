use super::board::Board;
use super::bot_controller::SearchEngine;
use super::types::{Outcome, Player, Position};
use super::win_detector::outcome_after;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditReport {
    pub games: u64,
    pub engine_wins: u64,
    pub draws: u64,
    pub engine_losses: u64,
}

impl AuditReport {
    pub fn is_sound(&self) -> bool {
        self.engine_losses == 0
    }

    fn record(&mut self, engine_mark: Player, outcome: Outcome) {
        self.games += 1;
        match outcome.winner() {
            Some(winner) if winner == engine_mark => self.engine_wins += 1,
            Some(_) => self.engine_losses += 1,
            None => self.draws += 1,
        }
    }
}

/// Plays an engine for `engine_mark` against every possible sequence of
/// opponent moves and tallies how each game ends.
///
/// Where the engine would open at random on an empty board, every opening is
/// played instead.
pub fn audit_engine(engine_mark: Player) -> AuditReport {
    let engine = SearchEngine::new(engine_mark);
    let mut board = Board::new();
    let mut report = AuditReport::default();
    explore(&engine, &mut board, Player::FIRST, &mut report);
    report
}

fn explore(engine: &SearchEngine, board: &mut Board, to_move: Player, report: &mut AuditReport) {
    let candidates: Vec<Position> = if to_move != engine.mark() || board.is_empty() {
        board.available_moves()
    } else {
        engine.maximize(board).position.into_iter().collect()
    };

    for position in candidates {
        board.place(to_move, position);
        match outcome_after(board, position, to_move) {
            Outcome::InProgress => explore(engine, board, to_move.opponent(), report),
            finished => report.record(engine.mark(), finished),
        }
        board.clear(position);
    }
}
