#![allow(dead_code)]

use tictactoe_engine::{Board, Player};

/// Every position reachable from the empty board by legal play, including
/// finished ones, paired with the side to move.
pub fn reachable_positions() -> Vec<(Board, Player)> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    collect(Board::new(), Player::X, &mut seen, &mut out);
    out
}

fn collect(
    board: Board,
    to_move: Player,
    seen: &mut std::collections::HashSet<Board>,
    out: &mut Vec<(Board, Player)>,
) {
    if !seen.insert(board) {
        return;
    }
    out.push((board, to_move));
    if board.outcome().is_terminal() {
        return;
    }
    for position in board.available_moves() {
        let mut next = board;
        next.apply_move(to_move, position).unwrap();
        collect(next, to_move.opponent(), seen, out);
    }
}

/// Cells where `player` would complete a line right now.
pub fn winning_cells(board: &Board, player: Player) -> Vec<usize> {
    board
        .available_moves()
        .into_iter()
        .filter(|&position| {
            let mut next = *board;
            next.apply_move(player, position).unwrap();
            next.outcome().winner() == Some(player)
        })
        .collect()
}
