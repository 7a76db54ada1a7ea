use super::board::Board;
use super::types::{BOARD_SIDE, CELL_COUNT, Cell, Outcome, Player, Position};

/// Every three-in-a-row: rows, columns, main diagonal, anti-diagonal.
pub const LINES: [[Position; BOARD_SIDE]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

const MAIN_DIAGONAL: [Position; BOARD_SIDE] = [0, 4, 8];
const ANTI_DIAGONAL: [Position; BOARD_SIDE] = [2, 4, 6];

fn line_held_by(board: &Board, line: impl IntoIterator<Item = Position>, player: Player) -> bool {
    line.into_iter()
        .all(|position| board.cell(position) == Some(Cell::Mark(player)))
}

/// Whether `player`, having just marked `position`, now holds a line through it.
///
/// Checks the row, then the column, then (for even positions only) the two
/// diagonals. Odd positions are never on a diagonal.
pub fn is_winning_move(board: &Board, position: Position, player: Player) -> bool {
    if position >= CELL_COUNT {
        return false;
    }

    let row_start = (position / BOARD_SIDE) * BOARD_SIDE;
    if line_held_by(board, row_start..row_start + BOARD_SIDE, player) {
        return true;
    }

    let col = position % BOARD_SIDE;
    if line_held_by(board, (col..CELL_COUNT).step_by(BOARD_SIDE), player) {
        return true;
    }

    if position % 2 == 0 {
        if line_held_by(board, MAIN_DIAGONAL, player) {
            return true;
        }
        if line_held_by(board, ANTI_DIAGONAL, player) {
            return true;
        }
    }

    false
}

/// Scans all eight lines. Used when the last move is not known.
pub fn find_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| {
        let first = board.cell(line[0])?.mark()?;
        line_held_by(board, line.iter().copied(), first).then_some(first)
    })
}

/// Outcome of the game right after `player` marked `position`.
pub fn outcome_after(board: &Board, position: Position, player: Player) -> Outcome {
    if is_winning_move(board, position, player) {
        Outcome::Won(player)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
