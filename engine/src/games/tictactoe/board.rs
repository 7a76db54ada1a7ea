use std::fmt;

use super::error::MoveError;
use super::types::{BOARD_SIDE, CELL_COUNT, Cell, Outcome, Player, Position};
use super::win_detector::find_winner;

/// The 3×3 grid, row-major. A plain value: copy it to branch, compare it to
/// check nothing moved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `position` for `player`. Fails without touching the board if the
    /// index is out of range or the cell is taken.
    pub fn apply_move(&mut self, player: Player, position: Position) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(position)
            .ok_or(MoveError::InvalidPosition(position))?;

        if !cell.is_empty() {
            return Err(MoveError::CellOccupied(position));
        }

        *cell = Cell::Mark(player);
        Ok(())
    }

    /// Undoes a mark during search backtracking.
    pub(crate) fn clear(&mut self, position: Position) {
        self.cells[position] = Cell::Empty;
    }

    pub(crate) fn place(&mut self, player: Player, position: Position) {
        debug_assert!(self.cells[position].is_empty());
        self.cells[position] = Cell::Mark(player);
    }

    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Empty cells in ascending index order.
    pub fn available_moves(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(position, _)| position)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(winner) = find_winner(self) {
            Outcome::Won(winner)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            writeln!(f, " {} | {} | {} ", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}
