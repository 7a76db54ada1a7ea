use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Row-major cell index in `0..CELL_COUNT`.
pub type Position = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The player who moves first.
    pub const FIRST: Player = Player::X;

    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            other => Err(format!("Unknown mark '{}', expected X or O", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn mark(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Mark(player) => Some(*player),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::Mark(player) => write!(f, "{}", player),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won(Player),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::InProgress
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            _ => None,
        }
    }
}

/// Row/column view of a position, for front ends that think in grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinates {
    pub row: usize,
    pub col: usize,
}

impl Coordinates {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_position(position: Position) -> Option<Self> {
        if position >= CELL_COUNT {
            return None;
        }
        Some(Self::new(position / BOARD_SIDE, position % BOARD_SIDE))
    }

    pub fn to_position(&self) -> Option<Position> {
        if self.row >= BOARD_SIDE || self.col >= BOARD_SIDE {
            return None;
        }
        Some(self.row * BOARD_SIDE + self.col)
    }
}
