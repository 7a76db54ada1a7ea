use super::types::{Player, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The target cell already holds a mark. The board is unchanged.
    CellOccupied(Position),
    /// The index is outside `0..9`.
    InvalidPosition(Position),
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::CellOccupied(position) => write!(f, "Cell {} is already marked", position),
            MoveError::InvalidPosition(position) => {
                write!(f, "Position {} is outside the board", position)
            }
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    GameOver,
    NotYourTurn(Player),
    Move(MoveError),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::NotYourTurn(current) => write!(f, "Not your turn, {} is to move", current),
            GameError::Move(e) => write!(f, "Illegal move: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for GameError {
    fn from(e: MoveError) -> Self {
        GameError::Move(e)
    }
}
