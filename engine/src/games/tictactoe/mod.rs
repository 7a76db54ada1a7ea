mod audit;
mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use audit::{AuditReport, audit_engine};
pub use board::Board;
pub use bot_controller::{SearchEngine, SearchResult, SearchStats};
pub use error::{GameError, MoveError};
pub use game_state::Game;
pub use types::{BOARD_SIDE, CELL_COUNT, Cell, Coordinates, Outcome, Player, Position};
pub use win_detector::{LINES, find_winner, is_winning_move, outcome_after};
