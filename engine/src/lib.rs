pub mod config;
pub mod games;
pub mod logger;

pub use games::SessionRng;
pub use games::tictactoe::{
    AuditReport, BOARD_SIDE, Board, CELL_COUNT, Cell, Coordinates, Game, GameError, MoveError,
    Outcome, Player, Position, SearchEngine, SearchResult, SearchStats, audit_engine,
};
