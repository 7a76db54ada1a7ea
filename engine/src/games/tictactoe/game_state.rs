use crate::games::SessionRng;
use crate::log;

use super::board::Board;
use super::bot_controller::SearchEngine;
use super::error::GameError;
use super::types::{Outcome, Player, Position};
use super::win_detector::outcome_after;

/// One human-versus-engine game. X always moves first.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    human_mark: Player,
    engine: SearchEngine,
    current_player: Player,
    outcome: Outcome,
    history: Vec<(Player, Position)>,
}

impl Game {
    pub fn new(human_mark: Player) -> Self {
        Self {
            board: Board::new(),
            human_mark,
            engine: SearchEngine::new(human_mark.opponent()),
            current_player: Player::FIRST,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_mark(&self) -> Player {
        self.human_mark
    }

    pub fn engine_mark(&self) -> Player {
        self.engine.mark()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn is_human_turn(&self) -> bool {
        self.current_player == self.human_mark
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn history(&self) -> &[(Player, Position)] {
        &self.history
    }

    pub fn play_human(&mut self, position: Position) -> Result<Outcome, GameError> {
        self.ensure_turn(self.human_mark)?;
        self.place_mark(position)
    }

    pub fn play_engine(&mut self, rng: &mut SessionRng) -> Result<(Position, Outcome), GameError> {
        self.ensure_turn(self.engine.mark())?;

        // A game in progress always has an empty cell, so the engine always
        // has a move here.
        let position = self
            .engine
            .choose_move(&mut self.board, rng)
            .ok_or(GameError::GameOver)?;
        let outcome = self.place_mark(position)?;
        Ok((position, outcome))
    }

    fn ensure_turn(&self, player: Player) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.current_player != player {
            return Err(GameError::NotYourTurn(self.current_player));
        }
        Ok(())
    }

    fn place_mark(&mut self, position: Position) -> Result<Outcome, GameError> {
        let player = self.current_player;
        self.board.apply_move(player, position)?;
        self.history.push((player, position));
        self.outcome = outcome_after(&self.board, position, player);

        if self.outcome.is_terminal() {
            log!("Game over after {} moves: {:?}", self.history.len(), self.outcome);
        } else {
            self.current_player = player.opponent();
        }

        Ok(self.outcome)
    }
}
