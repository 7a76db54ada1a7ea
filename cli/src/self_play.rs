use tictactoe_engine::{Board, Outcome, Player, SearchEngine, SessionRng, log_debug};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelfPlayTally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl SelfPlayTally {
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Player::X) => self.x_wins += 1,
            Outcome::Won(Player::O) => self.o_wins += 1,
            _ => self.draws += 1,
        }
    }
}

/// Plays one engine-versus-engine game from an empty board.
pub fn play_one(rng: &mut SessionRng) -> (Board, Outcome) {
    let engines = [SearchEngine::new(Player::X), SearchEngine::new(Player::O)];
    let mut board = Board::new();
    let mut turn = 0;

    while let Some(position) = engines[turn % 2].choose_move(&mut board, rng) {
        let mark = engines[turn % 2].mark();
        if board.apply_move(mark, position).is_err() {
            break;
        }
        turn += 1;
    }

    (board, board.outcome())
}

pub fn run_self_play(games: u32, rng: &mut SessionRng) -> SelfPlayTally {
    let mut tally = SelfPlayTally::default();
    for game in 0..games {
        let (board, outcome) = play_one(rng);
        log_debug!("Self-play game {} ended {:?}\n{}", game + 1, outcome, board);
        tally.record(outcome);
    }
    tally
}
