use tictactoe_engine::{Game, Outcome, Player, SearchEngine, SessionRng, audit_engine};

#[test]
fn engine_playing_o_never_loses_to_any_strategy() {
    let report = audit_engine(Player::O);
    assert!(report.games > 0);
    assert_eq!(report.engine_losses, 0);
    assert_eq!(report.games, report.engine_wins + report.draws);
}

#[test]
fn engine_playing_x_never_loses_to_any_strategy() {
    let report = audit_engine(Player::X);
    assert!(report.is_sound());
    assert!(report.engine_wins > 0);
    assert!(report.draws > 0);
}

fn play_against_optimal_human(game: &mut Game, rng: &mut SessionRng) {
    let human = SearchEngine::new(game.human_mark());
    while !game.is_over() {
        if game.is_human_turn() {
            let mut scratch = *game.board();
            let position = human.choose_move(&mut scratch, rng).unwrap();
            game.play_human(position).unwrap();
        } else {
            game.play_engine(rng).unwrap();
        }
    }
}

#[test]
fn corner_opening_by_optimal_human_is_drawn() {
    let mut game = Game::new(Player::X);
    let mut rng = SessionRng::new(0);
    game.play_human(0).unwrap();
    play_against_optimal_human(&mut game, &mut rng);
    assert_eq!(game.outcome(), Outcome::Draw);
    assert!(game.board().is_full());
}

#[test]
fn every_opening_between_optimal_players_is_drawn() {
    for opening in 0..9 {
        let mut game = Game::new(Player::X);
        let mut rng = SessionRng::new(opening as u64);
        game.play_human(opening).unwrap();
        play_against_optimal_human(&mut game, &mut rng);
        assert_eq!(game.outcome(), Outcome::Draw, "opening {}", opening);
    }
}

#[test]
fn engine_opening_as_x_leads_to_draw_against_optimal_human() {
    for seed in 0..9 {
        let mut game = Game::new(Player::O);
        let mut rng = SessionRng::new(seed);
        play_against_optimal_human(&mut game, &mut rng);
        assert_eq!(game.outcome(), Outcome::Draw);
        assert_eq!(game.history().first().map(|(player, _)| *player), Some(Player::X));
    }
}
