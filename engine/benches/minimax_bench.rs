use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_engine::{Board, Player, SearchEngine, SessionRng, audit_engine};

fn board_after(moves: &[usize]) -> Board {
    let mut board = Board::new();
    let mut player = Player::X;
    for &position in moves {
        board.apply_move(player, position).unwrap();
        player = player.opponent();
    }
    board
}

fn bench_reply_to_corner_opening(c: &mut Criterion) {
    c.bench_function("minimax_reply_to_corner", |b| {
        let engine = SearchEngine::new(Player::O);
        let mut rng = SessionRng::new(0);
        let mut board = board_after(&[0]);
        b.iter(|| engine.choose_move(black_box(&mut board), &mut rng));
    });
}

fn bench_full_empty_board_search(c: &mut Criterion) {
    c.bench_function("minimax_full_tree_from_empty", |b| {
        let engine = SearchEngine::new(Player::X);
        let mut board = Board::new();
        b.iter(|| engine.maximize(black_box(&mut board)));
    });
}

fn bench_mid_game(c: &mut Criterion) {
    c.bench_function("minimax_mid_game", |b| {
        let engine = SearchEngine::new(Player::X);
        let mut rng = SessionRng::new(0);
        let mut board = board_after(&[4, 0, 8, 2]);
        b.iter(|| engine.choose_move(black_box(&mut board), &mut rng));
    });
}

fn bench_self_play_game(c: &mut Criterion) {
    c.bench_function("minimax_self_play_game", |b| {
        let engines = [SearchEngine::new(Player::X), SearchEngine::new(Player::O)];
        let mut rng = SessionRng::new(1);
        b.iter(|| {
            let mut board = Board::new();
            let mut turn = 0;
            while let Some(position) = engines[turn % 2].choose_move(&mut board, &mut rng) {
                board.apply_move(engines[turn % 2].mark(), position).unwrap();
                turn += 1;
            }
            board.outcome()
        });
    });
}

fn bench_audit(c: &mut Criterion) {
    let mut group = c.benchmark_group("audit");
    group.sample_size(10);
    group.bench_function("audit_engine_as_o", |b| b.iter(|| audit_engine(Player::O)));
    group.finish();
}

criterion_group!(
    benches,
    bench_reply_to_corner_opening,
    bench_full_empty_board_search,
    bench_mid_game,
    bench_self_play_game,
    bench_audit
);
criterion_main!(benches);
