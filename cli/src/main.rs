mod audit;
mod config;
mod play;
mod self_play;

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tictactoe_engine::config::Validate;
use tictactoe_engine::{Game, Player, SessionRng, log, logger};

use config::{CliConfig, get_config_manager};

#[derive(Parser)]
#[command(name = "tictactoe_cli", about = "Play tic-tac-toe against a minimax engine")]
struct Args {
    /// YAML config file. Defaults to tictactoe_config.yaml next to the binary.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    use_log_prefix: bool,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play against the engine in the terminal.
    Play {
        /// Your mark. X moves first.
        #[arg(long)]
        mark: Option<Player>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play the engine against every possible opponent strategy.
    Audit,
    /// Let the engine play itself.
    SelfPlay {
        #[arg(long)]
        games: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config: CliConfig = get_config_manager(args.config.clone()).get_config()?;

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose || config.verbose);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match args.command.unwrap_or(Command::Play {
        mark: None,
        seed: None,
    }) {
        Command::Play { mark, seed } => {
            let mut rng = SessionRng::from_optional_seed(seed.or(config.seed));
            let mut game = Game::new(mark.unwrap_or(config.human_mark));
            log!("Starting game with seed {}", rng.seed());
            play::run_game(&mut stdin.lock(), &mut stdout, &mut game, &mut rng)?;
        }
        Command::Audit => {
            let reports = audit::run_audit(&mut stdout)?;
            if reports.iter().any(|(_, report)| !report.is_sound()) {
                return Err("engine lost at least one audited game".into());
            }
        }
        Command::SelfPlay { games, seed } => {
            let overrides = CliConfig {
                self_play_games: games.unwrap_or(config.self_play_games),
                ..config.clone()
            };
            overrides.validate()?;

            let mut rng = SessionRng::from_optional_seed(seed.or(config.seed));
            log!(
                "Running {} self-play games with seed {}",
                overrides.self_play_games,
                rng.seed()
            );
            let tally = self_play::run_self_play(overrides.self_play_games, &mut rng);
            println!(
                "{} games: {} X wins, {} O wins, {} draws",
                tally.games(),
                tally.x_wins,
                tally.o_wins,
                tally.draws
            );
        }
    }

    Ok(())
}
