use std::io::{self, BufRead, Write};
use tictactoe_engine::{
    BOARD_SIDE, CELL_COUNT, Coordinates, Game, GameError, MoveError, Outcome, Player, Position,
    SessionRng, log,
};

/// Parses `1`-`9` (keypad order, top-left first) or `row,col` with 1-based
/// rows and columns.
pub fn parse_position(input: &str) -> Result<Position, String> {
    let input = input.trim();
    let parts: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [single] => {
            let number: usize = single
                .parse()
                .map_err(|_| format!("'{}' is not a cell number", single))?;
            if number == 0 || number > CELL_COUNT {
                return Err(format!("Cell number must be between 1 and {}", CELL_COUNT));
            }
            Ok(number - 1)
        }
        [row, col] => {
            let row: usize = row.parse().map_err(|_| format!("'{}' is not a row", row))?;
            let col: usize = col.parse().map_err(|_| format!("'{}' is not a column", col))?;
            if row == 0 || col == 0 {
                return Err(format!("Rows and columns are numbered 1 to {}", BOARD_SIDE));
            }
            Coordinates::new(row - 1, col - 1)
                .to_position()
                .ok_or_else(|| format!("Rows and columns are numbered 1 to {}", BOARD_SIDE))
        }
        _ => Err("Enter a cell number 1-9 or row,col".to_string()),
    }
}

fn end_message(outcome: Outcome, human_mark: Player) -> &'static str {
    match outcome.winner() {
        Some(winner) if winner == human_mark => "Congratulations, you win!",
        Some(_) => "You lost. Good game.",
        None => "It's a tie!",
    }
}

/// Runs one interactive game until it ends. Returns `UnexpectedEof` if the
/// input runs out first.
pub fn run_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    game: &mut Game,
    rng: &mut SessionRng,
) -> io::Result<Outcome> {
    writeln!(
        output,
        "You play {}, the engine plays {}. {} moves first.",
        game.human_mark(),
        game.engine_mark(),
        Player::FIRST
    )?;

    while !game.is_over() {
        if game.is_human_turn() {
            write!(output, "{}\nYour move (1-9 or row,col): ", game.board())?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before the game ended",
                ));
            }

            let position = match parse_position(&line) {
                Ok(position) => position,
                Err(reason) => {
                    writeln!(output, "{}", reason)?;
                    continue;
                }
            };

            match game.play_human(position) {
                Ok(_) => {}
                Err(GameError::Move(MoveError::CellOccupied(position))) => {
                    writeln!(output, "Cell {} is already taken, pick another.", position + 1)?
                }
                Err(GameError::Move(e)) => writeln!(output, "{}", e)?,
                Err(e) => return Err(io::Error::other(e)),
            }
        } else {
            let (position, _) = game.play_engine(rng).map_err(io::Error::other)?;
            log!("Engine {} played {}", game.engine_mark(), position);
            writeln!(output, "Engine plays {}.", position + 1)?;
        }
    }

    writeln!(output, "{}", game.board())?;
    writeln!(output, "{}", end_message(game.outcome(), game.human_mark()))?;
    Ok(game.outcome())
}
