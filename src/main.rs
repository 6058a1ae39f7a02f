//! Interactive match-three runner (default binary).
//!
//! Builds a board, starts a session with a seeded random filling strategy
//! and a horizontal+vertical run matcher, then reads one move per stdin
//! line and prints the board and score after each accepted move.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Result};

use match_three::core::{
    Alphabet, Board, Game, MaximumDeltaMatcher, Move, MultiMatcher, RandomStrategy,
};
use match_three::types::{Delta, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Config {
    tokens: String,
    board: Option<String>,
    width: usize,
    height: usize,
    seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tokens: String::from("AXO*"),
            board: None,
            width: 6,
            height: 6,
            seed: 1,
        }
    }
}

fn parse_args(args: &[String]) -> Result<Config> {
    let mut config = Config::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--tokens" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --tokens"))?;
                config.tokens = v.clone();
            }
            "--board" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --board"))?;
                config.board = Some(v.clone());
            }
            "--width" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --width"))?;
                config.width = v
                    .parse()
                    .map_err(|_| anyhow!("invalid --width value: {}", v))?;
            }
            "--height" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --height"))?;
                config.height = v
                    .parse()
                    .map_err(|_| anyhow!("invalid --height value: {}", v))?;
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

/// Parse a move command. Returns Ok(None) on `quit`.
fn parse_move(line: &str) -> Result<Option<Move>> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let position = |idx: usize| -> Result<Position> {
        let x = parts
            .get(idx)
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| anyhow!("expected a column number"))?;
        let y = parts
            .get(idx + 1)
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| anyhow!("expected a row number"))?;
        Ok(Position::new(x, y))
    };
    let index = |idx: usize| -> Result<usize> {
        parts
            .get(idx)
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| anyhow!("expected an index"))
    };

    match parts.first().copied() {
        None => Err(anyhow!("empty command")),
        Some("quit") | Some("q") => Ok(None),
        Some("flip-right") => Ok(Some(Move::flip_right(position(1)?))),
        Some("flip-down") => Ok(Some(Move::flip_down(position(1)?))),
        Some("rotate-square") => Ok(Some(Move::rotate_square_clockwise(position(1)?))),
        Some("rotate-column") => Ok(Some(Move::rotate_column_down(index(1)?))),
        Some("rotate-row") => Ok(Some(Move::rotate_row_right(index(1)?))),
        Some(other) => Err(anyhow!("unknown move: {}", other)),
    }
}

fn print_board(game: &Game) {
    let board = game.board();
    println!("   {}", "-".repeat(board.width()));
    for row in board.to_token_string().split(';') {
        println!("  |{row}|");
    }
    println!("   {}", "-".repeat(board.width()));
    println!("  score: {}", game.score());
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    let alphabet = Alphabet::parse(&config.tokens)?;
    let mut board = match &config.board {
        Some(s) => Board::from_token_string(alphabet.clone(), s)?,
        None => Board::new(alphabet.clone(), config.width, config.height)?,
    };
    board.set_filling_strategy(Box::new(RandomStrategy::new(&alphabet, config.seed)));

    let matcher = MultiMatcher::new(
        Box::new(MaximumDeltaMatcher::new([Delta::new(1, 0)])?),
        Box::new(MaximumDeltaMatcher::new([Delta::new(0, 1)])?),
    );
    let mut game = Game::new(board, Box::new(matcher));
    game.initialize_and_start()?;

    println!("moves: flip-right X Y | flip-down X Y | rotate-square X Y | rotate-column C | rotate-row R | quit");
    print_board(&game);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_move(line) {
            Ok(None) => break,
            Ok(Some(mv)) => match game.accept_move(mv) {
                Ok(()) => print_board(&game),
                Err(e) => println!("  rejected: {e}"),
            },
            Err(e) => println!("  {e}"),
        }
    }

    println!("final score: {}", game.score());
    Ok(())
}
