use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use minefield::{
    render, Command, Game, GameError, SessionError, DEFAULT_COLUMNS, DEFAULT_ROWS,
};
use std::io::{self, BufRead, Write};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper on a 4x4 grid", long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    match run_game(stdin.lock(), &mut io::stdout()) {
        Ok(_) => println!("Thanks for playing!"),
        Err(e) => eprintln!("Game error: {}", e),
    }
}

fn run_game<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<(), SessionError> {
    let mut game = Game::default();
    let mut lines = input.lines();

    loop {
        writeln!(out, "{}\n", render::render(&game))?;
        write!(out, "> ")?;
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                continue;
            }
        };
        debug!("Command: {:?}", command);

        match command {
            Command::Quit => return Ok(()),
            Command::Help => writeln!(out, "{}", render::CONTROLS)?,
            Command::NewGame => game.new_game(DEFAULT_COLUMNS, DEFAULT_ROWS)?,
            Command::RevealAll if game.is_finished() => {
                writeln!(out, "The game is already finished")?;
            }
            Command::RevealAll => game.reveal_all(),
            Command::Reveal(_) | Command::Flag(_) => {
                if let Err(e) = apply_tile_command(&mut game, command, out)? {
                    writeln!(out, "Error: {}", e)?;
                }
            }
        }
    }
}

/// Outer error is terminal I/O, inner is a rejected move the player can retry.
fn apply_tile_command<W: Write>(
    game: &mut Game,
    command: Command,
    out: &mut W,
) -> io::Result<Result<(), GameError>> {
    let Some((pos, action)) = command.tile_action() else {
        return Ok(Ok(()));
    };
    if game.board().is_empty() {
        return Ok(Err(GameError::NotStarted));
    }
    // finished boards take no more tile input
    if game.is_finished() {
        writeln!(out, "The game is finished, enter 'n' for a New Game")?;
        return Ok(Ok(()));
    }

    let (columns, rows) = game.dimensions();
    match pos.to_index(columns, rows) {
        Some(index) => Ok(game.perform_action(index, action)),
        None => {
            writeln!(out, "Position ({}, {}) is off the board", pos.x, pos.y)?;
            Ok(Ok(()))
        }
    }
}
