use crate::{error::CommandError, Action, Position};
use std::str::FromStr;

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NewGame,
    Reveal(Position),
    Flag(Position),
    RevealAll,
    Help,
    Quit,
}

impl Command {
    pub fn tile_action(self) -> Option<(Position, Action)> {
        match self {
            Command::Reveal(pos) => Some((pos, Action::Reveal)),
            Command::Flag(pos) => Some((pos, Action::Flag)),
            _ => None,
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let word = parts.next().ok_or(CommandError::Empty)?.to_lowercase();

        let command = match word.as_str() {
            "n" | "new" => Command::NewGame,
            "a" | "all" => Command::RevealAll,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" => Command::Quit,
            "r" | "reveal" => Command::Reveal(parse_position(&mut parts)?),
            "f" | "flag" => Command::Flag(parse_position(&mut parts)?),
            _ => return Err(CommandError::Unknown(word)),
        };
        Ok(command)
    }
}

fn parse_position<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<Position, CommandError> {
    let mut coordinate = || {
        let raw = parts.next().ok_or(CommandError::MissingCoordinate)?;
        raw.parse::<i32>()
            .map_err(|_| CommandError::InvalidCoordinate(raw.to_string()))
    };
    let x = coordinate()?;
    let y = coordinate()?;
    Ok(Position::new(x, y))
}
