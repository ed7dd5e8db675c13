//! Plain-text view of a [`Game`].

use crate::{Game, GamePhase, Outcome, Symbol, Tile};
use itertools::Itertools;

pub const EMPTY_STATE: &str = "enter 'n' for a New Game to start";
pub const CONTROLS: &str = "r x y: Reveal, f x y: flag, a: Reveal All, n: New Game, q: quit";

/// Two columns wide so the grid stays aligned next to the emoji markers.
pub fn tile_glyph(tile: Tile) -> String {
    match tile {
        Tile::Unrevealed => "  ".to_string(),
        Tile::Flagged => "🚩".to_string(),
        Tile::Revealed(Symbol::Mine) => Symbol::Mine.to_string(),
        Tile::Revealed(Symbol::Count(n)) => format!("{:>2}", n),
    }
}

/// Verdict shown once the game is over. An undecided finish has none.
pub fn status_line(game: &Game) -> Option<String> {
    match game.phase() {
        GamePhase::Finished(Outcome::Won) => Some("Game finished: You've won".to_string()),
        GamePhase::Finished(Outcome::Lost) => Some("Game finished: You've lost".to_string()),
        GamePhase::Finished(Outcome::Undecided) | GamePhase::NotStarted | GamePhase::InProgress => {
            None
        }
    }
}

pub fn render(game: &Game) -> String {
    if game.phase() == GamePhase::NotStarted {
        return EMPTY_STATE.to_string();
    }

    let (columns, _) = game.dimensions();
    let mut lines = vec![CONTROLS.to_string()];
    lines.extend(status_line(game));

    let header = (0..columns).map(|x| format!("{:>3}", x)).join("  ");
    lines.push(format!("  {}", header));

    for (y, row) in game.tiles().chunks(columns).enumerate() {
        let cells = row
            .iter()
            .map(|&tile| format!("[{}]", tile_glyph(tile)))
            .join(" ");
        lines.push(format!("{} {}", y, cells));
    }

    lines.join("\n")
}
