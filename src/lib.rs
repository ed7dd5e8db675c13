pub mod adjacency;
pub mod board;
pub mod command;
pub mod error;
pub mod game;
pub mod position;
pub mod render;

pub use adjacency::{neighbor_indices, resolve, Symbol};
pub use board::{Board, Cell, MINE_PROBABILITY};
pub use command::Command;
pub use error::{CommandError, GameError, SessionError};
pub use game::{Action, Game, GamePhase, Outcome, Tile};
pub use position::Position;

/// Board size used by the interactive game.
pub const DEFAULT_COLUMNS: usize = 4;
pub const DEFAULT_ROWS: usize = 4;
