use crate::adjacency::{resolve, Symbol};
use crate::{Board, GameError};
use tracing::{debug, info, instrument};

/// What the player currently sees on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Unrevealed,
    Flagged,
    Revealed(Symbol),
}

impl Tile {
    pub fn is_unrevealed(self) -> bool {
        self == Tile::Unrevealed
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, Tile::Revealed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Reveal,
    Flag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    /// Every tile is covered by a flag or revealed, but the flag count does
    /// not match the mine count.
    Undecided,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Finished(Outcome),
}

/// One game session: the hidden mine layout plus the player's view of it.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    tiles: Vec<Tile>,
}

impl Game {
    /// Starts a session on an existing layout with every tile unrevealed.
    pub fn with_board(board: Board) -> Self {
        let tiles = vec![Tile::Unrevealed; board.len()];
        Self { board, tiles }
    }

    /// Throws away the current layout and starts over on a freshly generated one.
    #[instrument(level = "trace", skip(self))]
    pub fn new_game(&mut self, columns: usize, rows: usize) -> Result<(), GameError> {
        let board = Board::generate(columns, rows)?;
        info!(
            "New {}x{} game with {} mines",
            columns,
            rows,
            board.mines_count()
        );
        *self = Self::with_board(board);
        Ok(())
    }

    pub fn perform_action(&mut self, index: usize, action: Action) -> Result<(), GameError> {
        match action {
            Action::Reveal => self.reveal_tile(index),
            Action::Flag => self.toggle_flag(index),
        }
    }

    /// Reveals one tile. Flagged and already revealed tiles are left alone;
    /// hitting a mine reveals the rest of the board.
    #[instrument(level = "trace", skip(self))]
    pub fn reveal_tile(&mut self, index: usize) -> Result<(), GameError> {
        self.check_index(index)?;

        if !self.tiles[index].is_unrevealed() {
            debug!("Ignoring reveal of tile {}: {:?}", index, self.tiles[index]);
            return Ok(());
        }

        let symbol = resolve(&self.board, index);
        self.tiles[index] = Tile::Revealed(symbol);
        debug!("Revealed tile {} as {}", index, symbol);

        if symbol == Symbol::Mine {
            info!("Mine hit at tile {}, game lost", index);
            self.reveal_all();
        }
        Ok(())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn toggle_flag(&mut self, index: usize) -> Result<(), GameError> {
        self.check_index(index)?;

        if self.is_finished() {
            debug!("Ignoring flag on tile {}: game is finished", index);
            return Ok(());
        }

        self.tiles[index] = match self.tiles[index] {
            Tile::Unrevealed => Tile::Flagged,
            Tile::Flagged => Tile::Unrevealed,
            Tile::Revealed(_) => {
                debug!("Ignoring flag on revealed tile {}", index);
                return Ok(());
            }
        };
        debug!("Tile {} is now {:?}", index, self.tiles[index]);
        Ok(())
    }

    /// Resolves every tile that is not flagged. Flags are kept even when wrong.
    #[instrument(level = "trace", skip(self))]
    pub fn reveal_all(&mut self) {
        let board = &self.board;
        for (index, tile) in self.tiles.iter_mut().enumerate() {
            if *tile != Tile::Flagged {
                *tile = Tile::Revealed(resolve(board, index));
            }
        }
        debug!("Revealed all unflagged tiles");
    }

    /// True once no tile is left unrevealed. Vacuously true before the first game.
    pub fn is_finished(&self) -> bool {
        self.tiles.iter().all(|tile| !tile.is_unrevealed())
    }

    pub fn is_lost(&self) -> bool {
        self.tiles.contains(&Tile::Revealed(Symbol::Mine))
    }

    /// Compares flag count against mine count only; where the flags sit is
    /// not checked.
    pub fn is_won(&self) -> bool {
        !self.is_lost() && self.board.mines_count() == self.flag_count()
    }

    pub fn phase(&self) -> GamePhase {
        if self.board.is_empty() {
            GamePhase::NotStarted
        } else if !self.is_finished() {
            GamePhase::InProgress
        } else if self.is_lost() {
            GamePhase::Finished(Outcome::Lost)
        } else if self.is_won() {
            GamePhase::Finished(Outcome::Won)
        } else {
            GamePhase::Finished(Outcome::Undecided)
        }
    }

    pub fn tile(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.board.dimensions()
    }

    pub fn mine_count(&self) -> usize {
        self.board.mines_count()
    }

    pub fn flag_count(&self) -> usize {
        self.tiles.iter().filter(|&&tile| tile == Tile::Flagged).count()
    }

    fn check_index(&self, index: usize) -> Result<(), GameError> {
        if self.board.is_empty() {
            return Err(GameError::NotStarted);
        }
        if index >= self.tiles.len() {
            return Err(GameError::OutOfBounds {
                index,
                len: self.tiles.len(),
            });
        }
        Ok(())
    }
}
