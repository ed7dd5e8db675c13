use crate::GameError;
use rand::Rng;
use std::str::FromStr;
use tracing::debug;

/// Chance that any single tile holds a mine.
pub const MINE_PROBABILITY: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Mine,
}

impl Cell {
    pub fn is_mine(self) -> bool {
        self == Cell::Mine
    }
}

/// Mine layout for one game, stored row-major. Never changes once generated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: Vec<Cell>,
    columns: usize,
    rows: usize,
}

impl Board {
    /// Generates a fresh layout where every tile is independently a mine
    /// with probability [`MINE_PROBABILITY`].
    pub fn generate(columns: usize, rows: usize) -> Result<Self, GameError> {
        Self::generate_with(&mut rand::thread_rng(), columns, rows)
    }

    pub fn generate_with<R: Rng + ?Sized>(
        rng: &mut R,
        columns: usize,
        rows: usize,
    ) -> Result<Self, GameError> {
        let len = check_dimensions(columns, rows)?;

        let cells = (0..len)
            .map(|_| {
                if rng.gen_bool(MINE_PROBABILITY) {
                    Cell::Mine
                } else {
                    Cell::Empty
                }
            })
            .collect();

        let board = Self {
            cells,
            columns,
            rows,
        };
        debug!(
            "Generated {}x{} board with {} mines",
            columns,
            rows,
            board.mines_count()
        );
        Ok(board)
    }

    pub fn from_layout(columns: usize, rows: usize, cells: Vec<Cell>) -> Result<Self, GameError> {
        let len = check_dimensions(columns, rows)?;
        if cells.len() != len {
            return Err(GameError::LayoutMismatch {
                expected: len,
                actual: cells.len(),
            });
        }
        Ok(Self {
            cells,
            columns,
            rows,
        })
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    pub fn mines_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_mine()).count()
    }
}

/// Tile count of a `columns` x `rows` board.
fn check_dimensions(columns: usize, rows: usize) -> Result<usize, GameError> {
    match columns.checked_mul(rows) {
        Some(len) if len > 0 => Ok(len),
        _ => Err(GameError::InvalidDimensions { columns, rows }),
    }
}

/// Parses a layout drawn one row per line, `*` for a mine and `.` for an
/// empty tile.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let rows = lines.len();
        let columns = lines.first().map_or(0, |line| line.chars().count());

        let cells = lines
            .iter()
            .flat_map(|line| line.chars())
            .map(|c| match c {
                '*' => Ok(Cell::Mine),
                '.' => Ok(Cell::Empty),
                other => Err(GameError::InvalidLayoutChar(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Board::from_layout(columns, rows, cells)
    }
}
