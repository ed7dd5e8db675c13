use crate::Board;
use std::fmt;

/// What a tile shows once it is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Mine,
    Count(u8),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Mine => f.write_str("💣"),
            Symbol::Count(n) => write!(f, "{}", n),
        }
    }
}

/// Indices of the in-bounds neighbours of `index` on a `columns` x `rows`
/// board. Tiles on the left or right edge never pick up neighbours from the
/// adjacent row.
///
/// # Panics
///
/// Panics if `index` is not a tile of the board, which includes every index
/// on a board with zero columns or rows.
pub fn neighbor_indices(index: usize, columns: usize, rows: usize) -> Vec<usize> {
    assert!(
        index < columns.saturating_mul(rows),
        "tile {} out of bounds for {}x{} board",
        index,
        columns,
        rows
    );
    let len = (columns * rows) as isize;
    let i = index as isize;
    let cols = columns as isize;
    let mut candidates = Vec::with_capacity(8);

    if (index + 1) % columns != 0 {
        candidates.extend([i - cols + 1, i + 1, i + cols + 1]);
    }
    if index % columns != 0 {
        candidates.extend([i - cols - 1, i - 1, i + cols - 1]);
    }
    if i - cols >= 0 {
        candidates.push(i - cols);
    }
    if i + cols < len {
        candidates.push(i + cols);
    }

    // diagonals computed above can still fall off the top or bottom row
    candidates
        .into_iter()
        .filter(|&c| (0..len).contains(&c))
        .map(|c| c as usize)
        .collect()
}

/// Symbol shown for `index`: the mine itself, or the number of mines around it.
///
/// # Panics
///
/// Panics if `index` is outside the board.
pub fn resolve(board: &Board, index: usize) -> Symbol {
    assert!(
        index < board.len(),
        "tile {} out of bounds for board of {} tiles",
        index,
        board.len()
    );

    let cells = board.cells();
    if cells[index].is_mine() {
        return Symbol::Mine;
    }

    let (columns, rows) = board.dimensions();
    let mines = neighbor_indices(index, columns, rows)
        .into_iter()
        .filter(|&n| cells[n].is_mine())
        .count();
    Symbol::Count(mines as u8)
}
