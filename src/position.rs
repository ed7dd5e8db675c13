/// Column/row address of a tile. The board itself is addressed by row-major
/// index; this is the form players type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn from_index(index: usize, columns: usize) -> Self {
        Self::new((index % columns) as i32, (index / columns) as i32)
    }

    /// Row-major index, or `None` when the position lies off the board.
    pub fn to_index(self, columns: usize, rows: usize) -> Option<usize> {
        let in_bounds =
            self.x >= 0 && (self.x as usize) < columns && self.y >= 0 && (self.y as usize) < rows;
        in_bounds.then(|| self.y as usize * columns + self.x as usize)
    }

    pub fn neighbors(&self) -> impl Iterator<Item = Position> + '_ {
        (-1..=1).flat_map(move |dy| {
            (-1..=1).filter_map(move |dx| {
                if dx == 0 && dy == 0 {
                    None
                } else {
                    Some(Position::new(self.x + dx, self.y + dy))
                }
            })
        })
    }
}
