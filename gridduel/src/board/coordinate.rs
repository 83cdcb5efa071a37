/// The coordinates of a [`GridCell`][crate::board::grid::GridCell] in the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Cell {
    /// Row of the cell, counted from the top.
    pub row: usize,
    /// Column of the cell, counted from the left.
    pub col: usize,
}

impl Cell {
    /// Construct a [`Cell`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    /// Construct a [`Cell`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (usize, usize) {
    /// Convert the [`Cell`] into a `(row, col)` pair.
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}
