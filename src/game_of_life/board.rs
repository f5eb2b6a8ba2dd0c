//! Board representation for Game of Life

use super::error::{BoardError, Result};
use serde::{Deserialize, Serialize};

/// A single cell as seen by a renderer: its position and whether it lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub alive: bool,
}

/// A fixed-size Game of Life board.
///
/// Cells are stored row-major in one flat buffer of `height * width` alive
/// flags. The dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

/// Unchecked serde shape, validated on the way into [`Board`]
#[derive(Deserialize)]
struct BoardRepr {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = String;

    fn try_from(repr: BoardRepr) -> std::result::Result<Self, Self::Error> {
        let expected = repr
            .height
            .checked_mul(repr.width)
            .ok_or_else(|| format!("{}x{} board is too large", repr.height, repr.width))?;
        if repr.cells.len() != expected {
            return Err(format!(
                "{}x{} board needs {} cells, got {}",
                repr.height,
                repr.width,
                expected,
                repr.cells.len()
            ));
        }
        Ok(Self {
            height: repr.height,
            width: repr.width,
            cells: repr.cells,
        })
    }
}

impl Board {
    /// Create a board with every cell dead
    pub fn new(height: usize, width: usize) -> Result<Self> {
        let allocation = || BoardError::Allocation { height, width };

        let len = height.checked_mul(width).ok_or_else(allocation)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| allocation())?;
        cells.resize(len, false);

        Ok(Self { height, width, cells })
    }

    /// Create a board from a 2D boolean array (rows of equal length)
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(BoardError::parse(format!(
                    "row {} has length {}, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
        }

        Self::from_cells(height, width, rows.into_iter().flatten().collect())
    }

    /// Take ownership of a row-major buffer of `height * width` alive flags
    pub fn from_cells(height: usize, width: usize, cells: Vec<bool>) -> Result<Self> {
        let len = height
            .checked_mul(width)
            .ok_or(BoardError::Allocation { height, width })?;
        if cells.len() != len {
            return Err(BoardError::parse(format!(
                "{}x{} board needs {} cells, got {}",
                height,
                width,
                len,
                cells.len()
            )));
        }
        Ok(Self { height, width, cells })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Convert 2D coordinates to a flat index
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Whether the cell at (row, col) is alive. Out of bounds cells are dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && self.cells[self.index(row, col)]
    }

    /// The cell at (row, col), or `None` outside the board
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.in_bounds(row, col).then(|| Cell {
            row,
            col,
            alive: self.cells[self.index(row, col)],
        })
    }

    /// Iterate every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().map(move |(i, &alive)| Cell {
            row: i / self.width,
            col: i % self.width,
            alive,
        })
    }

    /// Raw row-major alive flags
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Bring the cell in column `x`, row `y` to life
    pub fn place_cell(&mut self, x: usize, y: usize) -> Result<()> {
        self.set_cell(x, y, true)
    }

    /// Set the cell in column `x`, row `y` alive or dead
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        if !self.in_bounds(y, x) {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(y, x);
        self.cells[idx] = alive;
        Ok(())
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Replace the whole generation at once. Callers guarantee the length.
    pub(crate) fn replace_cells(&mut self, next: Vec<bool>) {
        debug_assert_eq!(next.len(), self.cells.len());
        self.cells = next;
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Check if the board has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&alive| !alive)
    }

    /// Get all living cell coordinates as (row, col)
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells()
            .filter(|cell| cell.alive)
            .map(|cell| (cell.row, cell.col))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_creation() {
        let board = Board::new(4, 3).unwrap();
        assert_eq!(board.height(), 4);
        assert_eq!(board.width(), 3);
        assert_eq!(board.as_slice().len(), 12);
        assert!(board.is_empty());
        assert!(board.cells().all(|cell| !cell.alive));
    }

    #[test]
    fn test_zero_sized_board() {
        let board = Board::new(0, 5).unwrap();
        assert_eq!(board.cells().count(), 0);
        assert!(board.cell(0, 0).is_none());
    }

    #[test]
    fn test_allocation_overflow_is_an_error() {
        let result = Board::new(usize::MAX, 2);
        assert!(matches!(
            result,
            Err(BoardError::Allocation { height: usize::MAX, width: 2 })
        ));
    }

    #[test]
    fn test_place_cell_uses_column_then_row() {
        let mut board = Board::new(3, 5).unwrap();
        board.place_cell(4, 1).unwrap();

        assert!(board.is_alive(1, 4));
        assert_eq!(board.living_count(), 1);
        assert_eq!(board.living_cells(), vec![(1, 4)]);
        assert_eq!(board.cell(1, 4), Some(Cell { row: 1, col: 4, alive: true }));
    }

    #[test]
    fn test_place_cell_leaves_others_unchanged() {
        for (height, width) in [(1, 1), (3, 7), (6, 2)] {
            for y in 0..height {
                for x in 0..width {
                    let mut board = Board::from_rows(
                        (0..height)
                            .map(|r| (0..width).map(|c| (r * 7 + c) % 3 == 0).collect())
                            .collect(),
                    )
                    .unwrap();
                    let before = board.clone();

                    board.place_cell(x, y).unwrap();

                    assert!(board.is_alive(y, x));
                    for cell in board.cells().filter(|c| (c.row, c.col) != (y, x)) {
                        assert_eq!(cell.alive, before.is_alive(cell.row, cell.col));
                    }
                }
            }
        }
    }

    #[test]
    fn test_place_cell_out_of_bounds() {
        let mut board = Board::new(5, 5).unwrap();
        let err = board.place_cell(5, 0).unwrap_err();
        assert!(matches!(
            err,
            BoardError::OutOfBounds { x: 5, y: 0, width: 5, height: 5 }
        ));
        assert!(board.place_cell(0, 5).is_err());
        assert!(board.is_empty());
    }

    #[test]
    fn test_set_cell_and_clear() {
        let mut board = Board::new(2, 2).unwrap();
        board.set_cell(1, 1, true).unwrap();
        board.set_cell(0, 1, true).unwrap();
        board.set_cell(1, 1, false).unwrap();
        assert_eq!(board.living_cells(), vec![(1, 0)]);

        board.clear();
        assert!(board.is_empty());
    }

    #[test]
    fn test_out_of_bounds_reads_are_dead() {
        let mut board = Board::new(2, 2).unwrap();
        board.place_cell(1, 1).unwrap();
        assert!(!board.is_alive(2, 1));
        assert!(!board.is_alive(1, 2));
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let rows = vec![vec![true, false], vec![true]];
        assert!(matches!(Board::from_rows(rows), Err(BoardError::Parse { .. })));
    }

    #[test]
    fn test_from_cells_checks_length() {
        let board = Board::from_cells(2, 2, vec![false, true, true, false]).unwrap();
        assert_eq!(board.living_cells(), vec![(0, 1), (1, 0)]);

        let err = Board::from_cells(2, 2, vec![true]).unwrap_err();
        assert!(matches!(err, BoardError::Parse { .. }));
    }

    #[test]
    fn test_json_validates_cell_count() {
        let ok = r#"{"height":1,"width":2,"cells":[true,false]}"#;
        let board: Board = serde_json::from_str(ok).unwrap();
        assert!(board.is_alive(0, 0));

        let short = r#"{"height":2,"width":2,"cells":[true,false]}"#;
        assert!(serde_json::from_str::<Board>(short).is_err());
    }
}
