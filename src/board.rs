use std::fmt;

/// A rectangular grid of tile values in a single flat row-major buffer.
///
/// A cell holds 0 when empty, otherwise a positive power of two. Dimensions
/// are fixed for the lifetime of the board. `Clone` is a deep copy with
/// independent storage and `PartialEq` compares every cell, which is all the
/// simulation code needs to take and check scratch copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Creates a zero-initialized board.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be non-zero");
        Board {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Builds a board from explicit rows. All rows must have the same length.
    pub fn from_rows(rows: &[&[u32]]) -> Self {
        assert!(!rows.is_empty(), "board must have at least one row");
        let cols = rows[0].len();
        assert!(
            rows.iter().all(|row| row.len() == cols),
            "all rows must have the same length"
        );
        Board {
            rows: rows.len(),
            cols,
            cells: rows.concat(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value of the cell at (row, col). This is the read accessor a renderer
    /// uses to draw the board.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, val: u32) {
        self.cells[row * self.cols + col] = val;
    }

    /// Coordinates of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.get(row, col) == 0 {
                    empty.push((row, col));
                }
            }
        }
        empty
    }

    /// Highest tile value on the board; 0 when the board is empty.
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of every tile value on the board.
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(7 * self.cols + self.cols - 1);
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f, "{}", rule)?;
            }
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.get(row, col) {
                    0 => write!(f, "{:7}", "")?,
                    val => write!(f, "{:^7}", val)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_starts_empty() {
        let board = Board::new(4, 4);
        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 4);
        assert_eq!(board.empty_cells().len(), 16);
        assert_eq!(board.max_tile(), 0);
        assert_eq!(board.total(), 0);
    }

    #[test]
    fn it_indexes_row_major() {
        let board = Board::from_rows(&[&[2, 4, 8], &[16, 32, 64]]);
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 3);
        assert_eq!(board.get(0, 0), 2);
        assert_eq!(board.get(0, 2), 8);
        assert_eq!(board.get(1, 1), 32);
        assert_eq!(board.max_tile(), 64);
    }

    #[test]
    fn it_clones_independent_storage() {
        let original = Board::from_rows(&[&[2, 0], &[0, 4]]);
        let mut copy = original.clone();
        assert_eq!(copy, original);
        copy.set(0, 1, 8);
        assert_ne!(copy, original);
        assert_eq!(original.get(0, 1), 0);
    }

    #[test]
    fn it_lists_empty_cells() {
        let board = Board::from_rows(&[&[2, 0, 4], &[0, 8, 0]]);
        assert_eq!(board.empty_cells(), vec![(0, 1), (1, 0), (1, 2)]);
    }
}
