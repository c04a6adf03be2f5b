pub mod maker;

use std::fmt;

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

pub use maker::Carver;
use maker::MazeMaker;

/// A carved maze as two passage matrices. `vertical_open[row][col]` is true
/// when there is no wall between `(row, col)` and `(row, col + 1)`;
/// `horizontal_open[row][col]` when there is none between `(row, col)` and
/// `(row + 1, col)`. A carved maze is a spanning tree over the grid: exactly
/// `rows * cols - 1` entries are true and every cell reaches every other.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    pub rows: usize,
    pub cols: usize,
    pub vertical_open: Vec<Vec<bool>>,   // rows x (cols - 1)
    pub horizontal_open: Vec<Vec<bool>>, // (rows - 1) x cols
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    ZeroRows,
    ZeroColumns,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroRows => write!(f, "maze needs at least one row"),
            GridError::ZeroColumns => write!(f, "maze needs at least one column"),
        }
    }
}

impl std::error::Error for GridError {}

impl Maze {
    pub fn generate(rows: usize, cols: usize, carver: Carver) -> Result<Self, GridError> {
        let mut rng = StdRng::from_os_rng();
        Self::generate_with(rows, cols, carver, &mut rng)
    }

    pub fn generate_seeded(
        rows: usize,
        cols: usize,
        carver: Carver,
        seed: u64,
    ) -> Result<Self, GridError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate_with(rows, cols, carver, &mut rng)
    }

    fn generate_with(
        rows: usize,
        cols: usize,
        carver: Carver,
        rng: &mut StdRng,
    ) -> Result<Self, GridError> {
        if rows == 0 {
            return Err(GridError::ZeroRows);
        }
        if cols == 0 {
            return Err(GridError::ZeroColumns);
        }

        let mut maker = MazeMaker::new(rows, cols);
        maker.carve(carver, rng);

        Ok(Self {
            rows,
            cols,
            vertical_open: maker.vertical_open,
            horizontal_open: maker.horizontal_open,
        })
    }

    pub fn open_passage_count(&self) -> usize {
        let vertical = self
            .vertical_open
            .iter()
            .flatten()
            .filter(|&&open| open)
            .count();
        let horizontal = self
            .horizontal_open
            .iter()
            .flatten()
            .filter(|&&open| open)
            .count();
        vertical + horizontal
    }

    pub fn log(&self) -> String {
        // Expand to a (2 * rows + 1) x (2 * cols + 1) block grid: cells at odd
        // coordinates, passages between them, walls everywhere else.
        let mut blocks = vec![vec![true; 2 * self.cols + 1]; 2 * self.rows + 1];

        for row in 0..self.rows {
            for col in 0..self.cols {
                blocks[2 * row + 1][2 * col + 1] = false;
            }
        }

        for (row, passages) in self.vertical_open.iter().enumerate() {
            for (col, &open) in passages.iter().enumerate() {
                if open {
                    blocks[2 * row + 1][2 * col + 2] = false;
                }
            }
        }

        for (row, passages) in self.horizontal_open.iter().enumerate() {
            for (col, &open) in passages.iter().enumerate() {
                if open {
                    blocks[2 * row + 2][2 * col + 1] = false;
                }
            }
        }

        blocks
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&wall| if wall { "██" } else { "  " })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
