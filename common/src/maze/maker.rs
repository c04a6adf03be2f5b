pub mod algorithms;

use rand::{Rng, rngs::StdRng};
use strum::{Display, EnumString};

use algorithms::{iterative::Iterative, recursive::Recursive};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Carver {
    Recursive, // Reference behavior: plain recursion, depth grows with corridor length.
    Iterative, // Same visit order on an explicit stack; safe for large grids.
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

pub const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

pub struct MazeMaker {
    pub rows: usize,
    pub cols: usize,
    pub visited: Vec<Vec<bool>>,
    pub vertical_open: Vec<Vec<bool>>,
    pub horizontal_open: Vec<Vec<bool>>,
}

impl MazeMaker {
    /// Callers validate `rows >= 1` and `cols >= 1` first.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            visited: vec![vec![false; cols]; rows],
            vertical_open: vec![vec![false; cols - 1]; rows],
            horizontal_open: vec![vec![false; cols]; rows - 1],
        }
    }

    pub fn carve(&mut self, carver: Carver, rng: &mut StdRng) {
        let start = Cell {
            row: rng.random_range(0..self.rows),
            col: rng.random_range(0..self.cols),
        };

        let mut order = |directions: &mut [Direction; 4]| shuffle_directions(rng, directions);
        match carver {
            Carver::Recursive => self.carve_recursive(start, &mut order),
            Carver::Iterative => self.carve_iterative(start, &mut order),
        }
    }

    fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let Cell { row, col } = cell;
        let (row, col) = match direction {
            Direction::Up => (row.checked_sub(1)?, col),
            Direction::Right => (row, col + 1),
            Direction::Down => (row + 1, col),
            Direction::Left => (row, col.checked_sub(1)?),
        };

        (row < self.rows && col < self.cols).then_some(Cell { row, col })
    }

    fn is_visited(&self, cell: Cell) -> bool {
        self.visited[cell.row][cell.col]
    }

    fn mark_visited(&mut self, cell: Cell) {
        self.visited[cell.row][cell.col] = true;
    }

    fn open_passage(&mut self, cell: Cell, direction: Direction) {
        debug_assert!(
            self.neighbor(cell, direction).is_some(),
            "no adjacent cell in that direction"
        );

        let Cell { row, col } = cell;
        match direction {
            Direction::Up => self.horizontal_open[row - 1][col] = true,
            Direction::Right => self.vertical_open[row][col] = true,
            Direction::Down => self.horizontal_open[row][col] = true,
            Direction::Left => self.vertical_open[row][col - 1] = true,
        }
    }
}

/// Fisher–Yates, walking back from the end of the array.
pub fn shuffle_directions(rng: &mut StdRng, directions: &mut [Direction; 4]) {
    for i in (1..directions.len()).rev() {
        let j = rng.random_range(0..=i);
        directions.swap(i, j);
    }
}
