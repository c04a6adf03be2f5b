use std::env;

use dotenvy;

use crate::{
    constants::{DEFAULT_COLS, DEFAULT_HEIGHT, DEFAULT_ROWS, DEFAULT_WIDTH},
    maze::Carver,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub rows: usize,
    pub cols: usize,
    pub world_width: f32,
    pub world_height: f32,
    pub seed: Option<u64>,
    pub carver: Carver,
}

impl Settings {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let rows = env::var("ROWS")
            .map(|value| value.parse().expect("invalid ROWS value"))
            .unwrap_or(DEFAULT_ROWS);
        let cols = env::var("COLS")
            .map(|value| value.parse().expect("invalid COLS value"))
            .unwrap_or(DEFAULT_COLS);
        let world_width = env::var("WIDTH")
            .map(|value| value.parse().expect("invalid WIDTH value"))
            .unwrap_or(DEFAULT_WIDTH);
        let world_height = env::var("HEIGHT")
            .map(|value| value.parse().expect("invalid HEIGHT value"))
            .unwrap_or(DEFAULT_HEIGHT);
        let seed = env::var("SEED")
            .ok()
            .map(|value| value.parse().expect("invalid SEED value"));
        let carver = env::var("CARVER")
            .map(|value| value.parse().expect("invalid CARVER value"))
            .unwrap_or(Carver::Recursive);

        Self {
            rows,
            cols,
            world_width,
            world_height,
            seed,
            carver,
        }
    }
}
