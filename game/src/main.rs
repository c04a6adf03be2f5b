use std::process;

use common::{
    config::Settings,
    maze::Maze,
    walls::{self, Geometry},
};

fn main() {
    let settings = Settings::from_env();

    let result = match settings.seed {
        Some(seed) => Maze::generate_seeded(settings.rows, settings.cols, settings.carver, seed),
        None => Maze::generate(settings.rows, settings.cols, settings.carver),
    };

    let maze = match result {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("Error: Failed to generate maze.");
            eprintln!("Details: {}.", e);
            process::exit(1);
        }
    };

    print_banner(&settings);
    println!("{}", maze);

    let geometry = Geometry::new(
        settings.world_width,
        settings.world_height,
        settings.rows,
        settings.cols,
    );
    let interior = walls::interior_walls(&maze, &geometry);
    println!(
        "Carved {} passages; emitting {} interior walls, 4 boundaries, 1 goal.",
        maze.open_passage_count(),
        interior.len()
    );
}

fn print_banner(settings: &Settings) {
    println!("  Grid:   {}x{}", settings.rows, settings.cols);
    println!(
        "  World:  {}x{}",
        settings.world_width, settings.world_height
    );
    println!("  Carver: {}", settings.carver);
    match settings.seed {
        Some(seed) => println!("  Seed:   {}", seed),
        None => println!("  Seed:   (OS entropy)"),
    }
}
