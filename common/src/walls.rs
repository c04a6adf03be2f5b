use glam::{Vec2, vec2};

use crate::maze::Maze;

pub const WALL_THICKNESS: f32 = 10.0;
pub const EDGE_THICKNESS: f32 = 2.0;
pub const GOAL_SCALE: f32 = 0.7;

/// World-space measurements shared by the emitter and the body placements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub world_width: f32,
    pub world_height: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    pub thickness: f32,
}

impl Geometry {
    pub fn new(world_width: f32, world_height: f32, rows: usize, cols: usize) -> Self {
        Self {
            world_width,
            world_height,
            cell_width: world_width / cols as f32,
            cell_height: world_height / rows as f32,
            thickness: WALL_THICKNESS,
        }
    }
}

/// An axis-aligned static rectangle, by center and full extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallRect {
    pub center: Vec2,
    pub size: Vec2,
}

/// One rectangle per closed adjacency. The long side carries a `thickness`
/// overlap past the cell span; without it, wall crossings are left with
/// corner gaps a body can slip through.
pub fn interior_walls(maze: &Maze, geometry: &Geometry) -> Vec<WallRect> {
    let Geometry {
        cell_width,
        cell_height,
        thickness,
        ..
    } = *geometry;

    let mut walls = Vec::new();

    for (row, passages) in maze.horizontal_open.iter().enumerate() {
        for (col, &open) in passages.iter().enumerate() {
            if open {
                continue;
            }
            walls.push(WallRect {
                center: vec2(
                    col as f32 * cell_width + cell_width / 2.0,
                    cell_height * (row as f32 + 1.0),
                ),
                size: vec2(cell_width + thickness, thickness),
            });
        }
    }

    for (row, passages) in maze.vertical_open.iter().enumerate() {
        for (col, &open) in passages.iter().enumerate() {
            if open {
                continue;
            }
            walls.push(WallRect {
                center: vec2(
                    cell_width * (col as f32 + 1.0),
                    row as f32 * cell_height + cell_height / 2.0,
                ),
                size: vec2(thickness, cell_height + thickness),
            });
        }
    }

    walls
}

pub fn boundary_walls(geometry: &Geometry) -> [WallRect; 4] {
    let Geometry {
        world_width: width,
        world_height: height,
        ..
    } = *geometry;

    [
        WallRect {
            center: vec2(width / 2.0, 0.0),
            size: vec2(width, EDGE_THICKNESS),
        },
        WallRect {
            center: vec2(width / 2.0, height),
            size: vec2(width, EDGE_THICKNESS),
        },
        WallRect {
            center: vec2(0.0, height / 2.0),
            size: vec2(EDGE_THICKNESS, height),
        },
        WallRect {
            center: vec2(width, height / 2.0),
            size: vec2(EDGE_THICKNESS, height),
        },
    ]
}

/// The goal marker fills most of the bottom-right cell.
pub fn goal_rect(geometry: &Geometry) -> WallRect {
    let Geometry {
        world_width,
        world_height,
        cell_width,
        cell_height,
        ..
    } = *geometry;

    WallRect {
        center: vec2(
            world_width - cell_width / 2.0,
            world_height - cell_height / 2.0,
        ),
        size: vec2(cell_width * GOAL_SCALE, cell_height * GOAL_SCALE),
    }
}
