// Maze:
pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;

// World, in physics-collaborator units (pixels in the canvas build):
pub const DEFAULT_WIDTH: f32 = 1280.0;
pub const DEFAULT_HEIGHT: f32 = 720.0;
