use glam::Vec2;

use crate::physics::{BodyId, BodyTag, ObstacleId, PhysicsHandle};
use common::{
    maze::Maze,
    player,
    walls::{self, Geometry},
};

/// Handles to the bodies a session steers and releases. Boundary walls are
/// emitted but not kept: they stay static for the life of the world.
pub struct WorldBodies {
    pub ball: BodyId,
    pub goal: ObstacleId,
    pub walls: Vec<ObstacleId>,
}

/// Emits the maze into the physics collaborator: boundaries, interior
/// walls, goal marker, then the ball. The world starts weightless; gravity
/// only returns once the maze is solved.
pub fn build_world(
    maze: &Maze,
    geometry: &Geometry,
    physics: &mut dyn PhysicsHandle,
) -> WorldBodies {
    physics.set_gravity(Vec2::ZERO);

    for wall in walls::boundary_walls(geometry) {
        physics.create_static_rect(wall.center, wall.size, BodyTag::Other);
    }

    let walls = walls::interior_walls(maze, geometry)
        .into_iter()
        .map(|wall| physics.create_static_rect(wall.center, wall.size, BodyTag::Wall))
        .collect();

    let goal = walls::goal_rect(geometry);
    let goal = physics.create_static_rect(goal.center, goal.size, BodyTag::Goal);

    let ball = physics.create_dynamic_circle(
        player::spawn_position(geometry),
        player::ball_radius(geometry),
        BodyTag::Ball,
    );

    WorldBodies { ball, goal, walls }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::MockPhysics;
    use common::maze::Carver;

    #[test]
    fn test_build_world_emits_every_body_once() {
        let maze = Maze::generate_seeded(10, 10, Carver::Recursive, 17)
            .expect("dimensions are valid");
        let geometry = Geometry::new(1280.0, 720.0, maze.rows, maze.cols);
        let mut physics = MockPhysics::new();

        let bodies = build_world(&maze, &geometry, &mut physics);

        // A 10x10 spanning tree opens 99 of the 180 adjacencies.
        assert_eq!(bodies.walls.len(), 81);
        assert_eq!(physics.rects.len(), 81 + 4 + 1);
        assert_eq!(physics.circles.len(), 1);
        assert_eq!(physics.gravity, Vec2::ZERO);

        let tagged = |tag| physics.rects.iter().filter(|rect| rect.tag == tag).count();
        assert_eq!(tagged(BodyTag::Wall), 81);
        assert_eq!(tagged(BodyTag::Other), 4);
        assert_eq!(tagged(BodyTag::Goal), 1);
        assert_eq!(physics.circles[0].tag, BodyTag::Ball);
    }

    #[test]
    fn test_ball_spawns_opposite_the_goal() {
        let maze = Maze::generate_seeded(4, 4, Carver::Iterative, 2)
            .expect("dimensions are valid");
        let geometry = Geometry::new(400.0, 400.0, maze.rows, maze.cols);
        let mut physics = MockPhysics::new();

        let bodies = build_world(&maze, &geometry, &mut physics);

        let ball = &physics.circles[0];
        assert_eq!(ball.id, bodies.ball);
        assert_eq!(ball.center, glam::vec2(50.0, 50.0));
        assert_eq!(ball.radius, 25.0);

        let goal = physics
            .rects
            .iter()
            .find(|rect| rect.tag == BodyTag::Goal)
            .expect("world should have a goal");
        assert_eq!(goal.center, glam::vec2(350.0, 350.0));
    }
}
