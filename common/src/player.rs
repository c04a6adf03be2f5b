use glam::{Vec2, vec2};

use crate::{input::Steer, walls::Geometry};

/// Velocity added to the ball per keypress. Steering is additive on top of
/// whatever the physics collaborator reports, never an absolute set.
pub const NUDGE: f32 = 5.0;

pub fn spawn_position(geometry: &Geometry) -> Vec2 {
    vec2(geometry.cell_width / 2.0, geometry.cell_height / 2.0)
}

pub fn ball_radius(geometry: &Geometry) -> f32 {
    geometry.cell_width.min(geometry.cell_height) / 4.0
}

pub fn nudged_velocity(velocity: Vec2, steer: Steer) -> Vec2 {
    let delta = match steer {
        Steer::Up => vec2(0.0, -NUDGE),
        Steer::Right => vec2(NUDGE, 0.0),
        Steer::Down => vec2(0.0, NUDGE),
        Steer::Left => vec2(-NUDGE, 0.0),
    };
    velocity + delta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_spawns_in_the_center_of_the_top_left_cell() {
        let geometry = Geometry::new(1000.0, 800.0, 8, 10);
        assert_eq!(spawn_position(&geometry), vec2(50.0, 50.0));
    }

    #[test]
    fn test_ball_radius_is_a_quarter_of_the_smaller_cell_side() {
        let wide = Geometry::new(1000.0, 500.0, 10, 10);
        assert_eq!(ball_radius(&wide), 12.5);

        let tall = Geometry::new(500.0, 1000.0, 10, 10);
        assert_eq!(ball_radius(&tall), 12.5);
    }

    #[test]
    fn test_nudges_accumulate_on_the_current_velocity() {
        let mut velocity = Vec2::ZERO;
        velocity = nudged_velocity(velocity, Steer::Right);
        velocity = nudged_velocity(velocity, Steer::Right);
        velocity = nudged_velocity(velocity, Steer::Up);
        assert_eq!(velocity, vec2(2.0 * NUDGE, -NUDGE));
    }
}
