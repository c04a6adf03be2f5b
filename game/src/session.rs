use glam::{Vec2, vec2};

use crate::{
    physics::{BodyTag, PhysicsHandle},
    world::WorldBodies,
};
use common::{input::Steer, player};

/// Gravity restored when the maze is solved, letting the freed walls fall.
pub const WIN_GRAVITY: Vec2 = vec2(0.0, 1.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
}

/// One play-through: owns the body handles and the playing/won phase. The
/// win transition is one-way and fires its side effects exactly once, no
/// matter how many ball-goal pairs the collaborator reports.
pub struct Session {
    pub phase: Phase,
    bodies: WorldBodies,
}

impl Session {
    pub fn new(bodies: WorldBodies) -> Self {
        Self {
            phase: Phase::Playing,
            bodies,
        }
    }

    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    /// Adds a directional nudge to the ball's current velocity. Stays live
    /// after the win, so the ball can still be rolled around the rubble.
    pub fn steer(&mut self, physics: &mut dyn PhysicsHandle, steer: Steer) {
        let velocity = physics.velocity(self.bodies.ball);
        physics.set_velocity(self.bodies.ball, player::nudged_velocity(velocity, steer));
    }

    /// Drains the collaborator's collision pairs for this tick. Pairs that
    /// arrive after the win transition are consumed and ignored.
    pub fn handle_collisions(&mut self, physics: &mut dyn PhysicsHandle) {
        while let Some((a, b)) = physics.poll_collision() {
            if self.phase == Phase::Won {
                continue;
            }
            if is_winning_pair(a, b) {
                self.win(physics);
            }
        }
    }

    fn win(&mut self, physics: &mut dyn PhysicsHandle) {
        self.phase = Phase::Won;
        physics.set_gravity(WIN_GRAVITY);
        for &wall in &self.bodies.walls {
            physics.set_static_flag(wall, false);
        }
        println!("You won! The maze is crumbling.");
    }
}

fn is_winning_pair(a: BodyTag, b: BodyTag) -> bool {
    matches!(
        (a, b),
        (BodyTag::Ball, BodyTag::Goal) | (BodyTag::Goal, BodyTag::Ball)
    )
}
