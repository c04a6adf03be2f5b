use std::collections::VecDeque;

use glam::Vec2;

use crate::physics::{BodyId, BodyTag, ObstacleId, PhysicsHandle};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CreatedRect {
    pub id: ObstacleId,
    pub center: Vec2,
    pub size: Vec2,
    pub tag: BodyTag,
    pub is_static: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CreatedCircle {
    pub id: BodyId,
    pub center: Vec2,
    pub radius: f32,
    pub tag: BodyTag,
    pub velocity: Vec2,
}

/// A scripted stand-in for the physics collaborator.
#[derive(Default)]
pub struct MockPhysics {
    /// **Obstacle ledger:** every static rectangle created, in emission
    /// order, with its current static flag. Tests read this to verify what
    /// the world builder emitted and which walls a win released.
    pub rects: Vec<CreatedRect>,

    /// **Body ledger:** every dynamic circle created, with its current
    /// velocity as updated by `set_velocity`.
    pub circles: Vec<CreatedCircle>,

    /// **Current gravity**, as last set through `set_gravity`.
    pub gravity: Vec2,

    /// **Call counts:** how many times gravity was set, and every
    /// `set_static_flag` call in order. These let tests assert that the win
    /// transition applied its side effects exactly once.
    pub gravity_calls: usize,
    pub static_flag_calls: Vec<(ObstacleId, bool)>,

    /// **Scripted collisions:** pairs queued by tests with
    /// `queue_collision`, drained by `poll_collision`.
    pending_collisions: VecDeque<(BodyTag, BodyTag)>,

    next_id: u32,
}

impl MockPhysics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_collision(&mut self, a: BodyTag, b: BodyTag) {
        self.pending_collisions.push_back((a, b));
    }

    pub fn tagged_rect_count(&self, tag: BodyTag) -> usize {
        self.rects.iter().filter(|rect| rect.tag == tag).count()
    }

    pub fn velocity_of(&self, body: BodyId) -> Vec2 {
        self.circles
            .iter()
            .find(|circle| circle.id == body)
            .map(|circle| circle.velocity)
            .unwrap_or(Vec2::ZERO)
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl PhysicsHandle for MockPhysics {
    fn create_static_rect(&mut self, center: Vec2, size: Vec2, tag: BodyTag) -> ObstacleId {
        let id = ObstacleId(self.next_id());
        self.rects.push(CreatedRect {
            id,
            center,
            size,
            tag,
            is_static: true,
        });
        id
    }

    fn create_dynamic_circle(&mut self, center: Vec2, radius: f32, tag: BodyTag) -> BodyId {
        let id = BodyId(self.next_id());
        self.circles.push(CreatedCircle {
            id,
            center,
            radius,
            tag,
            velocity: Vec2::ZERO,
        });
        id
    }

    fn velocity(&self, body: BodyId) -> Vec2 {
        self.velocity_of(body)
    }

    fn set_velocity(&mut self, body: BodyId, velocity: Vec2) {
        if let Some(circle) = self.circles.iter_mut().find(|circle| circle.id == body) {
            circle.velocity = velocity;
        }
    }

    fn set_static_flag(&mut self, obstacle: ObstacleId, is_static: bool) {
        self.static_flag_calls.push((obstacle, is_static));
        if let Some(rect) = self.rects.iter_mut().find(|rect| rect.id == obstacle) {
            rect.is_static = is_static;
        }
    }

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
        self.gravity_calls += 1;
    }

    fn poll_collision(&mut self) -> Option<(BodyTag, BodyTag)> {
        self.pending_collisions.pop_front()
    }
}
