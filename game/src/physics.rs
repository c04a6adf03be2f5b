use glam::Vec2;

/// Role of a body in collision handling, fixed at creation. The physics
/// collaborator reports collisions as tag pairs; handlers match on these
/// exhaustively instead of comparing label strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyTag {
    Ball,
    Goal,
    Wall,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObstacleId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// The external 2D physics/rendering collaborator, as far as the game core
/// is concerned. Static rectangles never move unless their static flag is
/// cleared; dynamic circles are simulated. Collision pairs are drained with
/// `poll_collision` once per tick on the game's single logical thread.
/// All calls are infallible.
pub trait PhysicsHandle {
    fn create_static_rect(&mut self, center: Vec2, size: Vec2, tag: BodyTag) -> ObstacleId;
    fn create_dynamic_circle(&mut self, center: Vec2, radius: f32, tag: BodyTag) -> BodyId;
    fn velocity(&self, body: BodyId) -> Vec2;
    fn set_velocity(&mut self, body: BodyId, velocity: Vec2);
    fn set_static_flag(&mut self, obstacle: ObstacleId, is_static: bool);
    fn set_gravity(&mut self, gravity: Vec2);
    fn poll_collision(&mut self) -> Option<(BodyTag, BodyTag)>;
}
