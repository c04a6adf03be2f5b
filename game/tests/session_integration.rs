use glam::{Vec2, vec2};

use common::{
    input::steer_for_key,
    maze::{Carver, Maze},
    player,
    walls::Geometry,
};
use game::{
    physics::BodyTag,
    session::{Session, WIN_GRAVITY},
    test_helpers::MockPhysics,
    world::build_world,
};

fn seeded_world(physics: &mut MockPhysics) -> Session {
    let maze =
        Maze::generate_seeded(10, 10, Carver::Recursive, 42).expect("dimensions are valid");
    let geometry = Geometry::new(1280.0, 720.0, maze.rows, maze.cols);
    Session::new(build_world(&maze, &geometry, physics))
}

#[test]
fn test_full_run_from_keypresses_to_win() {
    let mut physics = MockPhysics::new();
    let mut session = seeded_world(&mut physics);

    // 10x10 spanning tree: 99 open passages, 81 closed adjacencies.
    assert_eq!(physics.tagged_rect_count(BodyTag::Wall), 81);
    assert_eq!(physics.tagged_rect_count(BodyTag::Other), 4);
    assert_eq!(physics.tagged_rect_count(BodyTag::Goal), 1);
    assert_eq!(physics.circles.len(), 1);
    assert_eq!(physics.gravity, Vec2::ZERO);

    // D, D, ArrowDown.
    for key_code in [68, 68, 40] {
        let steer = steer_for_key(key_code).expect("key should be mapped");
        session.steer(&mut physics, steer);
    }
    let ball = physics.circles[0].id;
    assert_eq!(
        physics.velocity_of(ball),
        vec2(2.0 * player::NUDGE, player::NUDGE)
    );

    // Scraping along a wall is not a win.
    physics.queue_collision(BodyTag::Ball, BodyTag::Wall);
    session.handle_collisions(&mut physics);
    assert!(!session.is_won());
    assert_eq!(physics.gravity, Vec2::ZERO);

    // Reaching the goal is, exactly once, even with duplicate pairs from
    // the same tick.
    physics.queue_collision(BodyTag::Ball, BodyTag::Goal);
    physics.queue_collision(BodyTag::Goal, BodyTag::Ball);
    session.handle_collisions(&mut physics);

    assert!(session.is_won());
    assert_eq!(physics.gravity, WIN_GRAVITY);
    assert_eq!(physics.gravity_calls, 2);
    assert_eq!(physics.static_flag_calls.len(), 81);

    for rect in &physics.rects {
        match rect.tag {
            BodyTag::Wall => assert!(!rect.is_static),
            _ => assert!(rect.is_static),
        }
    }
}

#[test]
fn test_same_seed_builds_an_identical_world() {
    let mut first = MockPhysics::new();
    let mut second = MockPhysics::new();
    seeded_world(&mut first);
    seeded_world(&mut second);

    assert_eq!(first.rects, second.rects);
    assert_eq!(first.circles, second.circles);
}
