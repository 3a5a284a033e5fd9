use std::time::Duration;

use broadphase_lab::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn loop_state_machine_transitions() {
    let mut world = SimulationWorld::new();
    assert_eq!(world.state(), LoopState::Stopped);
    assert_eq!(world.tick_interval(), None);

    world.start(50.0).unwrap();
    assert!(world.is_running());
    assert_eq!(world.tick_interval(), Some(Duration::from_secs_f64(0.02)));

    // fps change while running restarts the cadence immediately.
    world.set_fps(100.0).unwrap();
    assert_eq!(world.tick_interval(), Some(Duration::from_secs_f64(0.01)));

    world.stop();
    assert_eq!(world.state(), LoopState::Stopped);
    assert_eq!(world.tick_interval(), None);
}

#[test]
fn manual_tick_works_in_either_state() {
    let mut world = SimulationWorld::new();
    let id = world
        .add_body(DVec2::new(400.0, 300.0), DVec2::new(60.0, 0.0), 10.0, 1.0, Color::default())
        .unwrap();

    world.tick();
    let x_after_stopped_tick = world.body(id).unwrap().position.x;
    assert!(x_after_stopped_tick > 400.0);

    world.start(60.0).unwrap();
    world.tick();
    assert!(world.body(id).unwrap().position.x > x_after_stopped_tick);
}

#[test]
fn invalid_parameters_are_rejected() {
    let mut world = SimulationWorld::new();
    assert_eq!(world.start(0.5), Err(SimulationError::InvalidFps(0.5)));
    assert_eq!(
        world.set_physics_steps(0),
        Err(SimulationError::InvalidPhysicsSteps(0))
    );
    assert_eq!(
        world.add_body(DVec2::ZERO, DVec2::ZERO, -1.0, 1.0, Color::default()),
        Err(SimulationError::InvalidRadius(-1.0))
    );
    assert!(Bounds::new(0.0, 0.0, -5.0, 10.0).is_err());
    assert!(UniformGrid::new(0, 4).is_err());
    // Failed calls leave the world untouched.
    assert_eq!(world.state(), LoopState::Stopped);
    assert_eq!(world.body_count(), 0);
}

#[test]
fn substeps_shrink_per_step_motion_but_cover_the_same_time() {
    let mut single = SimulationWorld::new();
    single.set_fps(60.0).unwrap();
    let id_single = single
        .add_body(DVec2::new(100.0, 100.0), DVec2::new(90.0, 0.0), 5.0, 1.0, Color::default())
        .unwrap();
    single.tick();

    let mut multi = SimulationWorld::new();
    multi.set_fps(60.0).unwrap();
    multi.set_physics_steps(4).unwrap();
    let id_multi = multi
        .add_body(DVec2::new(100.0, 100.0), DVec2::new(90.0, 0.0), 5.0, 1.0, Color::default())
        .unwrap();
    multi.tick();

    // Free flight is linear, so substepping must not change the distance
    // covered per tick.
    let x_single = single.body(id_single).unwrap().position.x;
    let x_multi = multi.body(id_multi).unwrap().position.x;
    assert!((x_single - x_multi).abs() < 1e-9);
}

#[test]
fn strategy_swap_keeps_bodies_and_changes_name() {
    let mut world = SimulationWorld::new();
    let mut rng = SmallRng::seed_from_u64(8);
    world.add_random_bodies(40, &mut rng);
    assert_eq!(world.strategy_name(), "naive");

    world.tick();
    let naive_pairs = world.candidate_pairs().len();
    assert_eq!(naive_pairs, 40 * 39 / 2);

    world.set_strategy(Box::new(QuadTree::new()));
    assert_eq!(world.strategy_name(), "quadtree");
    assert!(world.candidate_pairs().is_empty(), "swap clears stale pairs");

    world.tick();
    assert_eq!(world.body_count(), 40);
    assert!(world.candidate_pairs().len() <= naive_pairs);
}

#[test]
fn resolved_pairs_are_flagged_for_the_overlay() {
    let mut world = SimulationWorld::new();
    world.set_bounds(Bounds::new(0.0, 0.0, 100.0, 100.0).unwrap());
    world
        .add_body(DVec2::new(48.0, 50.0), DVec2::new(30.0, 0.0), 5.0, 1.0, Color::default())
        .unwrap();
    world
        .add_body(DVec2::new(54.0, 50.0), DVec2::new(-30.0, 0.0), 5.0, 1.0, Color::default())
        .unwrap();
    world
        .add_body(DVec2::new(20.0, 20.0), DVec2::ZERO, 5.0, 1.0, Color::default())
        .unwrap();

    world.tick();
    let pairs = world.candidate_pairs();
    assert_eq!(pairs.len(), 3, "naive emits all pairs");
    let resolved: Vec<_> = pairs.iter().filter(|p| p.resolved).collect();
    assert_eq!(resolved.len(), 1, "only the overlapping pair resolves");
}

#[test]
fn clear_bodies_resets_collection_and_overlay() {
    let mut world = SimulationWorld::new();
    let mut rng = SmallRng::seed_from_u64(21);
    world.add_random_bodies(10, &mut rng);
    world.tick();
    assert!(world.body_count() == 10);

    world.clear_bodies();
    assert_eq!(world.body_count(), 0);
    assert!(world.candidate_pairs().is_empty());
    assert!(world.bodies().is_empty());

    // Ticking an empty world is a no-op, not a fault.
    world.tick();
    assert!(world.candidate_pairs().is_empty());
}

#[test]
fn tick_duration_is_recorded() {
    let mut world = SimulationWorld::new();
    let mut rng = SmallRng::seed_from_u64(4);
    world.add_random_bodies(50, &mut rng);
    world.tick();
    assert!(world.last_tick_duration() > Duration::ZERO);
    assert!(world.last_tick_duration_ms() > 0.0);
}

#[test]
fn bounds_resize_is_picked_up_by_the_next_tick() {
    let mut world = SimulationWorld::new();
    let id = world
        .add_body(DVec2::new(790.0, 300.0), DVec2::new(120.0, 0.0), 8.0, 1.0, Color::default())
        .unwrap();

    // Shrink the arena so the body is already outside the new right wall.
    world.set_bounds(Bounds::new(0.0, 0.0, 400.0, 300.0).unwrap());
    world.tick();
    let body = world.body(id).unwrap();
    assert!(body.velocity.x < 0.0, "body should bounce off the new wall");
}

#[test]
fn installed_behaviors_run_each_substep() {
    let mut world = SimulationWorld::new();
    let id = world
        .add_body(DVec2::new(400.0, 100.0), DVec2::ZERO, 10.0, 1.0, Color::default())
        .unwrap();
    world.set_fps(10.0).unwrap();
    world.behaviors_mut().add(Gravity::new(100.0));

    world.tick();
    let body = world.body(id).unwrap();
    // One 0.1 s step of 100 px/s^2 downward acceleration.
    assert!((body.velocity.y - 10.0).abs() < 1e-9);

    world.behaviors_mut().clear();
    let vy = world.body(id).unwrap().velocity.y;
    world.tick();
    assert!((world.body(id).unwrap().velocity.y - vy).abs() < 1e-9);
}
