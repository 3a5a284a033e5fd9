use approx::assert_relative_eq;
use broadphase_lab::*;

fn ball(id: u64, x: f64, y: f64, vx: f64, vy: f64, radius: f64) -> Body {
    Body {
        id,
        position: DVec2::new(x, y),
        velocity: DVec2::new(vx, vy),
        radius,
        mass: 1.0,
        color: Color::default(),
    }
}

#[test]
fn head_on_collision_reverses_both_bodies() {
    // A at (10,50) moving right, B at (30,50) moving left, ticked at 10 fps
    // (dt = 0.1). Within a few resolve+advance cycles both reverse their
    // horizontal velocity and separate.
    let mut world = SimulationWorld::new();
    world.set_bounds(Bounds::new(0.0, 0.0, 100.0, 100.0).unwrap());
    world.set_fps(10.0).unwrap();
    let a = world
        .add_body(DVec2::new(10.0, 50.0), DVec2::new(50.0, 0.0), 5.0, 1.0, Color::default())
        .unwrap();
    let b = world
        .add_body(DVec2::new(30.0, 50.0), DVec2::new(-50.0, 0.0), 5.0, 1.0, Color::default())
        .unwrap();

    for _ in 0..5 {
        world.tick();
        if world.body(a).unwrap().velocity.x < 0.0 {
            break;
        }
    }

    let body_a = world.body(a).unwrap().clone();
    let body_b = world.body(b).unwrap().clone();
    assert!(body_a.velocity.x < 0.0, "A should move left, vx = {}", body_a.velocity.x);
    assert!(body_b.velocity.x > 0.0, "B should move right, vx = {}", body_b.velocity.x);
    assert!(!body_a.overlaps(&body_b));
}

#[test]
fn wall_scenario_flips_velocity_and_stays_inside() {
    // Body starts already inside the wall margin and moving outward.
    let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0).unwrap();
    let mut body = ball(1, 2.0, 50.0, -100.0, 0.0, 5.0);
    Integrator::new().advance(&mut body, 0.1, &bounds);
    assert_eq!(body.velocity.x, 100.0);
    assert!(body.position.x >= 5.0 && body.position.x <= 95.0);
}

#[test]
fn elastic_collision_conserves_kinetic_energy() {
    let mut a = ball(1, 10.0, 50.0, 50.0, 0.0, 5.0);
    let mut b = ball(2, 19.0, 50.0, -50.0, 0.0, 5.0);
    let energy_before =
        0.5 * a.mass * a.speed().powi(2) + 0.5 * b.mass * b.speed().powi(2);
    assert!(CollisionResolver::resolve(&mut a, &mut b));
    let energy_after =
        0.5 * a.mass * a.speed().powi(2) + 0.5 * b.mass * b.speed().powi(2);
    assert_relative_eq!(energy_before, energy_after, max_relative = 1e-9);
}

#[test]
fn resolution_leaves_bodies_separated() {
    let mut a = ball(1, 48.0, 50.0, 20.0, 0.0, 5.0);
    let mut b = ball(2, 54.0, 50.0, -20.0, 0.0, 5.0);
    assert!(CollisionResolver::resolve(&mut a, &mut b));
    assert!(a.position.distance(b.position) >= a.radius + b.radius - 1e-6);
}

#[test]
fn oblique_collision_preserves_momentum_vector() {
    let mut a = ball(1, 50.0, 50.0, 30.0, 10.0, 5.0);
    let mut b = ball(2, 57.0, 55.0, -20.0, -5.0, 5.0);
    let momentum_before = a.velocity * a.mass + b.velocity * b.mass;
    assert!(CollisionResolver::resolve(&mut a, &mut b));
    let momentum_after = a.velocity * a.mass + b.velocity * b.mass;
    assert_relative_eq!(momentum_before.x, momentum_after.x, max_relative = 1e-9);
    assert_relative_eq!(momentum_before.y, momentum_after.y, max_relative = 1e-9);
}

#[test]
fn bodies_stay_contained_over_many_ticks() {
    let bounds = Bounds::new(0.0, 0.0, 200.0, 150.0).unwrap();
    let integrator = Integrator::new();
    let mut bodies = vec![
        ball(1, 100.0, 75.0, 120.0, -80.0, 8.0),
        ball(2, 40.0, 30.0, -90.0, 110.0, 12.0),
        ball(3, 160.0, 120.0, 60.0, 60.0, 6.0),
    ];
    let dt = 1.0 / 60.0;
    for _ in 0..600 {
        for body in &mut bodies {
            integrator.advance(body, dt, &bounds);
            let eps = 1e-9;
            assert!(
                body.position.x - body.radius >= bounds.x - eps
                    && body.position.x + body.radius <= bounds.right() + eps
                    && body.position.y - body.radius >= bounds.y - eps
                    && body.position.y + body.radius <= bounds.bottom() + eps,
                "body {} escaped at {:?}",
                body.id,
                body.position
            );
        }
    }
}
