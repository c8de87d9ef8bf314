use approx::assert_relative_eq;

use boxclip2d::collision::update_aabb;
use boxclip2d::dynamics::{BodyDef, World};
use boxclip2d::math::Vec2;

#[test]
fn aabb_update_is_idempotent() {
    let mut world = World::new();
    let h = world.create_body(BodyDef {
        width: Vec2::new(2.0, 1.0),
        position: Vec2::new(3.0, -1.0),
        rotation: 0.6,
        ..Default::default()
    });

    update_aabb(world.body_mut(h));
    let first = world.body(h).aabb;
    update_aabb(world.body_mut(h));
    let second = world.body(h).aabb;

    assert_eq!(first, second);
}

#[test]
fn rotated_body_gets_a_wider_box() {
    let mut world = World::new();
    let flat = world.create_body(BodyDef {
        width: Vec2::new(2.0, 1.0),
        ..Default::default()
    });
    let tilted = world.create_body(BodyDef {
        width: Vec2::new(2.0, 1.0),
        rotation: core::f64::consts::FRAC_PI_4,
        ..Default::default()
    });

    let flat_bx = world.body(flat).aabb;
    let tilted_bx = world.body(tilted).aabb;

    assert_relative_eq!(flat_bx.right, 1.0, epsilon = 1e-12);
    assert!(tilted_bx.top > flat_bx.top);
}

#[test]
fn aabb_follows_a_moved_body() {
    let mut world = World::new();
    let h = world.create_body(BodyDef::default());

    world.body_mut(h).position = Vec2::new(7.0, 7.0);
    world.update_aabbs();

    let bx = world.body(h).aabb;
    assert_relative_eq!(bx.left, 6.5);
    assert_relative_eq!(bx.right, 7.5);
}

#[test]
fn broad_phase_feeds_only_overlapping_pairs() {
    let mut world = World::new();
    world.create_body(BodyDef::default());
    world.create_body(BodyDef {
        position: Vec2::new(0.6, 0.0),
        ..Default::default()
    });
    world.create_body(BodyDef {
        position: Vec2::new(50.0, 0.0),
        ..Default::default()
    });

    let mut contacts = Vec::new();
    world.find_contacts(&mut contacts);

    assert!(!contacts.is_empty());
    for c in &contacts {
        // The far body never shows up in any manifold.
        assert_ne!(c.body_ref.0, 2);
        assert_ne!(c.body_inc.0, 2);
    }
}
