use ::rand::Rng;
use ::rand::thread_rng;
use macroquad::prelude::*;

use boxclip2d::collision::{Contact, Shape};
use boxclip2d::dynamics::{BodyDef, BodyHandle, World};
use boxclip2d::math::Vec2;

const PIXELS_PER_UNIT: f64 = 60.0;

fn to_screen(p: Vec2) -> (f32, f32) {
    let x = screen_width() as f64 / 2.0 + p.x * PIXELS_PER_UNIT;
    let y = screen_height() as f64 / 2.0 - p.y * PIXELS_PER_UNIT;
    (x as f32, y as f32)
}

fn draw_body(world: &World, h: BodyHandle, color: Color) {
    let body = world.body(h);
    let Shape::Rect(rect) = body.shape;

    for i in 0..4 {
        let a = to_screen(body.to_world(rect.corners[i]));
        let b = to_screen(body.to_world(rect.corners[(i + 1) % 4]));
        draw_line(a.0, a.1, b.0, b.1, 2.0, color);
    }
}

fn draw_contact(c: &Contact) {
    let (x, y) = to_screen(c.pos);
    draw_circle(x, y, 4.0, RED);

    let tip = c.pos + c.normal * 0.4;
    let (tx, ty) = to_screen(tip);
    draw_line(x, y, tx, ty, 2.0, ORANGE);
}

fn spawn_field(world: &mut World) -> (BodyHandle, BodyHandle) {
    world.clear();

    // The two driven bodies: a spinner in the middle and an orbiter.
    let spinner = world.create_body(BodyDef {
        width: Vec2::new(3.0, 1.2),
        ..Default::default()
    });
    let orbiter = world.create_body(BodyDef {
        width: Vec2::new(1.0, 1.0),
        position: Vec2::new(2.5, 0.0),
        ..Default::default()
    });

    let mut rng = thread_rng();
    for _ in 0..6 {
        world.create_body(BodyDef {
            width: Vec2::new(rng.gen_range(0.6..=1.6), rng.gen_range(0.6..=1.6)),
            position: Vec2::new(rng.gen_range(-4.5..=4.5), rng.gen_range(-3.0..=3.0)),
            rotation: rng.gen_range(-3.0..=3.0),
            ..Default::default()
        });
    }

    (spinner, orbiter)
}

#[macroquad::main("boxclip2d contacts")]
async fn main() {
    let mut world = World::new();
    let (mut spinner, mut orbiter) = spawn_field(&mut world);
    let mut contacts: Vec<Contact> = Vec::new();

    loop {
        if is_key_pressed(KeyCode::Space) {
            (spinner, orbiter) = spawn_field(&mut world);
        }

        let t = get_time();
        world.body_mut(spinner).rotation = t * 0.4;
        {
            let b = world.body_mut(orbiter);
            b.position = Vec2::new((t * 0.7).cos() * 2.2, (t * 0.7).sin() * 2.2);
            b.rotation = -t;
        }

        world.update_aabbs();
        contacts.clear();
        world.find_contacts(&mut contacts);

        clear_background(Color::from_rgba(24, 26, 32, 255));

        for i in 0..world.bodies.len() {
            let h = BodyHandle(i);
            let touched = contacts.iter().any(|c| c.body_ref == h || c.body_inc == h);
            let color = if touched { SKYBLUE } else { GRAY };
            draw_body(&world, h, color);
        }
        for c in &contacts {
            draw_contact(c);
        }

        draw_text(
            &format!("contacts: {}   [space] reshuffle", contacts.len()),
            12.0,
            24.0,
            22.0,
            LIGHTGRAY,
        );

        next_frame().await;
    }
}
