use crate::collision::Contact;
use crate::collision::rect;
use crate::dynamics::{Body, BodyHandle, World};
use crate::math::Vec2;

/// A rectangle in its body's local frame.
///
/// Corners are stored in cyclic order bottom-left, bottom-right, top-right,
/// top-left, already rotated by the shape's intrinsic orientation.
#[derive(Copy, Clone, Debug)]
pub struct RectShape {
    pub corners: [Vec2; 4],
    /// Rotational inertia about the center, stamped at body creation.
    pub inertia: f64,
}

impl RectShape {
    pub fn new(width: f64, height: f64, rotation: f64, inertia: f64) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);

        let hw = width / 2.0;
        let hh = height / 2.0;
        let corners = [
            Vec2::new(-hw, -hh).rotate(rotation),
            Vec2::new(hw, -hh).rotate(rotation),
            Vec2::new(hw, hh).rotate(rotation),
            Vec2::new(-hw, hh).rotate(rotation),
        ];
        Self { corners, inertia }
    }
}

/// Shape kinds the engine can collide. One arm per kind; pairs without a
/// narrow-phase implementation are unrepresentable.
#[derive(Copy, Clone, Debug)]
pub enum Shape {
    Rect(RectShape),
}

impl Shape {
    #[inline]
    pub fn inertia(&self) -> f64 {
        match self {
            Shape::Rect(r) => r.inertia,
        }
    }
}

/// Narrow-phase dispatch on the pair of shape kinds.
///
/// Appends the resulting manifold to `out` and returns whether the bodies
/// collide.
pub fn collide(world: &World, a: BodyHandle, b: BodyHandle, out: &mut Vec<Contact>) -> bool {
    match (&world.body(a).shape, &world.body(b).shape) {
        (Shape::Rect(_), Shape::Rect(_)) => rect::collide_rects(world, a, b, out),
    }
}

/// Rebuilds `body`'s cached world-space box for the broad phase.
pub fn update_aabb(body: &mut Body) {
    match &body.shape {
        Shape::Rect(_) => rect::update_rect_aabb(body),
    }
}
