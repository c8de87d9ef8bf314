use crate::collision::{RectShape, Shape};
use crate::math::{Aabb, Vec2};

#[derive(Copy, Clone, Debug)]
pub struct BodyDef {
    /// Rectangle extents (width, height).
    pub width: Vec2,
    /// Intrinsic rotation baked into the shape's corners.
    pub shape_rotation: f64,
    pub position: Vec2,
    pub rotation: f64,
    pub mass: f64,
}

impl Default for BodyDef {
    fn default() -> Self {
        Self {
            width: Vec2::new(1.0, 1.0),
            shape_rotation: 0.0,
            position: Vec2::new(0.0, 0.0),
            rotation: 0.0,
            mass: 1.0,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Body {
    pub position: Vec2,
    pub rotation: f64,
    pub mass: f64,
    pub shape: Shape,
    /// World-space box maintained by the AABB update for the broad phase.
    pub aabb: Aabb,
}

impl Body {
    pub fn from_def(def: BodyDef) -> Self {
        debug_assert!(def.mass > 0.0 && def.mass.is_finite());
        debug_assert!(def.width.x > 0.0 && def.width.y > 0.0);

        let inertia = def.mass * (def.width.x * def.width.x + def.width.y * def.width.y) / 12.0;
        let shape = Shape::Rect(RectShape::new(
            def.width.x,
            def.width.y,
            def.shape_rotation,
            inertia,
        ));

        Self {
            position: def.position,
            rotation: def.rotation,
            mass: def.mass,
            shape,
            aabb: Aabb::empty(),
        }
    }

    /// Maps a point in this body's local frame to world space.
    #[inline]
    pub fn to_world(&self, p: Vec2) -> Vec2 {
        p.rotate(self.rotation) + self.position
    }

    /// Maps a world-space point into this body's local frame.
    #[inline]
    pub fn to_local(&self, p: Vec2) -> Vec2 {
        (p - self.position).rotate(-self.rotation)
    }

    /// Maps a point in `source`'s local frame into this body's local frame.
    #[inline]
    pub fn relative_pos(&self, source: &Body, p: Vec2) -> Vec2 {
        self.to_local(source.to_world(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_def_computes_rectangle_inertia() {
        let def = BodyDef {
            width: Vec2::new(2.0, 4.0),
            mass: 3.0,
            ..Default::default()
        };
        let b = Body::from_def(def);

        // I = m * (w^2 + h^2) / 12
        assert_relative_eq!(b.shape.inertia(), 3.0 * 20.0 / 12.0, epsilon = 1e-12);
        assert_relative_eq!(b.mass, 3.0);
    }

    #[test]
    fn world_local_roundtrip() {
        let b = Body::from_def(BodyDef {
            position: Vec2::new(3.0, -2.0),
            rotation: 0.8,
            ..Default::default()
        });

        let p = Vec2::new(0.7, 1.3);
        let back = b.to_local(b.to_world(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-12);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-12);
    }

    #[test]
    fn to_world_applies_rotation_then_translation() {
        let b = Body::from_def(BodyDef {
            position: Vec2::new(1.0, 0.0),
            rotation: core::f64::consts::FRAC_PI_2,
            ..Default::default()
        });

        let w = b.to_world(Vec2::new(1.0, 0.0));
        assert_relative_eq!(w.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(w.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn relative_pos_chains_the_two_transforms() {
        let a = Body::from_def(BodyDef {
            position: Vec2::new(1.0, 2.0),
            rotation: 0.3,
            ..Default::default()
        });
        let b = Body::from_def(BodyDef {
            position: Vec2::new(-2.0, 0.5),
            rotation: -1.1,
            ..Default::default()
        });

        let p = Vec2::new(0.25, -0.75);
        let via = a.relative_pos(&b, p);
        let expected = a.to_local(b.to_world(p));
        assert_relative_eq!(via.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(via.y, expected.y, epsilon = 1e-12);
    }

    #[test]
    fn relative_pos_to_self_is_identity() {
        let a = Body::from_def(BodyDef {
            position: Vec2::new(5.0, -1.0),
            rotation: 2.2,
            ..Default::default()
        });
        let p = Vec2::new(-0.4, 0.9);
        let same = a.relative_pos(&a, p);
        assert_relative_eq!(same.x, p.x, epsilon = 1e-12);
        assert_relative_eq!(same.y, p.y, epsilon = 1e-12);
    }
}
