use crate::collision::{Contact, collide, update_aabb};
use crate::dynamics::{Body, BodyDef};

#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub usize);

/// Body container feeding the narrow phase.
#[derive(Default)]
pub struct World {
    pub bodies: Vec<Body>,
}

impl World {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_body(&mut self, def: BodyDef) -> BodyHandle {
        let id = self.bodies.len();
        let mut body = Body::from_def(def);
        update_aabb(&mut body);
        self.bodies.push(body);
        BodyHandle(id)
    }

    pub fn body(&self, h: BodyHandle) -> &Body {
        &self.bodies[h.0]
    }

    pub fn body_mut(&mut self, h: BodyHandle) -> &mut Body {
        &mut self.bodies[h.0]
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Refreshes every cached world AABB; call after moving bodies.
    pub fn update_aabbs(&mut self) {
        for b in &mut self.bodies {
            update_aabb(b);
        }
    }

    /// O(n^2) broad phase over the cached AABBs; overlapping pairs go to
    /// the narrow phase, which appends their manifolds to `out`.
    pub fn find_contacts(&self, out: &mut Vec<Contact>) {
        let n = self.bodies.len();
        for i in 0..n {
            for j in i + 1..n {
                if !self.bodies[i].aabb.overlaps(&self.bodies[j].aabb) {
                    continue;
                }
                collide(self, BodyHandle(i), BodyHandle(j), out);
            }
        }
    }
}
