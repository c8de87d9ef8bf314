//! Rectangle-vs-rectangle narrow phase.
//!
//! A single Liang-Barsky clipping pass over the directed edges of one
//! rectangle against the other's local box yields the overlap polygon.
//! The collision face is then chosen among the eight candidates (four per
//! body) by minimal summed penetration of the overlap points; points lying
//! on the chosen face are rejected, the survivors are pushed to world
//! space, and the per-contact impulse denominator is precomputed.

use std::rc::Rc;

use crate::collision::clip::clip_segment;
use crate::collision::contact::{Contact, ManifoldMoments};
use crate::collision::shape::Shape;
use crate::dynamics::{Body, BodyHandle, World};
use crate::math::{Aabb, Vec2, near_eq, near_eq_vec};

/// Candidate-buffer capacity. Two convex rectangles yield at most 8 clip
/// points plus 8 interior corners.
pub const MAX_CONTACTS: usize = 16;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Face {
    Left = 0,
    Right = 1,
    Bottom = 2,
    Top = 3,
}

const FACES: [Face; 4] = [Face::Left, Face::Right, Face::Bottom, Face::Top];

/// Working buffer of one narrow-phase call.
struct Candidate {
    normal: Vec2,
    contacts: [Vec2; MAX_CONTACTS],
    k_factors: [f64; MAX_CONTACTS],
    len: usize,
    min_depth: f64,
}

impl Default for Candidate {
    fn default() -> Self {
        Self {
            normal: Vec2::default(),
            contacts: [Vec2::default(); MAX_CONTACTS],
            k_factors: [0.0; MAX_CONTACTS],
            len: 0,
            min_depth: 0.0,
        }
    }
}

impl Candidate {
    fn push(&mut self, p: Vec2) {
        assert!(self.len < MAX_CONTACTS, "contact buffer overflow");
        self.contacts[self.len] = p;
        self.len += 1;
    }
}

/// Clips the four directed edges of the rectangle described by `points`
/// (cyclic corner order) against `bx`, collecting interior clip points and
/// the original vertices that were already inside.
///
/// Returns whether any edge overlapped the box.
fn clip_rect_edges(bx: &Aabb, points: &[Vec2; 4], cand: &mut Candidate) -> bool {
    let mut inside = [false; 4];
    let mut overlapped = false;

    for i in 0..4 {
        let j = (i + 1) % 4;
        if let Some((pf, pt)) = clip_segment(bx, points[i], points[j]) {
            overlapped = true;
            if near_eq_vec(pf, points[i]) {
                inside[i] = true;
            } else {
                cand.push(pf);
            }
            if near_eq_vec(pt, points[j]) {
                inside[j] = true;
            } else {
                cand.push(pt);
            }
        }
    }

    for i in 0..4 {
        if inside[i] {
            cand.push(points[i]);
        }
    }

    overlapped
}

/// Picks the collision face among the eight candidates and finishes the
/// manifold: filters points on the face, pushes the survivors and the
/// normal to world space and precomputes the k-factors.
///
/// Returns 0 when `body_a` ends up the reference body, 1 for `body_b`.
fn find_collision_face(
    body_a: &Body,
    body_b: &Body,
    box_a: &Aabb,
    box_b: &Aabb,
    cand: &mut Candidate,
) -> usize {
    // The same overlap points in both local frames; penetration sums for a
    // body's faces only make sense with every point in that body's frame.
    let mut conts = [[Vec2::default(); MAX_CONTACTS]; 2];
    for i in 0..cand.len {
        conts[0][i] = cand.contacts[i];
        conts[1][i] = body_b.relative_pos(body_a, cand.contacts[i]);
    }
    let boxes = [box_a, box_b];
    let bodies = [body_a, body_b];

    let mut min_dep = [0.0_f64; 2];
    let mut face_id = [Face::Left; 2];
    for k in 0..2 {
        let mut deps = [0.0_f64; 4];
        for i in 0..cand.len {
            let c = conts[k][i];
            deps[Face::Left as usize] += (c.x - boxes[k].left).abs();
            deps[Face::Right as usize] += (boxes[k].right - c.x).abs();
            deps[Face::Bottom as usize] += (c.y - boxes[k].bottom).abs();
            deps[Face::Top as usize] += (boxes[k].top - c.y).abs();
        }

        min_dep[k] = f64::MAX;
        for f in FACES {
            if deps[f as usize] < min_dep[k] {
                face_id[k] = f;
                min_dep[k] = deps[f as usize];
            }
        }
    }

    // The body whose face shows the smaller summed penetration carries the
    // collision face; ties go to the first body.
    let k = if min_dep[0] <= min_dep[1] { 0 } else { 1 };
    let reference = bodies[k];
    let incident = bodies[1 - k];
    let bx = *boxes[k];

    cand.min_depth = min_dep[k];
    let size = cand.len;
    cand.len = 0;

    // Points sitting on the collision face carry no penetration.
    let normal = match face_id[k] {
        Face::Left => {
            for i in 0..size {
                if !near_eq(conts[k][i].x, bx.left) {
                    cand.push(conts[k][i]);
                }
            }
            Vec2::new(-1.0, 0.0)
        }
        Face::Right => {
            for i in 0..size {
                if !near_eq(conts[k][i].x, bx.right) {
                    cand.push(conts[k][i]);
                }
            }
            Vec2::new(1.0, 0.0)
        }
        Face::Bottom => {
            for i in 0..size {
                if !near_eq(conts[k][i].y, bx.bottom) {
                    cand.push(conts[k][i]);
                }
            }
            Vec2::new(0.0, -1.0)
        }
        Face::Top => {
            for i in 0..size {
                if !near_eq(conts[k][i].y, bx.top) {
                    cand.push(conts[k][i]);
                }
            }
            Vec2::new(0.0, 1.0)
        }
    };

    cand.normal = normal.rotate(reference.rotation);
    for i in 0..cand.len {
        let world = cand.contacts[i].rotate(reference.rotation) + reference.position;
        cand.contacts[i] = world;

        let r_ref = world - reference.position;
        let r_inc = world - incident.position;
        let ang_ref = Vec2::cross_scalar_vec(r_ref.cross(cand.normal), r_ref).dot(cand.normal)
            / reference.shape.inertia();
        let ang_inc = Vec2::cross_scalar_vec(r_inc.cross(cand.normal), r_inc).dot(cand.normal)
            / incident.shape.inertia();

        cand.k_factors[i] = 1.0 / reference.mass + 1.0 / incident.mass + ang_ref + ang_inc;
    }

    k
}

/// Narrow-phase entry for a rectangle pair.
///
/// Appends one contact record per surviving overlap point to `out`; every
/// record of the manifold shares one accumulator pair. Returns `true` iff
/// at least one contact is emitted.
pub fn collide_rects(world: &World, a: BodyHandle, b: BodyHandle, out: &mut Vec<Contact>) -> bool {
    let body_a = world.body(a);
    let body_b = world.body(b);
    let (rect_a, rect_b) = match (&body_a.shape, &body_b.shape) {
        (Shape::Rect(ra), Shape::Rect(rb)) => (ra, rb),
    };

    // Each rectangle's corners mapped into the other body's frame.
    let in_a = rect_b.corners.map(|c| body_a.relative_pos(body_b, c));
    let in_b = rect_a.corners.map(|c| body_b.relative_pos(body_a, c));

    let box_a = Aabb::from_points(&rect_a.corners);
    let box_b = Aabb::from_points(&rect_b.corners);

    let mut cand = Candidate::default();
    clip_rect_edges(&box_a, &in_a, &mut cand);

    // The clip pass cannot see the first rectangle when it sits entirely
    // inside the second; its interior corners complete the overlap polygon
    // and keep the verdict symmetric in argument order.
    for i in 0..4 {
        if box_b.contains(in_b[i], 0.0) {
            cand.push(rect_a.corners[i]);
        }
    }
    if cand.len == 0 {
        return false;
    }

    let k = find_collision_face(body_a, body_b, &box_a, &box_b, &mut cand);
    if cand.len == 0 {
        // Every overlap point sat exactly on the collision face.
        return false;
    }

    let (body_ref, body_inc) = if k == 0 { (a, b) } else { (b, a) };
    let moments = Rc::new(ManifoldMoments::default());
    for i in 0..cand.len {
        let mut contact = Contact::new(body_ref, body_inc, Rc::clone(&moments));
        contact.pos = cand.contacts[i];
        contact.normal = cand.normal;
        contact.depth = cand.min_depth;
        contact.k_factor = cand.k_factors[i];
        contact.weight = cand.len;
        out.push(contact);
    }

    true
}

/// Rebuilds the body's cached world-space box from its four corners.
pub fn update_rect_aabb(body: &mut Body) {
    let Shape::Rect(rect) = body.shape;

    let mut bx = Aabb::empty();
    for c in rect.corners {
        bx.expand(body.to_world(c));
    }
    body.aabb = bx;
}
