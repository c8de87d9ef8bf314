use crate::math::{Aabb, Vec2};

/// Clips the directed segment `p -> q` against `bx` with the Liang-Barsky
/// parametric method.
///
/// Returns the clipped endpoints, still ordered along the original
/// direction, or `None` when the segment lies entirely outside the box.
pub fn clip_segment(bx: &Aabb, p: Vec2, q: Vec2) -> Option<(Vec2, Vec2)> {
    let d = q - p;
    let mut t_enter = 0.0_f64;
    let mut t_leave = 1.0_f64;

    // (denominator, numerator) per box edge: left, right, bottom, top.
    let edges = [
        (-d.x, p.x - bx.left),
        (d.x, bx.right - p.x),
        (-d.y, p.y - bx.bottom),
        (d.y, bx.top - p.y),
    ];

    for (den, num) in edges {
        if den == 0.0 {
            // Parallel to this edge; outside means no intersection at all.
            if num < 0.0 {
                return None;
            }
        } else {
            let t = num / den;
            if den < 0.0 {
                // Entering the half-plane.
                if t > t_leave {
                    return None;
                }
                if t > t_enter {
                    t_enter = t;
                }
            } else {
                // Leaving the half-plane.
                if t < t_enter {
                    return None;
                }
                if t < t_leave {
                    t_leave = t;
                }
            }
        }
    }

    Some((p + d * t_enter, p + d * t_leave))
}
