use rand::Rng;

use crate::math::Vec2;

/// Absolute tolerance for the contact filter and clip-endpoint identity.
pub const EPS: f64 = 1e-9;

#[inline]
pub fn near_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

#[inline]
pub fn near_eq_vec(a: Vec2, b: Vec2) -> bool {
    near_eq(a.x, b.x) && near_eq(a.y, b.y)
}

#[inline]
pub fn random_range(rng: &mut impl Rng, lo: f64, hi: f64) -> f64 {
    rng.gen_range(lo..=hi)
}
