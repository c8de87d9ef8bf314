use approx::assert_relative_eq;

use boxclip2d::math::{Aabb, EPS, Vec2, near_eq, near_eq_vec};

#[test]
fn public_math_api_smoke() {
    let v = Vec2::new(1.0, 2.0);
    let _ = v.rotate(0.5).dot(v);
    let _ = Aabb::from_points(&[v, -v]);
}

#[test]
fn rotation_composes() {
    let v = Vec2::new(1.0, 0.0);
    let once = v.rotate(0.4).rotate(0.6);
    let direct = v.rotate(1.0);
    assert_relative_eq!(once.x, direct.x, epsilon = 1e-12);
    assert_relative_eq!(once.y, direct.y, epsilon = 1e-12);
}

#[test]
fn tolerance_is_tight() {
    assert!(EPS > 0.0);
    assert!(near_eq(0.0, EPS / 2.0));
    assert!(!near_eq(0.0, EPS * 2.0));
    assert!(near_eq_vec(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0 + EPS / 2.0)));
}
