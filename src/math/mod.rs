pub mod aabb;
pub mod utils;
pub mod vec2;

pub use aabb::Aabb;
pub use utils::{EPS, near_eq, near_eq_vec};
pub use vec2::Vec2;
