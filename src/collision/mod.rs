pub mod clip;
pub mod contact;
pub mod rect;
pub mod shape;

pub use clip::clip_segment;
pub use contact::{Contact, ManifoldMoments};
pub use rect::{MAX_CONTACTS, collide_rects, update_rect_aabb};
pub use shape::{RectShape, Shape, collide, update_aabb};
