pub mod body;
pub mod world;

pub use body::{Body, BodyDef};
pub use world::{BodyHandle, World};
