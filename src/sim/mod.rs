//! Simulation core
//!
//! Everything that moves bodies lives here:
//! - Single-threaded and synchronous; a `World::step` runs to completion
//! - Stable iteration order (by body handle)
//! - No rendering or platform dependencies

pub mod body;
pub mod bounds;
pub mod collision;
pub mod contact;
pub mod resolve;
pub mod vector;
pub mod world;

pub use body::{Body, BodyHandle, BodyOptions, Friction, Shape};
pub use bounds::Bounds;
pub use collision::{collide, detect, separate};
pub use contact::Contact;
pub use resolve::{mix_friction, resolve_collision};
pub use vector::{Vector2, Vector2Ext};
pub use world::{BodyView, World};
