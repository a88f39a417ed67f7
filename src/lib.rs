//! Rigid Sandbox - a real-time 2D rigid-body physics core
//!
//! Core modules:
//! - `sim`: Simulation core (bodies, broad/narrow phase, resolver, world step)
//! - `settings`: Data-driven world configuration
//! - `clock`: Fixed-cadence frame gate for host render loops
//! - `spawner`: Seeded helpers that populate a world the way the demo does
//! - `error`: Construction and configuration errors

pub mod clock;
pub mod error;
pub mod settings;
pub mod sim;
pub mod spawner;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use clock::FrameClock;
pub use error::SimError;
pub use settings::{Material, WorldSettings};
pub use spawner::Spawner;

/// Reference simulation constants
pub mod consts {
    use glam::DVec2;

    /// Visual tick rate of the host loop (Hz)
    pub const FRAMES_PER_SECOND: f64 = 60.0;
    /// Integration substeps per tick
    pub const SUB_STEPS: u32 = 8;
    /// Gravity force added to every body each substep
    pub const GRAVITY: DVec2 = DVec2::new(0.0, 9.81);

    /// Default restitution for circles
    pub const CIRCLE_RESTITUTION: f64 = 0.9;
    /// Default restitution for rectangles
    pub const RECTANGLE_RESTITUTION: f64 = 0.6;

    /// Aluminum
    pub const DENSITY: f64 = 2700.0;
    pub const THICKNESS: f64 = 0.005;
    pub const STATIC_FRICTION: f64 = 0.08;
    pub const DYNAMIC_FRICTION: f64 = 0.06;

    /// Color forced onto static bodies
    pub const STATIC_COLOR: &str = "#8d8d8d";

    /// Random body palette
    pub const PALETTE: [&str; 9] = [
        "#fc39ed", "#39fc4c", "#3963fc", "#fc6d39", "#fc396a", "#fcea39", "#fc3939", "#39fce6",
        "#255df4",
    ];

    /// Demo spawn size range: `[MIN_SIZE, MIN_SIZE + MAX_SIZE)`
    pub const MIN_SIZE: f64 = 20.0;
    pub const MAX_SIZE: f64 = 40.0;
    /// Ground slab height in the demo scene
    pub const GROUND_HEIGHT: f64 = 40.0;
}
