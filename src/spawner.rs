//! Seeded scene population
//!
//! Reproduces the demo sandbox: a static ground slab plus randomly sized
//! circles and rectangles dropped at pointer positions or scattered over the
//! viewport. All randomness flows through a seeded PCG so scenes replay.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::error::Result;
use crate::sim::{BodyHandle, BodyOptions, Vector2, World};

pub struct Spawner {
    rng: Pcg32,
    min_size: f64,
    max_size: f64,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            min_size: MIN_SIZE,
            max_size: MAX_SIZE,
        }
    }

    /// Override the size range `[min_size, min_size + max_size)`
    pub fn with_sizes(mut self, min_size: f64, max_size: f64) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    fn size(&mut self) -> f64 {
        self.rng.random::<f64>() * self.max_size + self.min_size
    }

    /// Circles draw a size as their diameter
    fn radius(&mut self) -> f64 {
        self.size() / 2.0
    }

    /// Uniform random direction scaled by `scale`
    fn velocity(&mut self, scale: f64) -> Vector2 {
        let angle = self.rng.random::<f64>() * std::f64::consts::TAU;
        Vector2::new(angle.cos(), angle.sin()) * scale
    }

    /// Static slab across 80% of the viewport width at 80% of its height
    pub fn ground(&mut self, world: &mut World, width: f64, height: f64) -> Result<BodyHandle> {
        world.spawn_rectangle(
            width / 2.0,
            height * 0.8,
            width * 0.8,
            GROUND_HEIGHT,
            BodyOptions::fixed(),
        )
    }

    /// Drop a random circle or rectangle at (`x`, `y`)
    pub fn random_body_at(
        &mut self,
        world: &mut World,
        x: f64,
        y: f64,
        velocity_scale: f64,
    ) -> Result<BodyHandle> {
        let options = if velocity_scale > 0.0 {
            BodyOptions::with_velocity(self.velocity(velocity_scale))
        } else {
            BodyOptions::default()
        };

        if self.rng.random_bool(0.5) {
            let radius = self.radius();
            world.spawn_circle(x, y, radius, options)
        } else {
            let (w, h) = (self.size(), self.size());
            world.spawn_rectangle(x, y, w, h, options)
        }
    }

    /// Scatter `amount` circles fully inside the viewport
    pub fn scatter_circles(
        &mut self,
        world: &mut World,
        amount: usize,
        width: f64,
        height: f64,
    ) -> Result<Vec<BodyHandle>> {
        (0..amount)
            .map(|_| {
                let radius = self.radius();
                let margin = radius * 2.0;
                let x = self.rng.random::<f64>() * (width - margin * 2.0) + margin;
                let y = self.rng.random::<f64>() * (height - margin * 2.0) + margin;
                let options = BodyOptions::with_velocity(self.velocity(0.1));
                world.spawn_circle(x, y, radius, options)
            })
            .collect()
    }

    /// Scatter `amount` rectangles over the viewport
    pub fn scatter_rectangles(
        &mut self,
        world: &mut World,
        amount: usize,
        width: f64,
        height: f64,
    ) -> Result<Vec<BodyHandle>> {
        (0..amount)
            .map(|_| {
                let (w, h) = (self.size(), self.size());
                let x = self.rng.random::<f64>() * (width - w * 2.0) + w;
                let y = self.rng.random::<f64>() * (height - h * 2.0) + h;
                let options = BodyOptions::with_velocity(self.velocity(0.1));
                world.spawn_rectangle(x, y, w, h, options)
            })
            .collect()
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(0)
    }
}
