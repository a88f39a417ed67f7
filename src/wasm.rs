//! Browser bindings
//!
//! A thin `wasm-bindgen` facade so a canvas page can drive the world: it owns
//! the pointer handlers and drawing, and calls in here once per animation frame.

use wasm_bindgen::prelude::*;

use crate::clock::FrameClock;
use crate::settings::WorldSettings;
use crate::sim::{BodyHandle, World};
use crate::spawner::Spawner;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
}

#[wasm_bindgen]
pub struct Sandbox {
    world: World,
    clock: FrameClock,
    spawner: Spawner,
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl Sandbox {
    /// Create a sandbox for a `width` x `height` viewport with ground placed.
    /// `settings_json` may be empty to use defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, settings_json: &str) -> Result<Sandbox, JsError> {
        let settings = if settings_json.is_empty() {
            WorldSettings::default()
        } else {
            WorldSettings::from_json(settings_json)?
        };
        let clock = FrameClock::new(settings.frames_per_second);
        let mut spawner = Spawner::new(settings.seed);
        let mut world = World::new(settings);
        spawner.ground(&mut world, width, height)?;
        log::info!("Sandbox ready ({}x{})", width, height);

        Ok(Sandbox {
            world,
            clock,
            spawner,
            width,
            height,
        })
    }

    /// Drop a random body at the pointer. Returns its handle.
    pub fn spawn_at(&mut self, x: f64, y: f64, velocity_scale: f64) -> Result<u32, JsError> {
        let handle = self
            .spawner
            .random_body_at(&mut self.world, x, y, velocity_scale)?;
        Ok(handle.0)
    }

    /// Feed an animation-frame timestamp. Steps and culls when a tick is due;
    /// returns true when the caller should redraw.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        match self.clock.tick(now_ms) {
            Some(delta) => {
                self.world.step(delta);
                self.world.remove_offscreen(self.width, self.height);
                true
            }
            None => false,
        }
    }

    /// Render state as JSON: `[{ handle, shape, color, is_static }, ...]`
    pub fn bodies_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.world.snapshot())?)
    }

    pub fn remove(&mut self, handle: u32) -> bool {
        self.world.remove(BodyHandle(handle))
    }

    pub fn body_count(&self) -> usize {
        self.world.len()
    }

    /// Raw delta of the last simulated frame (ms)
    pub fn last_delta(&self) -> f64 {
        self.clock.last_delta()
    }
}
