//! Rigid Sandbox headless runner
//!
//! Builds the demo scene (ground plus scattered bodies), feeds a simulated
//! 144 Hz display through the 60 Hz frame clock and logs body counts. Usage:
//!
//! ```text
//! RUST_LOG=info rigid-sandbox [settings.json]
//! ```

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rigid_sandbox::{FrameClock, Spawner, WorldSettings, sim::World};

    env_logger::init();
    log::info!("Rigid Sandbox (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => WorldSettings::load(std::path::Path::new(&path)),
        None => WorldSettings::default(),
    };

    const WIDTH: f64 = 1280.0;
    const HEIGHT: f64 = 720.0;
    const FRAMES: u32 = 600;
    /// Simulated display refresh (ms)
    const DISPLAY_FRAME: f64 = 1000.0 / 144.0;

    let mut clock = FrameClock::new(settings.frames_per_second);
    let mut spawner = Spawner::new(settings.seed);
    let mut world = World::new(settings);

    let scene = spawner
        .ground(&mut world, WIDTH, HEIGHT)
        .and_then(|_| spawner.scatter_circles(&mut world, 20, WIDTH, HEIGHT * 0.6))
        .and_then(|_| spawner.scatter_rectangles(&mut world, 20, WIDTH, HEIGHT * 0.6));
    if let Err(err) = scene {
        log::error!("Failed to build scene: {}", err);
        std::process::exit(1);
    }

    let mut culled = 0;
    for frame in 0..FRAMES {
        let now = f64::from(frame) * DISPLAY_FRAME;
        let Some(delta) = clock.tick(now) else {
            continue;
        };

        world.step(delta);
        culled += world.remove_offscreen(WIDTH, HEIGHT).len();

        if world.ticks().is_multiple_of(60) {
            log::info!(
                "tick {:>4}: {} bodies, {} contacts, {:.2}ms frame",
                world.ticks(),
                world.len(),
                world.last_contacts(),
                delta
            );
        }
    }

    log::info!(
        "Done after {} ticks: {} bodies remain, {} culled",
        world.ticks(),
        world.len(),
        culled
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is `wasm::start`, this is just to satisfy the compiler
}
