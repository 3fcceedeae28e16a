//! Neon Field entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_field {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use neon_field::consts::CANVAS_ID;
    use neon_field::render::{CanvasSurface, WindowViewport};
    use neon_field::{FieldSettings, ParticleField, tick};

    /// Everything the frame callback touches
    struct Scene {
        field: ParticleField,
        surface: CanvasSurface,
        viewport: WindowViewport,
    }

    impl Scene {
        fn resize(&mut self) {
            self.field.resize_surface(&mut self.surface, &self.viewport);
        }

        fn frame(&mut self) {
            let stats = tick(&mut self.field, &mut self.surface);
            if stats.frame % 600 == 1 {
                log::debug!(
                    "frame {}: {} particles, {} links",
                    stats.frame,
                    stats.discs,
                    stats.links
                );
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Neon Field starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let settings = FieldSettings::load();
        let field = ParticleField::from_settings(settings, js_sys::Date::now() as u64);
        log::info!("Field initialized with seed: {}", field.seed);

        let surface = CanvasSurface::from_element_id(&window, CANVAS_ID)?;
        let mut scene = Scene {
            field,
            surface,
            viewport: WindowViewport(window.clone()),
        };

        // Size first so the particle count follows the real viewport
        scene.resize();
        scene.field.init_particles(&scene.surface);

        let scene = Rc::new(RefCell::new(scene));
        setup_resize_handler(&window, scene.clone())?;

        request_animation_frame(scene);

        log::info!("Neon Field running!");
        Ok(())
    }

    fn setup_resize_handler(
        window: &web_sys::Window,
        scene: Rc<RefCell<Scene>>,
    ) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            scene.borrow_mut().resize();
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(scene: Rc<RefCell<Scene>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping frame loop");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(scene);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn frame_loop(scene: Rc<RefCell<Scene>>) {
        scene.borrow_mut().frame();
        request_animation_frame(scene);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_field::run() {
        log::error!("Neon Field failed to start: {:?}", e);
        web_sys::console::error_1(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neon_field::field::FrameStats;
    use neon_field::render::RecordingSurface;
    use neon_field::{FieldSettings, ParticleField, tick};

    env_logger::init();
    log::info!("Neon Field (native) starting...");
    log::info!("Native mode runs headless - use `trunk serve` for the canvas version");

    // Usage: neon-field [WIDTH HEIGHT FRAMES SEED]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let width: u32 = parse_arg(&args, 0, 1280);
    let height: u32 = parse_arg(&args, 1, 720);
    let frames: u64 = parse_arg(&args, 2, 600);

    let settings = FieldSettings::load();
    let seed: u64 = parse_arg(&args, 3, settings.seed.unwrap_or(0));
    let mut field = ParticleField::new(seed, settings);
    let mut surface = RecordingSurface::new(0, 0);

    field.resize_surface(&mut surface, &(width, height));
    field.init_particles(&surface);

    let mut stats = FrameStats::default();
    for _ in 0..frames {
        stats = tick(&mut field, &mut surface);
        if stats.frame % 120 == 0 {
            log::debug!("frame {}: {} links", stats.frame, stats.links);
        }
    }

    let summary = serde_json::json!({
        "seed": field.seed,
        "surface": [width, height],
        "last_frame": stats,
    });
    println!("{}", summary);
}

/// Positional argument `i`, or `default` if missing or unparsable
#[cfg(not(target_arch = "wasm32"))]
fn parse_arg<T>(args: &[String], i: usize, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.get(i).map(|s| s.parse::<T>()) {
        Some(Ok(v)) => v,
        Some(Err(e)) => {
            log::warn!("Ignoring argument {:?}: {}", args[i], e);
            default
        }
        None => default,
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
