//! Click Targets entry point
//!
//! Handles platform-specific initialization and wires host events into the
//! session.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::{Context, Result};
    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use click_targets::consts::TICK_PERIOD_MS;
    use click_targets::renderer::{RenderState, draw_field};
    use click_targets::sim::{CanvasRect, Event, Outcome, Session, TimerCommand};
    use click_targets::Variant;

    /// Game instance holding all state
    struct Game {
        session: Session,
        render_state: Option<RenderState>,
        /// Timer callback, created once and reused across start/stop
        tick_fn: Option<js_sys::Function>,
        interval: Option<i32>,
    }

    impl Game {
        fn new(variant: Variant, seed: u64) -> Self {
            Self {
                session: Session::new(variant.features(), seed),
                render_state: None,
                tick_fn: None,
                interval: None,
            }
        }

        /// Feed one host event through the session and act on the outcome
        fn handle(&mut self, event: Event) {
            let outcome = self.session.handle_event(event);
            self.apply(outcome);
        }

        fn apply(&mut self, outcome: Outcome) {
            if let Some(command) = outcome.timer {
                self.set_timer(command);
            }
            if outcome.redraw {
                self.render();
                self.update_hud();
            }
        }

        fn set_timer(&mut self, command: TimerCommand) {
            let Some(window) = web_sys::window() else {
                return;
            };
            match command {
                TimerCommand::Start => {
                    if self.interval.is_some() {
                        return;
                    }
                    let Some(tick_fn) = self.tick_fn.as_ref() else {
                        return;
                    };
                    match window.set_interval_with_callback_and_timeout_and_arguments_0(
                        tick_fn,
                        TICK_PERIOD_MS,
                    ) {
                        Ok(handle) => self.interval = Some(handle),
                        Err(e) => log::error!("Failed to start timer: {:?}", e),
                    }
                }
                TimerCommand::Stop => {
                    if let Some(handle) = self.interval.take() {
                        window.clear_interval_with_handle(handle);
                    }
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            if let Err(err) = draw_field(&self.session.field, render_state) {
                match err.downcast_ref::<wgpu::SurfaceError>() {
                    Some(wgpu::SurfaceError::Lost) | Some(wgpu::SurfaceError::Outdated) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Some(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    _ => log::warn!("Render error: {:#}", err),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let field = &self.session.field;
            if let Some(el) = document.get_element_by_id("targets-remaining") {
                el.set_text_content(Some(&field.targets_remaining.to_string()));
            }
            if let Some(el) = document.get_element_by_id("score") {
                let text = field.score().map(|s| s.to_string()).unwrap_or_default();
                el.set_text_content(Some(&text));
            }
            if let Some(el) = document.get_element_by_id("status") {
                el.set_text_content(Some(&field.status_text().join("  ")));
            }
        }
    }

    /// `?variant=...` in the page URL picks the variant
    fn variant_from_url() -> Option<Variant> {
        let search = web_sys::window()?.location().search().ok()?;
        let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
        Variant::from_str(&params.get("variant")?)
    }

    async fn init_renderer(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<RenderState> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .context("failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height).await
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Click Targets starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("gl-canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No canvas element #gl-canvas");
            return;
        };
        if let Err(e) = canvas.style().set_property("cursor", "crosshair") {
            log::warn!("Failed to set cursor: {:?}", e);
        }

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let variant = variant_from_url().unwrap_or_default();
        log::info!("Variant: {}", variant.as_str());

        let render_state = match init_renderer(&canvas, width, height).await {
            Ok(render_state) => render_state,
            Err(e) => {
                log::error!("Graphics unavailable: {:#}", e);
                if let Err(e) = window.alert_with_message("WebGPU isn't available") {
                    log::error!("Failed to show alert: {:?}", e);
                }
                return;
            }
        };

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(variant, seed)));
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_timer(game.clone());

        {
            let mut g = game.borrow_mut();
            let timer = g.session.initial_timer();
            g.apply(Outcome {
                redraw: true,
                timer,
                cleared: false,
            });
        }

        log::info!("Click Targets running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse click
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                // Bounding rect carries the page offset (padding) of the canvas
                let rect = canvas_clone.get_bounding_client_rect();
                let rect = CanvasRect::new(
                    rect.left() as f32,
                    rect.top() as f32,
                    canvas_clone.client_width() as f32,
                    canvas_clone.client_height() as f32,
                );
                let client = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                game.borrow_mut().handle(Event::Click { client, rect });
            });
            if let Err(e) =
                canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            {
                log::error!("Failed to attach click listener: {:?}", e);
            }
            closure.forget();
        }

        // Keyboard
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                let mut chars = key.chars();
                if let (Some(c), None) = (chars.next(), chars.next()) {
                    game.borrow_mut().handle(Event::Key(c));
                }
            });
            if let Err(e) =
                window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            {
                log::error!("Failed to attach keydown listener: {:?}", e);
            }
            closure.forget();
        }
    }

    /// Create the interval callback; the session decides when it runs
    fn setup_timer(game: Rc<RefCell<Game>>) {
        let tick_game = game.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            tick_game.borrow_mut().handle(Event::Tick);
        });
        let function: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        closure.forget();
        game.borrow_mut().tick_fn = Some(function);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Click Targets (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    println!("\nPlaying every variant headless...");
    for variant in click_targets::Variant::ALL {
        play_headless(variant);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Click every target once, tick for two seconds, and report the HUD
#[cfg(not(target_arch = "wasm32"))]
fn play_headless(variant: click_targets::Variant) {
    use click_targets::sim::{CanvasRect, Event, Session};
    use glam::Vec2;

    let rect = CanvasRect::new(0.0, 0.0, 512.0, 512.0);
    let mut session = Session::new(variant.features(), 0xC11C);

    for _ in 0..120 {
        session.handle_event(Event::Tick);
    }
    let centers: Vec<Vec2> = session.field.targets.iter().map(|t| t.center).collect();
    for center in centers {
        let client = Vec2::new((center.x + 1.0) * 256.0, (1.0 - center.y) * 256.0);
        session.handle_event(Event::Click { client, rect });
    }

    println!("{:>10}: {}", variant.as_str(), session.field.status_text().join(", "));
}
