//! Rewind Snake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use rewind_snake::platform::{BestScore, InputState, Swipe};
    use rewind_snake::renderer::CanvasRenderer;
    use rewind_snake::sim::GameEvent;
    use rewind_snake::{Game, GameConfig, ParticleSystem};

    /// Food pulse advance per frame
    const PULSE_STEP: f64 = 0.1;

    /// Everything the browser callbacks share
    struct App {
        game: Game,
        input: InputState,
        particles: ParticleSystem,
        renderer: CanvasRenderer,
        last_time: f64,
        pulse: f64,
        touch_start: (f32, f32),
    }

    impl App {
        fn frame(&mut self, time: f64) {
            let elapsed = if self.last_time > 0.0 {
                time - self.last_time
            } else {
                0.0
            };
            self.last_time = time;
            self.pulse += PULSE_STEP;

            self.input.sync(&mut self.game);
            self.game.advance(elapsed);
            self.handle_events();
            self.particles.update();

            let view = self.game.view();
            self.renderer.render(&view, &self.particles, self.pulse);
        }

        fn handle_events(&mut self) {
            for event in self.game.drain_events() {
                match event {
                    GameEvent::FoodEaten { burst, .. } => self.particles.emit(&burst),
                    GameEvent::NewBestScore(best) => BestScore(best).save(),
                    GameEvent::Restarted => self.particles.clear(),
                    _ => {}
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Rewind Snake starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = GameConfig::default();
        let (width, height) = config.pixel_size();
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("Cannot get 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let best = BestScore::load();
        let app = Rc::new(RefCell::new(App {
            game: Game::new(config, best.value(), seed),
            input: InputState::new(),
            particles: ParticleSystem::new(seed.wrapping_add(1)),
            renderer: CanvasRenderer::new(ctx, config),
            last_time: 0.0,
            pulse: 0.0,
            touch_start: (0.0, 0.0),
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, app.clone());
        request_animation_frame(app);

        log::info!("Rewind Snake running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                let a = &mut *a;
                if a.input.key_down(&event.key(), &mut a.game) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                let a = &mut *a;
                a.input.key_up(&event.key(), &mut a.game);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    app.borrow_mut().touch_start =
                        (touch.client_x() as f32, touch.client_y() as f32);
                }
                event.prevent_default();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.changed_touches().get(0) {
                    let mut a = app.borrow_mut();
                    let a = &mut *a;
                    let dx = touch.client_x() as f32 - a.touch_start.0;
                    let dy = touch.client_y() as f32 - a.touch_start.1;
                    a.input.swipe(Swipe::classify(dx, dy), &mut a.game);
                }
                event.prevent_default();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Rewind Snake (native) starting...");
    log::info!("The playable build runs in the browser - build for wasm32 and open index.html");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a seeded run into the east wall, rewind a few frames, turn away and
/// keep playing. Logs every transition.
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use rewind_snake::sim::{Direction, GameEvent, GamePhase, GridPos};
    use rewind_snake::{Game, GameConfig};

    let mut game = Game::new(GameConfig::default(), 0, 2024);
    game.handle_primary_action();
    game.place_food(GridPos::new(18, 10));

    let mut guard = 0;
    while game.phase() == GamePhase::Running && guard < 1000 {
        let interval = game.tick_interval_ms();
        game.advance(interval);
        guard += 1;
    }

    let died_at = game.rewind_index();
    game.scrub_rewind(-4);
    let view = game.view();
    log::info!(
        "Rewound from frame {} to {} (head {:?}, score {})",
        died_at,
        game.rewind_index(),
        view.body.first(),
        view.score
    );

    game.handle_primary_action();
    game.set_direction(Direction::Down);
    for _ in 0..5 {
        let interval = game.tick_interval_ms();
        game.advance(interval);
    }

    for event in game.drain_events() {
        if let GameEvent::FoodEaten { cell, .. } = event {
            log::info!("Food eaten at {:?}", cell);
        }
    }

    println!(
        "phase={:?} score={} best={} frames={}",
        game.phase(),
        game.score(),
        game.best_score(),
        game.history().len()
    );
}
