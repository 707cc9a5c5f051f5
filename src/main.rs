//! Brick Rush entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};

    use brick_rush::consts::*;
    use brick_rush::settings::ControlConfigPatch;
    use brick_rush::{InputState, MotionController, Paddle};
    use glam::Vec2;

    /// Game instance holding all state
    struct Game {
        paddle: Paddle,
        input: InputState,
        controller: MotionController,
        last_time: f64,
        paddle_el: HtmlElement,
    }

    impl Game {
        fn new(playfield_width: f32, paddle_el: HtmlElement) -> Self {
            Self {
                paddle: Paddle::new(playfield_width, PADDLE_WIDTH),
                input: InputState::new(),
                controller: MotionController::default(),
                last_time: 0.0,
                paddle_el,
            }
        }

        /// Run one simulation tick from the frame loop
        fn update(&mut self, dt: f32) {
            let dt = dt.min(MAX_FRAME_DT);
            let snapshot = self.input.snapshot();
            self.controller.update(&mut self.paddle, &snapshot, dt);
        }

        /// Mirror the paddle position into the DOM (the page styles the
        /// element; actual drawing stays outside this crate)
        fn sync_dom(&self) {
            let state = self.paddle.state();
            let _ = self
                .paddle_el
                .style()
                .set_property("transform", &format!("translateX({}px)", state.x));
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brick Rush starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let playfield: HtmlElement = document
            .get_element_by_id("playfield")
            .expect("no playfield")
            .dyn_into()
            .expect("not an element");
        let paddle_el: HtmlElement = document
            .get_element_by_id("paddle")
            .expect("no paddle element")
            .dyn_into()
            .expect("not an element");

        let playfield_width = playfield.client_width() as f32;
        let game = Rc::new(RefCell::new(Game::new(playfield_width, paddle_el)));

        // Page-supplied control overrides, e.g.
        // <div id="playfield" data-control-config='{"smoothing_rate":0.25}'>
        if let Some(json) = playfield.get_attribute("data-control-config") {
            match ControlConfigPatch::from_json(&json) {
                Ok(patch) => game.borrow_mut().controller.update_config(patch),
                Err(e) => log::warn!("Ignoring bad control config: {}", e),
            }
        }

        setup_input_handlers(&playfield, game.clone());

        log::info!(
            "Game initialized (playfield {}px, smoothing {:?})",
            playfield_width,
            game.borrow().controller.config()
        );

        request_animation_frame(game);

        log::info!("Brick Rush running!");
    }

    fn setup_input_handlers(playfield: &HtmlElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard press/release
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().input.key_event(&event.key(), true) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().input.key_event(&event.key(), false) {
                    event.prevent_default();
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - offset coords are already playfield-relative
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                game.borrow_mut().input.mouse_move(pos);
            });
            let _ = playfield
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start/move
        for event_name in ["touchstart", "touchmove"] {
            let game = game.clone();
            let playfield_clone = playfield.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = playfield_clone.get_bounding_client_rect();
                    let pos = Vec2::new(
                        touch.client_x() as f32 - rect.left() as f32,
                        touch.client_y() as f32 - rect.top() as f32,
                    );
                    game.borrow_mut().input.touch_move(pos);
                }
            });
            let _ = playfield
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end - last finger lifted
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if event.touches().length() == 0 {
                    game.borrow_mut().input.touch_end();
                }
            });
            let _ = playfield
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                1.0 / REFERENCE_FRAME_HZ
            };
            g.last_time = time;

            g.update(dt);
            g.sync_dom();
        }

        request_animation_frame(game);
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
    log::info!("Brick Rush (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    println!("\nRunning motion control demo...");
    demo_smoothing();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_smoothing() {
    use brick_rush::consts::{PADDLE_WIDTH, PLAYFIELD_WIDTH, REFERENCE_FRAME_HZ};
    use brick_rush::{InputSnapshot, MotionController, Paddle};

    let mut paddle = Paddle::new(PLAYFIELD_WIDTH, PADDLE_WIDTH);
    let mut controller = MotionController::default();
    let dt = 1.0 / REFERENCE_FRAME_HZ;

    // Cursor parked at x=600: paddle center should ease under it
    let snapshot = InputSnapshot::Mouse { x: Some(600.0) };
    for tick in 0..180 {
        controller.update(&mut paddle, &snapshot, dt);
        if tick % 30 == 0 {
            log::info!("tick {:3}: paddle.x = {:.2}", tick, paddle.x);
        }
    }

    let expected = 600.0 - paddle.half_width();
    assert!(
        (paddle.x - expected).abs() < f32::EPSILON,
        "paddle should have converged under the cursor"
    );
    println!("✓ Paddle converged to {:.1} in 3 simulated seconds", paddle.x);
}
