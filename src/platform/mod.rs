//! Browser platform layer
//!
//! Acquires the canvas, forwards pointer movement (mouse, pen, touch) into the session and runs
//! one frame per `requestAnimationFrame` callback, forever.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent};

use crate::driver::Session;
use crate::renderer::CanvasSurface;
use crate::tuning::Tuning;

/// DOM id of the play surface
pub const CANVAS_ID: &str = "pongCanvas";

/// Everything the browser callbacks share
struct Game {
    session: Session<Pcg32>,
    surface: CanvasSurface,
}

/// Look up the canvas and its 2D context
fn acquire_canvas() -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let document = web_sys::window()
        .ok_or("no window")?
        .document()
        .ok_or("no document")?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or("no canvas element")?
        .dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d context unavailable")?
        .dyn_into()?;
    Ok((canvas, ctx))
}

/// Start the game on the page's canvas
///
/// Missing canvas/context or unplayable tunables are fatal.
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Canvas Pong starting...");

    let (canvas, ctx) = match acquire_canvas() {
        Ok(found) => found,
        Err(e) => {
            log::error!("Cannot start without a drawing surface: {:?}", e);
            panic!("canvas #{CANVAS_ID} unavailable");
        }
    };

    let tuning = Tuning::with_playfield(canvas.width() as f32, canvas.height() as f32);
    let seed = js_sys::Date::now() as u64;
    let session = match Session::new(tuning, Pcg32::seed_from_u64(seed)) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Canvas too small to play on: {}", e);
            panic!("unplayable tuning: {e}");
        }
    };
    log::info!("Game initialized with seed: {}", seed);

    let game = Rc::new(RefCell::new(Game {
        session,
        surface: CanvasSurface::new(ctx),
    }));

    setup_pointer(&canvas, game.clone());
    request_animation_frame(game);
    log::info!("Canvas Pong running!");
}

fn setup_pointer(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
    let canvas_clone = canvas.clone();
    // Pointer events cover mouse, pen and touch alike
    let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
        let rect = canvas_clone.get_bounding_client_rect();
        let pointer_y = event.client_y() as f32 - rect.top() as f32;
        game.borrow_mut().session.pointer_moved(pointer_y);
    });
    let _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn request_animation_frame(game: Rc<RefCell<Game>>) {
    let Some(window) = web_sys::window() else {
        log::error!("Window gone, stopping game loop");
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        game_loop(game);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(game: Rc<RefCell<Game>>) {
    {
        let mut g = game.borrow_mut();
        let Game { session, surface } = &mut *g;
        session.frame(surface);
    }
    request_animation_frame(game);
}
