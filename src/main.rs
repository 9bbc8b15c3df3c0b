//! Canvas Pong entry point
//!
//! In the browser this starts the animation loop on the page's canvas. The
//! native build has no window; it plays a short headless match instead.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    canvas_pong::platform::start();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::consts::DEMO_SEED;
    use canvas_pong::renderer::RecordingSurface;
    use canvas_pong::sim::{FrameInput, Side};
    use canvas_pong::{ScriptedFrames, Session, Tuning};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let tuning = Tuning::default();
    let mut session = match Session::new(tuning, Pcg32::seed_from_u64(DEMO_SEED)) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Unplayable tuning: {}", e);
            std::process::exit(1);
        }
    };
    let mut surface = RecordingSurface::with_size(tuning.playfield_width, tuning.playfield_height);

    // One minute at 60 Hz with the pointer sweeping slowly up and down
    let script = (0..3_600)
        .map(|frame| {
            let phase = frame as f32 / 240.0 * std::f32::consts::TAU;
            FrameInput::pointer(tuning.playfield_height / 2.0 * (1.0 + phase.sin()))
        })
        .collect();
    let summary = session.drive(&mut ScriptedFrames::new(script), &mut surface);

    println!(
        "{} frames, {} paddle hits, {} wall bounces",
        summary.frames, summary.paddle_hits, summary.wall_hits
    );
    println!(
        "Final score: player {} - opponent {}",
        session.points(Side::Player),
        session.points(Side::Opponent)
    );
}
