//! Canvas Pong - classic two-paddle Pong on a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, collisions, scoring, opponent)
//! - `renderer`: Stateless drawing against a `Surface`
//! - `driver`: Frame scheduling and input queueing around the simulation
//! - `tuning`: Game tunables gathered into one record
//! - `platform`: Browser wiring (canvas, pointer, animation frames)

pub mod driver;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use driver::{DriveSummary, FixedSteps, FrameSource, ScriptedFrames, Session};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (canvas pixels)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    /// Gap between a paddle's outer edge and the playfield side
    pub const PADDLE_INSET: f32 = 20.0;
    /// Opponent paddle travel per frame
    pub const PADDLE_SPEED: f32 = 6.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    /// Ball speed after every reset and every paddle hit (units per frame)
    pub const BALL_BASE_SPEED: f32 = 6.0;

    /// Opponent holds still while the ball is within this distance of its center
    pub const AI_DEADZONE: f32 = 20.0;

    /// Maximum paddle deflection angle (45 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Seed used by the native demo
    pub const DEMO_SEED: u64 = 0x5eed_0f_9a11;
}
