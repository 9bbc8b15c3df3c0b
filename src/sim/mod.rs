//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step only (one tick per frame)
//! - Injected, seedable RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod opponent;
pub mod state;
pub mod tick;

pub use collision::{WallHit, collide_paddle, collide_point, collide_walls, spin_velocity};
pub use opponent::track_ball;
pub use state::{Ball, GameState, Paddle, Score, Side};
pub use tick::{FrameEvents, FrameInput, tick};
