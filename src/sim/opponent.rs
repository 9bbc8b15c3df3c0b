//! Opponent paddle controller
//!
//! Deliberately laggy: the paddle chases the ball's current height at a fixed
//! speed and gives up nothing to prediction.

use super::state::Paddle;

/// Step the paddle one frame toward `ball_y`
///
/// Moves by `paddle.speed` when the ball is more than `deadzone` above or below
/// the paddle center, holds otherwise, then clamps into the playfield.
pub fn track_ball(paddle: &mut Paddle, ball_y: f32, deadzone: f32, playfield_height: f32) {
    let center = paddle.center_y();
    if ball_y < center - deadzone {
        paddle.y -= paddle.speed;
    } else if ball_y > center + deadzone {
        paddle.y += paddle.speed;
    }
    paddle.clamp(playfield_height);
}
