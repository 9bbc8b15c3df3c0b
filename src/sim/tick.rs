//! Fixed-step simulation tick
//!
//! One call advances the match by exactly one frame. There is no delta time:
//! velocities are in units per frame.

use rand::Rng;

use super::collision::{WallHit, collide_paddle, collide_walls};
use super::opponent::track_ball;
use super::state::{GameState, Side};

/// Input gathered between two frames
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Latest pointer height relative to the top of the play surface
    pub pointer_y: Option<f32>,
}

impl FrameInput {
    pub fn pointer(y: f32) -> Self {
        Self { pointer_y: Some(y) }
    }
}

/// What happened during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameEvents {
    pub wall_hit: Option<WallHit>,
    pub paddle_hit: Option<Side>,
    pub scored: Option<Side>,
}

/// Advance the game state by one frame
///
/// Order: pointer input, ball integration, walls, player paddle, opponent
/// paddle, scoring, then the opponent controller.
pub fn tick<R: Rng>(state: &mut GameState, input: &FrameInput, rng: &mut R) -> FrameEvents {
    let tuning = state.tuning;
    let mut events = FrameEvents::default();

    if let Some(pointer_y) = input.pointer_y {
        state.player.center_on(pointer_y, tuning.playfield_height);
    }

    state.ball.pos += state.ball.vel;

    events.wall_hit = collide_walls(&mut state.ball, tuning.playfield_height);

    if collide_paddle(&mut state.ball, &state.player, tuning.ball_base_speed) {
        events.paddle_hit = Some(Side::Player);
    }
    if collide_paddle(&mut state.ball, &state.opponent, tuning.ball_base_speed) {
        events.paddle_hit = Some(Side::Opponent);
    }
    if let Some(side) = events.paddle_hit {
        log::debug!(
            "{:?} paddle hit, ball vel ({:.2}, {:.2})",
            side,
            state.ball.vel.x,
            state.ball.vel.y
        );
    }

    events.scored = check_scoring(state, rng);

    track_ball(
        &mut state.opponent,
        state.ball.pos.y,
        tuning.ai_deadzone,
        tuning.playfield_height,
    );

    state.frame += 1;
    events
}

/// Award a point and re-serve if the ball's center left the playfield
fn check_scoring<R: Rng>(state: &mut GameState, rng: &mut R) -> Option<Side> {
    let scorer = if state.ball.pos.x < 0.0 {
        Side::Opponent
    } else if state.ball.pos.x > state.tuning.playfield_width {
        Side::Player
    } else {
        return None;
    };

    state.score.award(scorer);
    state.reset_ball(rng);
    log::info!(
        "{:?} scores ({} - {})",
        scorer,
        state.score.player,
        state.score.opponent
    );
    Some(scorer)
}
