//! Game state and core simulation types
//!
//! All state the simulation reads or writes lives here, so a frame can be
//! replayed from a snapshot.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::{Tuning, TuningError};

/// Which end of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, pointer controlled
    Player,
    /// Right paddle, driven by the opponent controller
    Opponent,
}

/// A paddle; `x`/`y` are its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Paddle {
    /// Create a vertically centered paddle for `side`
    pub fn new(side: Side, tuning: &Tuning) -> Self {
        let x = match side {
            Side::Player => tuning.player_paddle_x(),
            Side::Opponent => tuning.opponent_paddle_x(),
        };
        Self {
            side,
            x,
            y: tuning.clamp_paddle_y(tuning.playfield_height / 2.0 - tuning.paddle_height / 2.0),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            speed: tuning.paddle_speed,
        }
    }

    /// Vertical center
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Edge facing the middle of the playfield
    #[inline]
    pub fn face_x(&self) -> f32 {
        match self.side {
            Side::Player => self.x + self.width,
            Side::Opponent => self.x,
        }
    }

    /// Whether `y` lies strictly inside the paddle's vertical span
    #[inline]
    pub fn spans(&self, y: f32) -> bool {
        y > self.y && y < self.y + self.height
    }

    /// Keep the paddle inside `[0, playfield_height - height]`
    pub fn clamp(&mut self, playfield_height: f32) {
        let max_y = (playfield_height - self.height).max(0.0);
        self.y = self.y.clamp(0.0, max_y);
    }

    /// Center the paddle on a pointer position (direct positional control)
    pub fn center_on(&mut self, pointer_y: f32, playfield_height: f32) {
        self.y = pointer_y - self.height / 2.0;
        self.clamp(playfield_height);
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Serve from `center`: horizontal speed is `base_speed` toward a random
    /// side, vertical speed is uniform in `[-base_speed, base_speed]`
    pub fn reset<R: Rng>(&mut self, center: Vec2, base_speed: f32, rng: &mut R) {
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.pos = center;
        self.vel = Vec2::new(
            direction * base_speed,
            rng.random_range(-base_speed..=base_speed),
        );
    }
}

/// Match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Award one point
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Completed simulation steps
    pub frame: u64,
}

impl GameState {
    /// Create a new match with centered paddles and a freshly served ball
    ///
    /// Fails if `tuning` does not describe a playable field.
    pub fn new<R: Rng>(tuning: Tuning, rng: &mut R) -> Result<Self, TuningError> {
        tuning.validate()?;
        let mut state = Self {
            tuning,
            player: Paddle::new(Side::Player, &tuning),
            opponent: Paddle::new(Side::Opponent, &tuning),
            ball: Ball::new(tuning.center(), Vec2::ZERO, tuning.ball_radius),
            score: Score::new(),
            frame: 0,
        };
        state.reset_ball(rng);
        Ok(state)
    }

    /// Put the ball back in the middle with a random serve
    pub fn reset_ball<R: Rng>(&mut self, rng: &mut R) {
        self.ball
            .reset(self.tuning.center(), self.tuning.ball_base_speed, rng);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_paddles_start_centered() {
        let tuning = Tuning::default();
        let state = GameState::new(tuning, &mut Pcg32::seed_from_u64(1)).unwrap();
        assert_eq!(state.player.y, 155.0);
        assert_eq!(state.opponent.y, 155.0);
        assert_eq!(state.player.x, 20.0);
        assert_eq!(state.opponent.x, 768.0);
        assert_eq!(state.player.center_y(), 200.0);
    }

    #[test]
    fn test_unplayable_tuning_is_rejected() {
        let tuning = Tuning {
            ball_base_speed: -6.0,
            ..Tuning::default()
        };
        let result = GameState::new(tuning, &mut Pcg32::seed_from_u64(1));
        assert_eq!(
            result.unwrap_err(),
            TuningError::NonPositive {
                field: "ball_base_speed",
                value: -6.0
            }
        );
    }

    #[test]
    fn test_paddle_faces() {
        let tuning = Tuning::default();
        assert_eq!(Paddle::new(Side::Player, &tuning).face_x(), 32.0);
        assert_eq!(Paddle::new(Side::Opponent, &tuning).face_x(), 768.0);
    }

    #[test]
    fn test_spans_is_strict() {
        let paddle = Paddle::new(Side::Player, &Tuning::default());
        assert!(paddle.spans(200.0));
        assert!(!paddle.spans(155.0));
        assert!(!paddle.spans(245.0));
        assert!(paddle.spans(155.5));
    }

    #[test]
    fn test_center_on_pointer() {
        let mut paddle = Paddle::new(Side::Player, &Tuning::default());
        paddle.center_on(100.0, 400.0);
        assert_eq!(paddle.y, 55.0);

        paddle.center_on(10.0, 400.0);
        assert_eq!(paddle.y, 0.0, "Pointer near the top pins the paddle to 0");

        paddle.center_on(399.0, 400.0);
        assert_eq!(paddle.y, 310.0, "Pointer near the bottom pins the paddle");
    }

    #[test]
    fn test_ball_reset_speed_bounds() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, 12.0);
        let mut saw_left = false;
        let mut saw_right = false;
        for _ in 0..200 {
            ball.reset(Vec2::new(400.0, 200.0), 6.0, &mut rng);
            assert_eq!(ball.pos, Vec2::new(400.0, 200.0));
            assert_eq!(ball.vel.x.abs(), 6.0);
            assert!(ball.vel.y.abs() <= 6.0);
            saw_left |= ball.vel.x < 0.0;
            saw_right |= ball.vel.x > 0.0;
        }
        assert!(saw_left && saw_right, "Serve direction should be random");
    }

    #[test]
    fn test_score_award() {
        let mut score = Score::new();
        score.award(Side::Opponent);
        score.award(Side::Player);
        score.award(Side::Opponent);
        assert_eq!(score, Score { player: 1, opponent: 2 });
    }
}
