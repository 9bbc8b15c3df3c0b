//! Game tunables
//!
//! Everything adjustable about a match lives in one plain record. Defaults come
//! from [`crate::consts`]; hosts may override them from JSON before a session starts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Reasons a [`Tuning`] cannot produce a playable field
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// A dimension or speed that must be positive was not
    NonPositive { field: &'static str, value: f32 },
    /// A gap or tolerance that must not be negative was
    Negative { field: &'static str, value: f32 },
    /// Paddles are taller than the playfield
    PaddleTooTall { paddle_height: f32, playfield_height: f32 },
    /// The ball cannot fit between the top and bottom walls
    BallTooLarge { ball_radius: f32, playfield_height: f32 },
    /// The two paddles would overlap horizontally
    PaddlesOverlap { playfield_width: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            TuningError::Negative { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            TuningError::PaddleTooTall {
                paddle_height,
                playfield_height,
            } => write!(
                f,
                "paddle height {paddle_height} does not fit in playfield height {playfield_height}"
            ),
            TuningError::BallTooLarge {
                ball_radius,
                playfield_height,
            } => write!(
                f,
                "ball radius {ball_radius} does not fit in playfield height {playfield_height}"
            ),
            TuningError::PaddlesOverlap { playfield_width } => {
                write!(f, "playfield width {playfield_width} is too narrow for both paddles")
            }
        }
    }
}

impl std::error::Error for TuningError {}

/// Game tunables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_base_speed: f32,
    pub ai_deadzone: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,
            paddle_speed: PADDLE_SPEED,
            ball_radius: BALL_RADIUS,
            ball_base_speed: BALL_BASE_SPEED,
            ai_deadzone: AI_DEADZONE,
        }
    }
}

impl Tuning {
    /// Defaults with a different playfield size (e.g. the canvas element's size)
    pub fn with_playfield(width: f32, height: f32) -> Self {
        Self {
            playfield_width: width,
            playfield_height: height,
            ..Self::default()
        }
    }

    /// Parse tunables from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check that the tunables describe a playable field
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_base_speed", self.ball_base_speed),
        ];
        // `!(v > 0.0)` also catches NaN
        if let Some(&(field, value)) = positive.iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(TuningError::NonPositive { field, value });
        }
        let non_negative = [
            ("paddle_inset", self.paddle_inset),
            ("ai_deadzone", self.ai_deadzone),
        ];
        if let Some(&(field, value)) = non_negative.iter().find(|(_, v)| !(*v >= 0.0)) {
            return Err(TuningError::Negative { field, value });
        }
        if self.paddle_height > self.playfield_height {
            return Err(TuningError::PaddleTooTall {
                paddle_height: self.paddle_height,
                playfield_height: self.playfield_height,
            });
        }
        if self.ball_radius * 2.0 > self.playfield_height {
            return Err(TuningError::BallTooLarge {
                ball_radius: self.ball_radius,
                playfield_height: self.playfield_height,
            });
        }
        if self.player_paddle_x() + self.paddle_width >= self.opponent_paddle_x() {
            return Err(TuningError::PaddlesOverlap {
                playfield_width: self.playfield_width,
            });
        }
        Ok(())
    }

    /// Left edge of the player's paddle
    pub fn player_paddle_x(&self) -> f32 {
        self.paddle_inset
    }

    /// Left edge of the opponent's paddle
    pub fn opponent_paddle_x(&self) -> f32 {
        self.playfield_width - self.paddle_width - self.paddle_inset
    }

    /// Largest valid paddle top edge
    pub fn max_paddle_y(&self) -> f32 {
        (self.playfield_height - self.paddle_height).max(0.0)
    }

    /// Clamp a paddle top edge into the playfield
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    /// Center of the playfield
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.playfield_width / 2.0, self.playfield_height / 2.0)
    }
}
