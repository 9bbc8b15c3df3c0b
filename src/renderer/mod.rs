//! Rendering module
//!
//! Drawing is a pure function of [`GameState`] issued against a [`Surface`],
//! which only needs to fill rectangles, fill circles and write text.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use crate::sim::{GameState, Side};

/// A CSS color string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub &'static str);

impl Color {
    pub const BACKGROUND: Color = Color("#111");
    pub const FOREGROUND: Color = Color("#fff");
    pub const NET: Color = Color("#888");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Font used for the score digits
pub const SCORE_FONT: &str = "32px Arial";
/// Baseline of the score digits
pub const SCORE_Y: f32 = 50.0;

/// Net dash geometry
const NET_WIDTH: f32 = 2.0;
const NET_DASH: f32 = 20.0;
const NET_STRIDE: f32 = 30.0;

/// A 2D drawing target
pub trait Surface {
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn draw_circle(&mut self, x: f32, y: f32, r: f32, color: Color);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color);
}

/// Draw one frame: background, net, paddles, ball, scores
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let tuning = &state.tuning;
    let (width, height) = (tuning.playfield_width, tuning.playfield_height);

    surface.draw_rect(0.0, 0.0, width, height, Color::BACKGROUND);

    draw_net(surface, width, height);

    for side in [Side::Player, Side::Opponent] {
        let paddle = state.paddle(side);
        surface.draw_rect(
            paddle.x,
            paddle.y,
            paddle.width,
            paddle.height,
            Color::FOREGROUND,
        );
    }

    let ball = &state.ball;
    surface.draw_circle(ball.pos.x, ball.pos.y, ball.radius, Color::FOREGROUND);

    surface.draw_text(
        &state.score.player.to_string(),
        width / 4.0,
        SCORE_Y,
        Color::FOREGROUND,
    );
    surface.draw_text(
        &state.score.opponent.to_string(),
        3.0 * width / 4.0,
        SCORE_Y,
        Color::FOREGROUND,
    );
}

/// Dashed center line
fn draw_net<S: Surface + ?Sized>(surface: &mut S, width: f32, height: f32) {
    let x = width / 2.0 - NET_WIDTH / 2.0;
    let mut y = 0.0;
    while y < height {
        surface.draw_rect(x, y, NET_WIDTH, NET_DASH, Color::NET);
        y += NET_STRIDE;
    }
}
