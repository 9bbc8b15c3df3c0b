//! Canvas 2D surface

use web_sys::CanvasRenderingContext2d;

use super::{Color, SCORE_FONT, Surface};

/// Surface backed by a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        ctx.set_font(SCORE_FONT);
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(color.as_str());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn draw_circle(&mut self, x: f32, y: f32, r: f32, color: Color) {
        self.ctx.set_fill_style_str(color.as_str());
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(x as f64, y as f64, r as f64, 0.0, std::f64::consts::TAU)
        {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        self.ctx.set_fill_style_str(color.as_str());
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
