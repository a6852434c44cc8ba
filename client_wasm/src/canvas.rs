//! Browser 2D context as a drawing surface

use std::f64::consts::TAU;

use game_core::Canvas;
use web_sys::CanvasRenderingContext2d;

pub struct BrowserCanvas {
    ctx: CanvasRenderingContext2d,
}

impl BrowserCanvas {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Canvas for BrowserCanvas {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str) {
        self.ctx.begin_path();
        // Only throws for a negative radius
        if let Err(err) = self.ctx.arc(cx as f64, cy as f64, radius as f64, 0.0, TAU) {
            log::warn!("skipping circle at ({cx}, {cy}): {:?}", err);
            return;
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.close_path();
    }
}
