use glam::Vec2;

use crate::{Ball, Paddle};

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a circle's bounding box overlaps this rectangle.
    ///
    /// Touching edges do not count as overlap.
    pub fn overlaps_circle_bounds(&self, center: Vec2, radius: f32) -> bool {
        center.x + radius > self.x
            && center.x - radius < self.x + self.width
            && center.y + radius > self.y
            && center.y - radius < self.y + self.height
    }

    /// The same rectangle reflected across the vertical line `x = axis`
    pub fn mirrored(&self, axis: f32) -> Self {
        Self {
            x: 2.0 * axis - self.x - self.width,
            ..*self
        }
    }
}

/// Check collision between ball and a paddle
pub fn collide(ball: &Ball, paddle: &Paddle) -> bool {
    paddle.rect().overlaps_circle_bounds(ball.pos, ball.radius)
}
