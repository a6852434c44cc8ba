use glam::Vec2;

use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub ball_radius: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub spin_factor: f32,
    pub ai_step: f32,
    pub ai_deadzone: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            spin_factor: Params::SPIN_FACTOR,
            ai_step: Params::AI_STEP,
            ai_deadzone: Params::AI_DEADZONE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on a field of the given pixel size (the canvas size)
    pub fn for_field(width: f32, height: f32) -> Self {
        Self {
            field_width: width,
            field_height: height,
            ..Self::default()
        }
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.field_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Y position (top edge) that centers a paddle vertically
    pub fn paddle_start_y(&self) -> f32 {
        self.field_height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp a paddle's top edge to the field.
    ///
    /// Lower bound first, then upper, so a field shorter than the paddle
    /// pins it to `field_height - paddle_height` instead of panicking.
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.max(0.0).min(self.field_height - self.paddle_height)
    }

    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }
}
