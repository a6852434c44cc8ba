use glam::Vec2;

use crate::{Config, Params, RandomSource, Rect};

/// Which edge of the field a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // Pointer-driven player
    Right, // AI
}

impl Side {
    pub fn color(self) -> &'static str {
        match self {
            Side::Left => Params::PLAYER_COLOR,
            Side::Right => Params::AI_COLOR,
        }
    }
}

/// Paddle component - a rectangle that only moves vertically
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge, fixed per side
    pub y: f32, // Top edge, clamped to the field
    pub width: f32,
    pub height: f32,
    pub color: &'static str,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: config.paddle_start_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            color: side.color(),
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Where a hit landed relative to the paddle center, -1 (top) to 1 (bottom).
    /// Corner hits fall outside that range and are left unclamped.
    pub fn impact(&self, ball_y: f32) -> f32 {
        (ball_y - self.center_y()) / (self.height / 2.0)
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // Pixels per frame
    pub radius: f32,
    pub color: &'static str,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            color: Params::BALL_COLOR,
        }
    }

    /// A ball at the field center with a random launch direction
    pub fn launch<R: RandomSource + ?Sized>(config: &Config, rng: &mut R) -> Self {
        let mut ball = Self::new(Vec2::ZERO, Vec2::ZERO, config.ball_radius);
        ball.relaunch(config, rng);
        ball
    }

    /// Reset ball to center with a fresh diagonal direction
    pub fn relaunch<R: RandomSource + ?Sized>(&mut self, config: &Config, rng: &mut R) {
        self.pos = config.field_center();
        self.vel = Vec2::new(
            config.ball_speed_x * rng.sign(),
            config.ball_speed_y * rng.sign(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedRng;

    #[test]
    fn test_paddles_start_centered_on_their_side() {
        let config = Config::new();
        let left = Paddle::new(Side::Left, &config);
        let right = Paddle::new(Side::Right, &config);

        assert_eq!(left.x, 20.0);
        assert_eq!(right.x, 765.0);
        assert_eq!(left.y, 255.0);
        assert_eq!(right.center_y(), 300.0);
        assert_eq!(left.color, "#fff");
        assert_eq!(right.color, "#f00");
    }

    #[test]
    fn test_impact_spans_paddle_height() {
        let paddle = Paddle::new(Side::Left, &Config::new());
        assert_eq!(paddle.impact(255.0), -1.0);
        assert_eq!(paddle.impact(300.0), 0.0);
        assert_eq!(paddle.impact(345.0), 1.0);
        assert!(paddle.impact(355.0) > 1.0, "Corner hits are not clamped");
    }

    #[test]
    fn test_relaunch_uses_scripted_signs() {
        let config = Config::new();
        let mut rng = ScriptedRng::new([true, false]);
        let mut ball = Ball::new(Vec2::new(-5.0, 40.0), Vec2::new(-9.0, 2.0), 10.0);

        ball.relaunch(&config, &mut rng);

        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(6.0, -3.0));
    }
}
