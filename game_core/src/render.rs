//! Frame drawing against an abstract 2D surface

use crate::{Ball, Config, Paddle, Params, Side};
use hecs::World;

/// The drawing primitives a frame needs
pub trait Canvas {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str);
}

/// Draw the dashed center net
pub fn draw_net<C: Canvas + ?Sized>(canvas: &mut C, config: &Config) {
    let x = config.field_width / 2.0 - Params::NET_WIDTH / 2.0;
    let stride = Params::NET_SEGMENT + Params::NET_GAP;
    let mut y = 0.0;
    while y < config.field_height {
        canvas.fill_rect(x, y, Params::NET_WIDTH, Params::NET_SEGMENT, Params::NET_COLOR);
        y += stride;
    }
}

pub fn draw_paddle<C: Canvas + ?Sized>(canvas: &mut C, paddle: &Paddle) {
    canvas.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, paddle.color);
}

pub fn draw_ball<C: Canvas + ?Sized>(canvas: &mut C, ball: &Ball) {
    canvas.fill_circle(ball.pos.x, ball.pos.y, ball.radius, ball.color);
}

/// Draw a full frame: clear, net, paddles (left then right), ball.
///
/// Reads the world only.
pub fn draw<C: Canvas + ?Sized>(world: &World, config: &Config, canvas: &mut C) {
    canvas.clear(config.field_width, config.field_height);
    draw_net(canvas, config);

    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side != Side::Left);
    for paddle in &paddles {
        draw_paddle(canvas, paddle);
    }

    for (_e, ball) in world.query::<&Ball>().iter() {
        draw_ball(canvas, ball);
    }
}
