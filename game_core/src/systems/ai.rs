use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Move the right paddle toward the ball.
///
/// Reactive only: steps a fixed distance when the ball is outside the
/// deadzone around the paddle center, otherwise holds. No prediction.
pub fn move_ai_paddle(world: &mut World, config: &Config) {
    let ball_y = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => ball.pos.y,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Right {
            continue;
        }

        let center = paddle.center_y();
        if ball_y < center - config.ai_deadzone {
            paddle.y -= config.ai_step;
        } else if ball_y > center + config.ai_deadzone {
            paddle.y += config.ai_step;
        }

        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
