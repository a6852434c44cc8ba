use crate::{Ball, Config, Events, RandomSource};
use hecs::World;

/// Relaunch the ball from the center once it reaches either side edge.
///
/// No score is kept; leaving the field only restarts play.
pub fn check_scoring<R: RandomSource + ?Sized>(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rng: &mut R,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x - ball.radius <= 0.0 || ball.pos.x + ball.radius >= config.field_width {
            let exit_x = ball.pos.x;
            ball.relaunch(config, rng);
            events.ball_relaunched = true;
            log::debug!(
                "ball left field at x={:.1}, relaunched with vel ({}, {})",
                exit_x,
                ball.vel.x,
                ball.vel.y
            );
        }
    }
}
