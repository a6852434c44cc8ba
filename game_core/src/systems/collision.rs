use crate::{collide, Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Bounce the ball off the top/bottom walls and both paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Copy paddles out first so the ball can be borrowed mutably; left before right
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side != Side::Left);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls. The ball is not pushed back inside, so it may
        // sit past the edge for a frame.
        if ball.pos.y - ball.radius <= 0.0 || ball.pos.y + ball.radius >= config.field_height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
            log::trace!("ball bounced off wall at y={:.1}", ball.pos.y);
        }

        for paddle in &paddles {
            if !collide(ball, paddle) {
                continue;
            }

            // Push ball out of the paddle face it hit
            ball.pos.x = match paddle.side {
                Side::Left => paddle.x + paddle.width + ball.radius,
                Side::Right => paddle.x - ball.radius,
            };
            ball.vel.x = -ball.vel.x;

            // Spin: off-center hits steepen the trajectory
            ball.vel.y += paddle.impact(ball.pos.y) * config.spin_factor;

            match paddle.side {
                Side::Left => events.ball_hit_left_paddle = true,
                Side::Right => events.ball_hit_right_paddle = true,
            }
            log::trace!(
                "ball hit {:?} paddle, vel now ({:.2}, {:.2})",
                paddle.side,
                ball.vel.x,
                ball.vel.y
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        let world = World::new();
        let config = Config::new();
        let events = Events::new();
        (world, config, events)
    }

    fn ball_of(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .expect("world has a ball")
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 0.0), Vec2::new(6.0, -3.0), 10.0);

        check_collisions(&mut world, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.vel.y, 3.0, "Ball should bounce down after hitting top wall");
        assert_eq!(ball.vel.x, 6.0, "X velocity should be unchanged");
        assert_eq!(ball.pos.y, 0.0, "Position is not corrected");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 592.0), Vec2::new(-6.0, 3.0), 10.0);

        check_collisions(&mut world, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.vel.y, -3.0, "Ball should bounce up after hitting bottom wall");
        assert_eq!(ball.pos.y, 592.0, "Position is not corrected");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_bounce_just_inside_walls() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 10.5), Vec2::new(6.0, -3.0), 10.0);

        check_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_of(&world).vel.y, -3.0);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        create_ball(&mut world, Vec2::new(15.0, 300.0), Vec2::new(-6.0, 0.0), 10.0);

        check_collisions(&mut world, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.pos.x, 45.0, "Ball should sit just right of the paddle");
        assert_eq!(ball.vel.x, 6.0, "Ball should bounce right");
        assert_eq!(ball.vel.y, 0.0, "Center hit adds no spin");
        assert!(events.ball_hit_left_paddle);
        assert!(!events.ball_hit_right_paddle);
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Right, &config);
        create_ball(&mut world, Vec2::new(770.0, 300.0), Vec2::new(6.0, 0.0), 10.0);

        check_collisions(&mut world, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.pos.x, 755.0, "Ball should sit just left of the paddle");
        assert_eq!(ball.vel.x, -6.0, "Ball should bounce left");
        assert!(events.ball_hit_right_paddle);
    }

    #[test]
    fn test_spin_follows_hit_position() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        // Top edge of the paddle: impact -1
        create_ball(&mut world, Vec2::new(30.0, 255.0), Vec2::new(-6.0, 3.0), 10.0);

        check_collisions(&mut world, &config, &mut events);
        assert_eq!(ball_of(&world).vel.y, 0.0, "3 + (-1 * 3)");

        world.clear();
        create_paddle(&mut world, Side::Left, &config);
        // Three quarters down the paddle: impact 0.5
        create_ball(&mut world, Vec2::new(30.0, 322.5), Vec2::new(-6.0, 3.0), 10.0);

        check_collisions(&mut world, &config, &mut events);
        assert_eq!(ball_of(&world).vel.y, 4.5, "3 + (0.5 * 3)");
    }

    #[test]
    fn test_corner_hit_bounces_off_wall_and_paddle_in_one_step() {
        let (mut world, config, mut events) = setup_world();
        let paddle = create_paddle(&mut world, Side::Left, &config);
        world
            .get::<&mut Paddle>(paddle)
            .expect("paddle exists")
            .y = 0.0;
        create_ball(&mut world, Vec2::new(30.0, 5.0), Vec2::new(-6.0, -3.0), 10.0);

        check_collisions(&mut world, &config, &mut events);

        let ball = ball_of(&world);
        // Wall flips vy to +3, then impact (5 - 45) / 45 adds -8/3
        assert!(events.ball_hit_wall && events.ball_hit_left_paddle);
        assert!((ball.vel.y - (3.0 - 8.0 / 3.0)).abs() < 1e-5);
        assert_eq!(ball.vel.x, 6.0);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);

        // Should not panic
        check_collisions(&mut world, &config, &mut events);

        assert!(!events.ball_hit_paddle());
        assert!(!events.ball_hit_wall);
    }
}
