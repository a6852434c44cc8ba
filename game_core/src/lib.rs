pub mod components;
pub mod config;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use geometry::*;
pub use params::*;
pub use render::Canvas;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation
pub fn step<R: RandomSource + ?Sized>(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    pointer: &mut PointerTarget,
    rng: &mut R,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Commit the latest pointer position to the player paddle
    apply_pointer_target(world, pointer, config);

    // 2. Move ball
    move_ball(world);

    // 3. Bounce off walls and paddles
    check_collisions(world, config, events);

    // 4. Relaunch if the ball left the field
    check_scoring(world, config, events, rng);

    // 5. AI follows the ball
    move_ai_paddle(world, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, radius: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}

/// Everything one running game owns
pub struct Game<R: RandomSource = GameRng> {
    pub world: World,
    pub config: Config,
    pub events: Events,
    pub pointer: PointerTarget,
    pub rng: R,
    pub frame: u64,
}

impl Game<GameRng> {
    pub fn new(config: Config, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Set up both paddles and a freshly launched ball
    pub fn with_rng(config: Config, mut rng: R) -> Self {
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        let ball = Ball::launch(&config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel, ball.radius);

        log::info!(
            "new game on {}x{} field, ball launched with vel ({}, {})",
            config.field_width,
            config.field_height,
            ball.vel.x,
            ball.vel.y
        );

        Self {
            world,
            config,
            events: Events::new(),
            pointer: PointerTarget::new(),
            rng,
            frame: 0,
        }
    }

    pub fn step(&mut self) {
        step(
            &mut self.world,
            &self.config,
            &mut self.events,
            &mut self.pointer,
            &mut self.rng,
        );
        self.frame += 1;
    }

    /// Record a pointer move in viewport coordinates; applied on the next step
    pub fn pointer_moved(&mut self, client_y: f32, surface_top: f32) {
        self.pointer.set(surface_y(client_y, surface_top));
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        render::draw(&self.world, &self.config, canvas);
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, paddle)| *paddle)
            .find(|paddle| paddle.side == side)
    }

    /// Overwrite the ball's state, e.g. to set up a scenario
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }
}
