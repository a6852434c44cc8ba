use crate::{Config, Paddle, PointerTarget, Side};
use hecs::World;

/// Convert a viewport pointer y to a y relative to the drawing surface
pub fn surface_y(client_y: f32, surface_top: f32) -> f32 {
    client_y - surface_top
}

/// Top edge that centers the player paddle on the pointer, kept in the field
pub fn paddle_y_for_pointer(pointer_y: f32, config: &Config) -> f32 {
    config.clamp_paddle_y(pointer_y - config.paddle_height / 2.0)
}

/// Commit the latest pointer position to the left paddle
pub fn apply_pointer_target(world: &mut World, pointer: &mut PointerTarget, config: &Config) {
    let Some(pointer_y) = pointer.take() else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Left {
            paddle.y = paddle_y_for_pointer(pointer_y, config);
        }
    }
}
