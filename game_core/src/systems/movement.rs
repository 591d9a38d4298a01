use crate::{Ball, Config, Paddle};
use hecs::World;

/// Apply paddle velocities, keeping paddles inside the arena
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = config.clamp_paddle_y(paddle.y + paddle.vel_y);
    }
}

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
