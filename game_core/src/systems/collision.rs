use crate::{Ball, Config, Paddle};
use hecs::World;

/// Flip vertical velocity when the ball touches the top or bottom wall.
///
/// The ball is not pushed back inside, so a ball that stays in contact for
/// more than one tick flips again.
pub fn check_wall_bounce(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let rect = ball.rect();
        if rect.top() <= 0.0 || rect.bottom() >= config.arena_height {
            ball.vel.y = -ball.vel.y;
        }
    }
}

/// Flip horizontal velocity when the ball overlaps either paddle.
///
/// Plain sign flip: no deflection angle and no separation, so a fast ball can
/// tunnel through a paddle within a single tick.
pub fn check_paddle_hits(world: &mut World, config: &Config) {
    let paddles: Vec<_> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| p.rect(config))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let rect = ball.rect();
        if paddles.iter().any(|p| rect.overlaps(p)) {
            ball.vel.x = -ball.vel.x;
        }
    }
}
