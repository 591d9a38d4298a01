pub mod components;
pub mod config;
pub mod error;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;
pub use systems::*;

pub use learner::{Action, LearnerConfig, LearnerError, QLearner};
pub use proto::{Frame, QTableSnapshot, RunReport};

use hecs::World;

/// Advance the environment by one tick.
///
/// Learning happens before physics: each agent observes its pre-move state
/// and the learner is updated, then paddle velocities are chosen and the
/// world moves.
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    learner: &mut QLearner,
    score: &mut Score,
    rng: &mut GameRng,
) -> Result<Vec<Decision>, LearnerError> {
    // 1. Choose actions and update the Q-table for both agents
    let decisions = update_agents(world, config, learner, rng)?;

    // 2. Pick this tick's paddle velocities
    steer_paddles(world, config, &decisions, rng);

    // 3. Move paddles and ball
    move_paddles(world, config);
    move_ball(world);

    // 4. Top/bottom walls
    check_wall_bounce(world, config);

    // 5. Side walls (scoring)
    check_scoring(world, config, score);

    // 6. Paddles
    check_paddle_hits(world, config);

    time.advance();
    Ok(decisions)
}

/// Helper to create a paddle entity
pub fn create_paddle(
    world: &mut World,
    config: &Config,
    agent: u8,
    y: f32,
    vel_y: f32,
) -> hecs::Entity {
    world.spawn((Paddle::new(agent, config.paddle_x(agent), y, vel_y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, size: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, size),))
}
