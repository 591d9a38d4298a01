use crate::{Config, GameRng, Paddle, PaddleControl};
use hecs::World;
use learner::{Action, LearnerError, QLearner};
use rand::Rng;

/// One agent's transition as fed to the learner this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub agent: u8,
    pub state: usize,
    pub action: Action,
    pub reward: f64,
    pub next_state: usize,
}

/// Map a paddle's top edge to its Q-table row.
///
/// Floor division by the bucket size, clamped into `0..num_buckets`.
pub fn discretize(paddle_y: f32, config: &Config) -> usize {
    let last = config.num_buckets().saturating_sub(1);
    let bucket = (paddle_y / config.bucket_size).floor();
    if bucket.is_nan() || bucket <= 0.0 {
        0
    } else if bucket >= last as f32 {
        last
    } else {
        bucket as usize
    }
}

/// Paddles in agent order, so RNG draws are deterministic
fn paddles_by_agent(world: &World) -> Vec<(hecs::Entity, Paddle)> {
    let mut paddles: Vec<_> = world
        .query::<&Paddle>()
        .iter()
        .map(|(e, p)| (e, *p))
        .collect();
    paddles.sort_by_key(|(_e, p)| p.agent);
    paddles
}

/// Let the learner act and learn for every paddle.
///
/// The next state is predicted from the velocity the paddle is about to be
/// moved with under the active [`PaddleControl`]. With `RandomDraw` that is
/// the velocity from the previous tick, which the upcoming draw replaces.
pub fn update_agents(
    world: &World,
    config: &Config,
    learner: &mut QLearner,
    rng: &mut GameRng,
) -> Result<Vec<Decision>, LearnerError> {
    let mut decisions = Vec::with_capacity(2);

    for (_entity, paddle) in paddles_by_agent(world) {
        let state = discretize(paddle.y, config);
        let action = learner.choose_action(state, &mut rng.0)?;
        let reward = config.reward;

        let speed = match config.paddle_control {
            PaddleControl::RandomDraw => paddle.vel_y,
            PaddleControl::Policy => policy_velocity(action, config),
        };
        let next_state = discretize(paddle.y + speed, config);

        learner.update(state, action, reward, next_state)?;

        tracing::trace!(agent = paddle.agent, state, ?action, next_state, "decision");
        decisions.push(Decision {
            agent: paddle.agent,
            state,
            action,
            reward,
            next_state,
        });
    }

    Ok(decisions)
}

fn policy_velocity(action: Action, config: &Config) -> f32 {
    f32::from(action.dir()) * config.paddle_speed
}

/// Set each paddle's velocity for the coming move
pub fn steer_paddles(world: &mut World, config: &Config, decisions: &[Decision], rng: &mut GameRng) {
    let choices = [-config.paddle_speed, 0.0, config.paddle_speed];

    for (entity, paddle) in paddles_by_agent(world) {
        let vel_y = match config.paddle_control {
            PaddleControl::RandomDraw => choices[rng.0.gen_range(0..choices.len())],
            PaddleControl::Policy => decisions
                .iter()
                .find(|d| d.agent == paddle.agent)
                .map_or(0.0, |d| policy_velocity(d.action, config)),
        };

        if let Ok(mut paddle) = world.get::<&mut Paddle>(entity) {
            paddle.vel_y = vel_y;
        }
    }
}
