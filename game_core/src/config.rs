use glam::Vec2;
use learner::LearnerConfig;

use crate::{ConfigError, Params};

/// How paddle velocity is chosen each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleControl {
    /// Velocity is drawn uniformly from {-speed, 0, +speed}; the learner's
    /// action is recorded and learned from but never moves the paddle.
    #[default]
    RandomDraw,
    /// The learner's action sets the velocity (Down = +speed, Up = -speed).
    Policy,
}

/// Run configuration, fixed for the lifetime of a simulation
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_speed: f32,
    pub paddle_speed_initial: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub bucket_size: f32,
    pub tick_rate: u32,
    pub tick_budget: u64,
    pub stats_window: u32,
    pub reward: f64,
    pub paddle_control: PaddleControl,
    pub learner: LearnerConfig,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_speed_initial: Params::PADDLE_SPEED_INITIAL,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            bucket_size: Params::BUCKET_SIZE,
            tick_rate: Params::TICK_RATE,
            tick_budget: Params::TICK_BUDGET,
            stats_window: Params::STATS_WINDOW,
            reward: Params::REWARD,
            paddle_control: PaddleControl::default(),
            learner: LearnerConfig::default(),
            seed: Params::SEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("bucket_size", self.bucket_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.paddle_height > self.arena_height {
            return Err(ConfigError::PaddleTallerThanArena {
                paddle_height: self.paddle_height,
                arena_height: self.arena_height,
            });
        }
        if self.ball_size > self.arena_height || self.ball_size > self.arena_width {
            return Err(ConfigError::BallLargerThanArena {
                ball_size: self.ball_size,
            });
        }
        if !self.paddle_inset.is_finite()
            || self.paddle_inset < 0.0
            || 2.0 * (self.paddle_inset + self.paddle_width) > self.arena_width
        {
            return Err(ConfigError::PaddlesDoNotFit {
                paddle_inset: self.paddle_inset,
                arena_width: self.arena_width,
            });
        }
        for (name, value) in [
            ("paddle_speed", self.paddle_speed),
            ("paddle_speed_initial", self.paddle_speed_initial),
            ("ball_speed", self.ball_speed),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteSpeed { name, value });
            }
        }
        if self.num_buckets() == 0 {
            return Err(ConfigError::NoBuckets {
                arena_height: self.arena_height,
                bucket_size: self.bucket_size,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.stats_window == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        if !self.reward.is_finite() {
            return Err(ConfigError::NonFiniteReward(self.reward));
        }

        self.learner.validate()?;
        Ok(())
    }

    /// Rows in the Q-table: one per `bucket_size` slice of arena height
    pub fn num_buckets(&self) -> usize {
        let buckets = (self.arena_height / self.bucket_size).floor();
        if buckets.is_finite() && buckets >= 1.0 {
            buckets as usize
        } else {
            0
        }
    }

    /// Left edge of a paddle (agent 0 = left, agent 1 = right)
    pub fn paddle_x(&self, agent: u8) -> f32 {
        if agent == 0 {
            self.paddle_inset
        } else {
            self.arena_width - self.paddle_inset - self.paddle_width
        }
    }

    /// Paddles start vertically centered
    pub fn paddle_spawn_y(&self) -> f32 {
        half_floor(self.arena_height) - half_floor(self.paddle_height)
    }

    /// Top-left corner of the ball at serve
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            half_floor(self.arena_width) - half_floor(self.ball_size),
            half_floor(self.arena_height) - half_floor(self.ball_size),
        )
    }

    /// Clamp paddle top edge so the paddle stays inside the arena
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }
}

// Centering snaps to whole pixels
fn half_floor(v: f32) -> f32 {
    (v / 2.0).floor()
}
