use learner::LearnerError;
use thiserror::Error;

/// Configuration rejected at construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("`{name}` must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("paddle height {paddle_height} exceeds arena height {arena_height}")]
    PaddleTallerThanArena {
        paddle_height: f32,
        arena_height: f32,
    },

    #[error("ball size {ball_size} does not fit in the arena")]
    BallLargerThanArena { ball_size: f32 },

    #[error("paddles with inset {paddle_inset} do not fit in arena width {arena_width}")]
    PaddlesDoNotFit { paddle_inset: f32, arena_width: f32 },

    #[error("`{name}` must be finite, got {value}")]
    NonFiniteSpeed { name: &'static str, value: f32 },

    #[error("arena height {arena_height} with bucket size {bucket_size} yields no Q-table rows")]
    NoBuckets { arena_height: f32, bucket_size: f32 },

    #[error("tick rate must be at least 1")]
    ZeroTickRate,

    #[error("statistics window must be at least 1 tick")]
    ZeroWindow,

    #[error("reward must be finite, got {0}")]
    NonFiniteReward(f64),

    #[error(transparent)]
    Learner(#[from] LearnerError),
}

/// Anything that can stop a simulation run
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("learner rejected a transition: {0}")]
    Learner(#[from] LearnerError),

    #[error("presentation unavailable: {0}")]
    PresentationUnavailable(String),
}
