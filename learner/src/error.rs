use thiserror::Error;

/// Failures raised by the Q-learner
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LearnerError {
    #[error("state {state} is outside the Q-table (0..{num_buckets})")]
    StateOutOfRange { state: usize, num_buckets: usize },

    #[error("action index {action} is not one of 0, 1, 2")]
    ActionOutOfRange { action: usize },

    #[error("Q-table must have at least one bucket")]
    EmptyTable,

    #[error("learner parameter `{name}` must be a finite value in [0, 1], got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("reward must be finite, got {0}")]
    NonFiniteReward(f64),
}
