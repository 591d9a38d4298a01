use rand::Rng;

use crate::{Action, LearnerError};

/// Learning hyper-parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LearnerConfig {
    pub alpha: f64,   // Learning rate
    pub gamma: f64,   // Discount factor
    pub epsilon: f64, // Exploration probability
}

impl LearnerConfig {
    pub const ALPHA: f64 = 0.1;
    pub const GAMMA: f64 = 0.9;
    pub const EPSILON: f64 = 0.2;

    pub fn new(alpha: f64, gamma: f64, epsilon: f64) -> Self {
        Self {
            alpha,
            gamma,
            epsilon,
        }
    }

    /// Every parameter must be a finite probability-like value
    pub fn validate(&self) -> Result<(), LearnerError> {
        for (name, value) in [
            ("alpha", self.alpha),
            ("gamma", self.gamma),
            ("epsilon", self.epsilon),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(LearnerError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self::new(Self::ALPHA, Self::GAMMA, Self::EPSILON)
    }
}

/// Epsilon-greedy tabular Q-learner.
///
/// Rows are discretized vertical positions, columns are [`Action`]s. All
/// values start at zero.
#[derive(Debug, Clone)]
pub struct QLearner {
    config: LearnerConfig,
    table: Vec<[f64; Action::COUNT]>,
}

impl QLearner {
    pub fn new(num_buckets: usize, config: LearnerConfig) -> Result<Self, LearnerError> {
        config.validate()?;
        if num_buckets == 0 {
            return Err(LearnerError::EmptyTable);
        }

        Ok(Self {
            config,
            table: vec![[0.0; Action::COUNT]; num_buckets],
        })
    }

    pub fn num_buckets(&self) -> usize {
        self.table.len()
    }

    /// Row-major view of the whole table
    pub fn table(&self) -> &[[f64; Action::COUNT]] {
        &self.table
    }

    fn row(&self, state: usize) -> Result<&[f64; Action::COUNT], LearnerError> {
        let num_buckets = self.table.len();
        self.table
            .get(state)
            .ok_or(LearnerError::StateOutOfRange { state, num_buckets })
    }

    fn row_mut(&mut self, state: usize) -> Result<&mut [f64; Action::COUNT], LearnerError> {
        let num_buckets = self.table.len();
        self.table
            .get_mut(state)
            .ok_or(LearnerError::StateOutOfRange { state, num_buckets })
    }

    /// All action-values for a state
    pub fn q_values(&self, state: usize) -> Result<[f64; Action::COUNT], LearnerError> {
        self.row(state).copied()
    }

    pub fn q(&self, state: usize, action: Action) -> Result<f64, LearnerError> {
        Ok(self.row(state)?[action.index()])
    }

    /// Overwrite a single entry
    pub fn set_q(&mut self, state: usize, action: Action, value: f64) -> Result<(), LearnerError> {
        self.row_mut(state)?[action.index()] = value;
        Ok(())
    }

    /// Greedy action for a state; ties go to the lowest action index
    pub fn best_action(&self, state: usize) -> Result<Action, LearnerError> {
        let row = self.row(state)?;
        let mut best = 0;
        for i in 1..Action::COUNT {
            if row[i] > row[best] {
                best = i;
            }
        }
        Ok(Action::ALL[best])
    }

    pub fn max_q(&self, state: usize) -> Result<f64, LearnerError> {
        let row = self.row(state)?;
        Ok(row[self.best_action(state)?.index()])
    }

    /// Epsilon-greedy selection. Does not touch the table.
    pub fn choose_action<R: Rng + ?Sized>(
        &self,
        state: usize,
        rng: &mut R,
    ) -> Result<Action, LearnerError> {
        // Validate before drawing so exploration cannot mask a bad index
        self.row(state)?;

        if rng.gen::<f64>() < self.config.epsilon {
            let action = Action::ALL[rng.gen_range(0..Action::COUNT)];
            tracing::trace!(state, ?action, "explore");
            Ok(action)
        } else {
            self.best_action(state)
        }
    }

    /// One-step Q-learning update:
    /// `Q[s,a] = (1 - alpha) * Q[s,a] + alpha * (reward + gamma * max Q[s'])`
    pub fn update(
        &mut self,
        state: usize,
        action: Action,
        reward: f64,
        next_state: usize,
    ) -> Result<(), LearnerError> {
        if !reward.is_finite() {
            return Err(LearnerError::NonFiniteReward(reward));
        }

        let next_max = self.max_q(next_state)?;
        let LearnerConfig { alpha, gamma, .. } = self.config;

        let entry = &mut self.row_mut(state)?[action.index()];
        *entry = (1.0 - alpha) * *entry + alpha * (reward + gamma * next_max);

        tracing::trace!(state, ?action, reward, next_state, q = *entry, "q update");
        Ok(())
    }
}
