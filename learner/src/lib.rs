//! Tabular Q-learning over discretized paddle positions.
//!
//! The table has one row per vertical bucket and one column per [`Action`].
//! Callers are responsible for mapping continuous positions into a valid
//! bucket; this crate rejects out-of-range indices instead of clamping them.

pub mod action;
pub mod error;
pub mod q_learner;

pub use action::*;
pub use error::*;
pub use q_learner::*;
