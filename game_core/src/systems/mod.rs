pub mod collision;
pub mod learning;
pub mod movement;
pub mod scoring;

pub use collision::*;
pub use learning::*;
pub use movement::*;
pub use scoring::*;
