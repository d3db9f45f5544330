//! Quiz rules: question generation and scoring.
//!
//! Randomness is always passed in, so callers decide between the thread RNG
//! and a seeded one.

mod generator;
mod model;
mod score;

pub use generator::QuizGenerator;
pub use model::*;
pub use score::{ScoreTracker, points_for};
