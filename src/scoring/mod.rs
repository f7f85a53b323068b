pub mod config;
pub mod engine;
pub mod types;
pub mod validation;

pub use config::*;
pub use engine::{calculate, calculate_score, consensus_strength, percent_of, score_promises};
pub use types::{
    Breakdown, Grade, ParseStatusError, Promise, PromiseContribution, PromiseId, ScoreResult,
    Vote, VoteStatus,
};
pub use validation::validate_scoring;
