pub mod config;
pub mod engine;
pub mod tables;
pub mod validation;

pub use config::*;
pub use engine::{weighted_score, ComponentScores, ScoreResult, Scorer};
pub use tables::{
    lookup, CountryTier, Lookup, ScoreTables, UNKNOWN_COMPANY_SIZE_SCORE, UNKNOWN_ROLE_SCORE,
};
pub use validation::{validate_scoring, weight_sum_warning};
