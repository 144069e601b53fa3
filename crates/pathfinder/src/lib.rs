//! Personality questionnaire scoring and career recommendations.

pub mod advisor;
pub mod careers;
pub mod config;
pub mod error;
pub mod questionnaire;
pub mod telemetry;
