//! Text-generation career advisor with a curated fallback.

mod backend;
mod error;
mod gemini;
mod prompt;
mod response;
mod service;

#[cfg(test)]
mod tests;

pub use backend::RecommendationBackend;
pub use error::AdvisorError;
pub use gemini::{GeminiBackend, GenerationConfig};
pub use prompt::build_prompt;
pub use response::{parse_ai_response, AiCareerResponse};
pub use service::{AdvisorOutcome, CareerAdvisor};
