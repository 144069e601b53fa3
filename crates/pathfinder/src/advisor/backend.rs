use async_trait::async_trait;

use super::error::AdvisorError;

/// Text-generation seam used by the career advisor.
#[async_trait]
pub trait RecommendationBackend: Send + Sync {
    /// Sends one prompt and returns the raw generated text.
    async fn generate(&self, prompt: &str) -> Result<String, AdvisorError>;
}
