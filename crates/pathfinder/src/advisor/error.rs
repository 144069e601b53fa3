/// Failure at the recommendation backend boundary. Every variant degrades to the
/// fallback recommendation set inside [`super::CareerAdvisor`].
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("recommendation backend is not configured")]
    NotConfigured,
    #[error("request to recommendation backend failed: {0}")]
    Transport(reqwest::Error),
    #[error("recommendation backend returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("backend response carried no generated text")]
    MalformedEnvelope,
    #[error("generated text contained no JSON object")]
    MissingJson,
    #[error("generated JSON did not match the recommendation shape: {0}")]
    Json(#[from] serde_json::Error),
    #[error("backend returned no recommendations")]
    EmptyRecommendations,
}

impl From<reqwest::Error> for AdvisorError {
    // Request URLs never reach the message: they may carry credentials.
    fn from(err: reqwest::Error) -> Self {
        AdvisorError::Transport(err.without_url())
    }
}
