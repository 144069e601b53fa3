use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::backend::RecommendationBackend;
use super::error::AdvisorError;
use super::prompt::build_prompt;
use super::response::{parse_ai_response, AiCareerResponse};
use crate::careers::{
    fallback_insight, fallback_recommendations, CareerCatalog, RecommendationSource,
};
use crate::questionnaire::{analyze_answers, AnswerMap, PersonalityProfile, QuestionBank};

/// Result of one advisor consultation. `response` always carries the normalized set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisorOutcome {
    pub profile: PersonalityProfile,
    pub response: AiCareerResponse,
    pub source: RecommendationSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

/// Scores answers, asks the backend once, and substitutes the curated fallback on any failure.
pub struct CareerAdvisor {
    backend: Option<Arc<dyn RecommendationBackend>>,
    questions: Arc<QuestionBank>,
    fallback: Arc<CareerCatalog>,
}

impl CareerAdvisor {
    pub fn new(backend: Arc<dyn RecommendationBackend>, questions: Arc<QuestionBank>) -> Self {
        Self {
            backend: Some(backend),
            questions,
            fallback: Arc::new(CareerCatalog::fallback()),
        }
    }

    /// Advisor that never calls out; every consultation yields the fallback set.
    pub fn without_backend(questions: Arc<QuestionBank>) -> Self {
        Self {
            backend: None,
            questions,
            fallback: Arc::new(CareerCatalog::fallback()),
        }
    }

    pub fn with_fallback(mut self, fallback: CareerCatalog) -> Self {
        self.fallback = Arc::new(fallback);
        self
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    pub async fn recommend(&self, answers: &AnswerMap) -> AdvisorOutcome {
        let profile = analyze_answers(answers, self.questions.questions());

        match self.consult(answers, &profile).await {
            Ok(response) => {
                info!(
                    dominant = %profile.dominant_type,
                    recommendations = response.recommendations.len(),
                    "advisor produced recommendations"
                );
                AdvisorOutcome {
                    profile,
                    response,
                    source: RecommendationSource::Advisor,
                    fallback_reason: None,
                }
            }
            Err(err) => {
                warn!(
                    error = %err,
                    dominant = %profile.dominant_type,
                    secondary = %profile.secondary_type,
                    "advisor unavailable, serving fallback recommendations"
                );
                let response = self.fallback_response(&profile);
                AdvisorOutcome {
                    profile,
                    response,
                    source: RecommendationSource::Fallback,
                    fallback_reason: Some(err.to_string()),
                }
            }
        }
    }

    async fn consult(
        &self,
        answers: &AnswerMap,
        profile: &PersonalityProfile,
    ) -> Result<AiCareerResponse, AdvisorError> {
        let backend = self.backend.as_ref().ok_or(AdvisorError::NotConfigured)?;
        let prompt = build_prompt(answers, self.questions.questions(), profile);
        let text = backend.generate(&prompt).await?;
        parse_ai_response(&text)
    }

    fn fallback_response(&self, profile: &PersonalityProfile) -> AiCareerResponse {
        let recommendations = fallback_recommendations(profile, &self.fallback);
        AiCareerResponse {
            personality_insight: fallback_insight(profile),
            personality_distribution: Some(profile.distribution.clone()),
            top_fields: recommendations
                .iter()
                .map(|career| career.title.clone())
                .collect(),
            recommendations,
        }
    }
}
