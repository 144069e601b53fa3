use super::common::*;
use crate::advisor::CareerAdvisor;
use crate::careers::{CareerCatalog, RecommendationSource, AI_RECOMMENDATION_COUNT};
use crate::questionnaire::{AnswerMap, TraitCategory};
use std::collections::BTreeMap;

#[tokio::test]
async fn successful_reply_is_normalized_to_five() {
    let backend = ScriptedBackend::replying(generated_reply(&[
        "Software Developer",
        "Data Scientist",
        "UX/UI Designer",
    ]));
    let advisor = CareerAdvisor::new(backend.clone(), question_bank());

    let outcome = advisor.recommend(&tech_creative_answers()).await;

    assert_eq!(outcome.source, RecommendationSource::Advisor);
    assert!(outcome.fallback_reason.is_none());
    assert_eq!(outcome.profile.dominant_type, TraitCategory::Tech);
    assert_eq!(outcome.response.recommendations.len(), AI_RECOMMENDATION_COUNT);
    assert_eq!(
        outcome.response.recommendations[3].title,
        "UX/UI Designer (Specialization 4)"
    );
    assert_eq!(
        outcome.response.recommendations[4].title,
        "UX/UI Designer (Specialization 5)"
    );
    assert_eq!(outcome.response.top_fields.len(), AI_RECOMMENDATION_COUNT);
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn prompt_carries_the_scored_profile() {
    let backend = ScriptedBackend::replying(generated_reply(&["Data Scientist"]));
    let advisor = CareerAdvisor::new(backend.clone(), question_bank());

    advisor.recommend(&tech_creative_answers()).await;

    let prompts = backend.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Dominant personality type: tech (67%)"));
    assert!(prompts[0].contains("Secondary personality type: creative (33%)"));
}

#[tokio::test]
async fn backend_failure_falls_back_without_retrying() {
    let backend = ScriptedBackend::failing(503);
    let advisor = CareerAdvisor::new(backend.clone(), question_bank());

    let outcome = advisor.recommend(&tech_creative_answers()).await;

    assert_eq!(backend.calls(), 1);
    assert_eq!(outcome.source, RecommendationSource::Fallback);
    let reason = outcome.fallback_reason.expect("fallback reason recorded");
    assert!(reason.contains("503"), "unexpected reason: {reason}");

    let titles: Vec<&str> = outcome
        .response
        .recommendations
        .iter()
        .map(|career| career.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Full-Stack Developer",
            "Data Scientist",
            "Cybersecurity Analyst",
            "UX/UI Designer",
            "Game Designer",
        ]
    );
    assert_eq!(outcome.response.top_fields, titles);
    assert_eq!(
        outcome.response.personality_insight,
        "Based on your answers, you show a strong preference for tech-related activities with secondary interests in creative-related fields."
    );
}

#[tokio::test]
async fn unparseable_reply_falls_back() {
    let backend = ScriptedBackend::replying("I'd rather not answer in JSON.");
    let advisor = CareerAdvisor::new(backend, question_bank());

    let outcome = advisor.recommend(&tech_creative_answers()).await;

    assert_eq!(outcome.source, RecommendationSource::Fallback);
    assert_eq!(outcome.response.recommendations.len(), AI_RECOMMENDATION_COUNT);
}

#[tokio::test]
async fn empty_recommendations_fall_back() {
    let backend = ScriptedBackend::replying(r#"{"personalityInsight": "x", "recommendations": []}"#);
    let advisor = CareerAdvisor::new(backend, question_bank());

    let outcome = advisor.recommend(&tech_creative_answers()).await;

    assert_eq!(outcome.source, RecommendationSource::Fallback);
    assert_eq!(
        outcome.fallback_reason.as_deref(),
        Some("backend returned no recommendations")
    );
}

#[tokio::test]
async fn advisor_without_backend_uses_defaults_for_empty_answers() {
    let advisor = CareerAdvisor::without_backend(question_bank());
    assert!(!advisor.is_configured());

    let outcome = advisor.recommend(&AnswerMap::new()).await;

    assert_eq!(outcome.source, RecommendationSource::Fallback);
    assert_eq!(outcome.profile.dominant_type, TraitCategory::Tech);
    assert_eq!(outcome.profile.secondary_type, TraitCategory::Business);
    assert_eq!(outcome.response.recommendations.len(), AI_RECOMMENDATION_COUNT);
    assert_eq!(outcome.response.recommendations[3].title, "Financial Analyst");
}

#[tokio::test]
async fn custom_fallback_catalog_is_respected() {
    let advisor = CareerAdvisor::without_backend(question_bank())
        .with_fallback(CareerCatalog::new(BTreeMap::new()));

    let outcome = advisor.recommend(&tech_creative_answers()).await;

    assert!(outcome.response.recommendations.is_empty());
    assert!(outcome.response.top_fields.is_empty());
}
