use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::error::AdvisorError;
use crate::careers::{
    normalize_ai_recommendations, normalize_top_fields, trait_for_field, CareerDescriptor,
};
use crate::questionnaire::TraitCategory;

/// Normalized advisor answer: exactly five recommendations and five headline fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiCareerResponse {
    pub personality_insight: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality_distribution: Option<BTreeMap<TraitCategory, u8>>,
    pub top_fields: Vec<String>,
    pub recommendations: Vec<CareerDescriptor>,
}

impl AiCareerResponse {
    /// Ranks headline fields: the first of `n` fields weighs `n`, the last weighs 1.
    pub fn field_weights(&self) -> BTreeMap<String, usize> {
        let total = self.top_fields.len();
        self.top_fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.clone(), total - index))
            .collect()
    }
}

/// Parses generated text into a normalized response.
///
/// Prose around the JSON object is ignored: the object is taken from the first `{` to the
/// last `}`. A missing or empty `recommendations` list is an error.
pub fn parse_ai_response(text: &str) -> Result<AiCareerResponse, AdvisorError> {
    let json = json_object_slice(text).ok_or(AdvisorError::MissingJson)?;
    let raw: RawCareerResponse = serde_json::from_str(json)?;

    if raw.recommendations.is_empty() {
        return Err(AdvisorError::EmptyRecommendations);
    }

    let recommendations = normalize_ai_recommendations(
        raw.recommendations
            .into_iter()
            .map(RawRecommendation::into_descriptor)
            .collect(),
    );
    let top_fields = normalize_top_fields(raw.top_fields, &recommendations);

    Ok(AiCareerResponse {
        personality_insight: raw.personality_insight,
        personality_distribution: raw.personality_distribution.map(clamp_distribution),
        top_fields,
        recommendations,
    })
}

fn json_object_slice(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

// Unknown trait keys are dropped; values are rounded and clamped to a percentage.
fn clamp_distribution(raw: BTreeMap<String, f64>) -> BTreeMap<TraitCategory, u8> {
    raw.into_iter()
        .filter_map(|(key, value)| {
            let category = key.parse::<TraitCategory>().ok()?;
            Some((category, value.round().clamp(0.0, 100.0) as u8))
        })
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCareerResponse {
    #[serde(default)]
    personality_insight: String,
    #[serde(default)]
    personality_distribution: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    top_fields: Vec<String>,
    #[serde(default)]
    recommendations: Vec<RawRecommendation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecommendation {
    field: String,
    #[serde(default)]
    roles: Vec<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    education: Vec<String>,
    #[serde(default)]
    fit_reason: Option<String>,
}

impl RawRecommendation {
    fn into_descriptor(self) -> CareerDescriptor {
        let personality_types: BTreeSet<TraitCategory> =
            trait_for_field(&self.field).into_iter().collect();

        CareerDescriptor {
            title: self.field,
            description: self.description,
            skills: self.skills,
            education: self.education,
            roles: self.roles,
            personality_types,
            growth_potential: None,
            salary_range: None,
            fit_reason: self.fit_reason.filter(|reason| !reason.trim().is_empty()),
        }
    }
}
