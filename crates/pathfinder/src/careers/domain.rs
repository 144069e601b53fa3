use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::questionnaire::TraitCategory;

/// One recommended career, sourced from the static catalog or an advisor response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerDescriptor {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    /// Industries for catalog entries, related roles for advisor entries.
    pub roles: Vec<String>,
    pub personality_types: BTreeSet<TraitCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_potential: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_reason: Option<String>,
}

impl CareerDescriptor {
    pub fn matches(&self, category: TraitCategory) -> bool {
        self.personality_types.contains(&category)
    }
}

/// Where a recommendation set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Catalog,
    Advisor,
    Fallback,
}

impl RecommendationSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Catalog => "Career catalog",
            Self::Advisor => "AI advisor",
            Self::Fallback => "Curated fallback",
        }
    }
}
