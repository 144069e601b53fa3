use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Question id → chosen option id, accumulated one answer at a time.
pub type AnswerMap = BTreeMap<u32, String>;

/// Personality/interest classification attached to questionnaire options.
///
/// Declaration order is the enumeration order used when breaking ties between equal tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitCategory {
    Tech,
    Engineering,
    Science,
    Business,
    Creative,
    Social,
}

impl TraitCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Tech,
            Self::Engineering,
            Self::Science,
            Self::Business,
            Self::Creative,
            Self::Social,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Tech => "tech",
            Self::Engineering => "engineering",
            Self::Science => "science",
            Self::Business => "business",
            Self::Creative => "creative",
            Self::Social => "social",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Tech => "Tech",
            Self::Engineering => "Engineering",
            Self::Science => "Science",
            Self::Business => "Business",
            Self::Creative => "Creative",
            Self::Social => "Social",
        }
    }

    /// Canned sentence used when composing a profile description.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Tech => "You have a strong analytical mind and enjoy solving complex problems using technology. You're drawn to logical thinking, coding, and creating digital solutions that make life easier.",
            Self::Engineering => "You're a practical problem-solver who enjoys designing, building, and improving physical systems. You have strong spatial reasoning and like to understand how things work.",
            Self::Science => "You're naturally curious about the world and enjoy discovering how things work through research and experimentation. You value evidence-based approaches and methodical investigation.",
            Self::Business => "You have an entrepreneurial spirit and enjoy creating value through strategic thinking. You're comfortable with leadership, decision-making, and understanding market dynamics.",
            Self::Creative => "You have a rich imagination and enjoy expressing ideas in unique ways. You're drawn to aesthetics, storytelling, and creating experiences that resonate with others.",
            Self::Social => "You're people-oriented and find fulfillment in helping others. You have strong empathy, communication skills, and enjoy building meaningful connections.",
        }
    }

    /// Short trait summary embedded in advisor prompts.
    pub const fn prompt_hint(self) -> &'static str {
        match self {
            Self::Tech => "Analytical, logical, enjoys technology and problem-solving",
            Self::Engineering => "Practical, methodical, enjoys building and understanding systems",
            Self::Science => "Curious, investigative, enjoys research and discovery",
            Self::Business => "Strategic, leadership-oriented, enjoys organization and management",
            Self::Creative => "Imaginative, artistic, enjoys expression and design",
            Self::Social => "Empathetic, communicative, enjoys helping and connecting with others",
        }
    }

    pub const fn focus_areas(self) -> &'static str {
        match self {
            Self::Tech => "software development, data science, IT roles",
            Self::Engineering => "specific engineering disciplines",
            Self::Science => "research, laboratory, and analytical roles",
            Self::Business => "management, finance, marketing roles",
            Self::Creative => "design, content creation, artistic roles",
            Self::Social => "counseling, teaching, healthcare roles",
        }
    }
}

impl fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raised when a label does not name any known trait.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown trait category '{0}'")]
pub struct UnknownTrait(pub String);

impl FromStr for TraitCategory {
    type Err = UnknownTrait;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|category| category.key() == normalized)
            .ok_or_else(|| UnknownTrait(raw.trim().to_string()))
    }
}

/// Selectable answer for a question. Options without a trait count toward nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub trait_category: Option<TraitCategory>,
}

impl AnswerOption {
    pub fn typed(id: &str, text: &str, trait_category: TraitCategory) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            trait_category: Some(trait_category),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

/// Resolves an answer entry to its question and option, if both exist.
pub fn resolve_answer<'q>(
    questions: &'q [Question],
    question_id: u32,
    option_id: &str,
) -> Option<(&'q Question, &'q AnswerOption)> {
    let question = questions.iter().find(|question| question.id == question_id)?;
    let option = question.option(option_id)?;
    Some((question, option))
}
