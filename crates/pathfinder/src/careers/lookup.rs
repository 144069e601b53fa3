use crate::questionnaire::TraitCategory;

// Checked in order, first substring hit wins. Tech patterns precede engineering so
// "Software Engineer" stays a tech career.
const FIELD_PATTERNS: &[(&str, TraitCategory)] = &[
    ("software", TraitCategory::Tech),
    ("developer", TraitCategory::Tech),
    ("data", TraitCategory::Tech),
    ("cyber", TraitCategory::Tech),
    ("programm", TraitCategory::Tech),
    ("technology", TraitCategory::Tech),
    ("computer", TraitCategory::Tech),
    ("machine learning", TraitCategory::Tech),
    ("cloud", TraitCategory::Tech),
    ("devops", TraitCategory::Tech),
    ("scien", TraitCategory::Science),
    ("research", TraitCategory::Science),
    ("chemist", TraitCategory::Science),
    ("physic", TraitCategory::Science),
    ("biolog", TraitCategory::Science),
    ("laborator", TraitCategory::Science),
    ("engineer", TraitCategory::Engineering),
    ("robot", TraitCategory::Engineering),
    ("mechanic", TraitCategory::Engineering),
    ("aerospace", TraitCategory::Engineering),
    ("health", TraitCategory::Social),
    ("teach", TraitCategory::Social),
    ("educat", TraitCategory::Social),
    ("counsel", TraitCategory::Social),
    ("psycholog", TraitCategory::Social),
    ("therap", TraitCategory::Social),
    ("nurs", TraitCategory::Social),
    ("human resources", TraitCategory::Social),
    ("social", TraitCategory::Social),
    ("design", TraitCategory::Creative),
    ("artist", TraitCategory::Creative),
    ("art director", TraitCategory::Creative),
    ("arts", TraitCategory::Creative),
    ("creative", TraitCategory::Creative),
    ("content", TraitCategory::Creative),
    ("writer", TraitCategory::Creative),
    ("film", TraitCategory::Creative),
    ("music", TraitCategory::Creative),
    ("game", TraitCategory::Creative),
    ("business", TraitCategory::Business),
    ("market", TraitCategory::Business),
    ("financ", TraitCategory::Business),
    ("manag", TraitCategory::Business),
    ("consult", TraitCategory::Business),
    ("entrepreneur", TraitCategory::Business),
    ("sales", TraitCategory::Business),
    ("account", TraitCategory::Business),
    ("law", TraitCategory::Business),
];

/// Maps a free-text career field to the trait it most likely belongs to.
pub fn trait_for_field(field: &str) -> Option<TraitCategory> {
    let normalized = field.to_lowercase();
    FIELD_PATTERNS
        .iter()
        .find(|(pattern, _)| normalized.contains(pattern))
        .map(|(_, category)| *category)
}
