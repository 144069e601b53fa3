mod ranking;
mod tally;

pub use tally::{tally_answers, TraitTally};

use super::domain::{AnswerMap, Question, TraitCategory};
use ranking::rank_traits;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Trait summary derived from one questionnaire session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub dominant_type: TraitCategory,
    pub secondary_type: TraitCategory,
    pub description: String,
    pub distribution: BTreeMap<TraitCategory, u8>,
}

impl PersonalityProfile {
    pub fn percentage(&self, category: TraitCategory) -> u8 {
        self.distribution.get(&category).copied().unwrap_or(0)
    }
}

/// Scores an answer map against the question bank. Never fails: malformed entries are skipped
/// and an empty map resolves to the default trait pair.
pub fn analyze_answers(answers: &AnswerMap, questions: &[Question]) -> PersonalityProfile {
    let tally = tally_answers(answers, questions);
    let (dominant_type, secondary_type) = rank_traits(&tally);

    debug!(
        answered = tally.answered(),
        skipped = tally.skipped(),
        %dominant_type,
        %secondary_type,
        "scored questionnaire answers"
    );

    PersonalityProfile {
        dominant_type,
        secondary_type,
        description: describe(dominant_type, secondary_type),
        distribution: tally.distribution(),
    }
}

fn describe(dominant: TraitCategory, secondary: TraitCategory) -> String {
    format!(
        "You primarily identify with {} You also show traits of {}",
        dominant.description(),
        secondary.description()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::QuestionBank;

    fn answers(pairs: &[(u32, &str)]) -> AnswerMap {
        pairs
            .iter()
            .map(|(question, option)| (*question, option.to_string()))
            .collect()
    }

    #[test]
    fn equal_tallies_keep_the_earlier_trait_dominant() {
        let bank = QuestionBank::standard();
        let profile = analyze_answers(
            &answers(&[(1, "1e"), (2, "2e"), (3, "3c"), (4, "4c")]),
            bank.questions(),
        );

        assert_eq!(profile.dominant_type, TraitCategory::Science);
        assert_eq!(profile.secondary_type, TraitCategory::Creative);
        assert_eq!(profile.percentage(TraitCategory::Science), 50);
        assert_eq!(profile.percentage(TraitCategory::Creative), 50);
    }

    #[test]
    fn later_strictly_greater_trait_demotes_previous_dominant() {
        let bank = QuestionBank::standard();
        let profile = analyze_answers(
            &answers(&[(1, "1a"), (2, "2f"), (3, "3f"), (4, "4c")]),
            bank.questions(),
        );

        assert_eq!(profile.dominant_type, TraitCategory::Social);
        assert_eq!(profile.secondary_type, TraitCategory::Tech);
    }

    #[test]
    fn single_trait_sessions_fall_back_to_first_other_trait() {
        let bank = QuestionBank::standard();
        let profile = analyze_answers(&answers(&[(1, "1a"), (2, "2a")]), bank.questions());

        assert_eq!(profile.dominant_type, TraitCategory::Tech);
        assert_eq!(profile.secondary_type, TraitCategory::Engineering);

        let profile = analyze_answers(&answers(&[(5, "5d")]), bank.questions());
        assert_eq!(profile.dominant_type, TraitCategory::Business);
        assert_eq!(profile.secondary_type, TraitCategory::Tech);
        assert_eq!(profile.percentage(TraitCategory::Business), 100);
    }

    #[test]
    fn description_combines_dominant_and_secondary_sentences() {
        let bank = QuestionBank::standard();
        let profile = analyze_answers(&answers(&[(1, "1f"), (2, "2f"), (3, "3b")]), bank.questions());

        assert!(profile
            .description
            .starts_with("You primarily identify with You're people-oriented"));
        assert!(profile
            .description
            .contains("You also show traits of You're a practical problem-solver"));
    }

    #[test]
    fn untyped_options_do_not_count_toward_distribution() {
        let mut bank = QuestionBank::standard().questions().to_vec();
        bank[0].options[0].trait_category = None;

        let tally = tally_answers(&answers(&[(1, "1a"), (2, "2b")]), &bank);

        assert_eq!(tally.answered(), 1);
        assert_eq!(tally.skipped(), 1);
        assert_eq!(tally.distribution()[&TraitCategory::Engineering], 100);
        assert_eq!(tally.distribution()[&TraitCategory::Tech], 0);
    }
}
