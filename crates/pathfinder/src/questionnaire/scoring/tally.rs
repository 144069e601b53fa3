use super::super::domain::{resolve_answer, AnswerMap, Question, TraitCategory};
use serde::Serialize;
use std::collections::BTreeMap;

/// Raw per-trait counts for one answer map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitTally {
    counts: BTreeMap<TraitCategory, u32>,
    answered: u32,
    skipped: u32,
}

impl TraitTally {
    fn empty() -> Self {
        Self {
            counts: TraitCategory::ordered()
                .into_iter()
                .map(|category| (category, 0))
                .collect(),
            answered: 0,
            skipped: 0,
        }
    }

    pub fn count(&self, category: TraitCategory) -> u32 {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Answers that resolved to a typed option.
    pub fn answered(&self) -> u32 {
        self.answered
    }

    /// Entries that did not resolve or resolved to an untyped option.
    pub fn skipped(&self) -> u32 {
        self.skipped
    }

    pub fn counts(&self) -> impl Iterator<Item = (TraitCategory, u32)> + '_ {
        self.counts.iter().map(|(category, count)| (*category, *count))
    }

    /// Rounded share of typed answers per trait; all zero when nothing was answered.
    pub fn distribution(&self) -> BTreeMap<TraitCategory, u8> {
        self.counts()
            .map(|(category, count)| {
                let percentage = if self.answered > 0 {
                    ((count as f64 / self.answered as f64) * 100.0)
                        .round()
                        .clamp(0.0, 100.0) as u8
                } else {
                    0
                };
                (category, percentage)
            })
            .collect()
    }
}

/// Counts typed answers per trait. Unknown questions, unknown options and untyped
/// options are skipped without error.
pub fn tally_answers(answers: &AnswerMap, questions: &[Question]) -> TraitTally {
    let mut tally = TraitTally::empty();

    for (question_id, option_id) in answers {
        let category = resolve_answer(questions, *question_id, option_id)
            .and_then(|(_, option)| option.trait_category);

        match category {
            Some(category) => {
                *tally.counts.entry(category).or_insert(0) += 1;
                tally.answered += 1;
            }
            None => tally.skipped += 1,
        }
    }

    tally
}
