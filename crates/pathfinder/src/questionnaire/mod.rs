//! Question bank, answer resolution and personality scoring.

mod bank;
pub mod domain;
mod import;
mod scoring;

pub use bank::QuestionBank;
pub use domain::{AnswerMap, AnswerOption, Question, TraitCategory, UnknownTrait};
pub use import::{QuestionBankError, QuestionBankImporter};
pub use scoring::{analyze_answers, tally_answers, PersonalityProfile, TraitTally};
