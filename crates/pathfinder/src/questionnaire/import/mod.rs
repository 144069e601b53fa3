mod parser;

use super::bank::QuestionBank;
use super::domain::{AnswerOption, Question, TraitCategory, UnknownTrait};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum QuestionBankError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownTrait {
        question_id: u32,
        option_id: String,
        source: UnknownTrait,
    },
    DuplicateOption {
        question_id: u32,
        option_id: String,
    },
    Empty,
}

impl std::fmt::Display for QuestionBankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionBankError::Io(err) => write!(f, "failed to read question bank: {}", err),
            QuestionBankError::Csv(err) => write!(f, "invalid question bank CSV: {}", err),
            QuestionBankError::UnknownTrait {
                question_id,
                option_id,
                source,
            } => write!(
                f,
                "option {} of question {} has {}",
                option_id, question_id, source
            ),
            QuestionBankError::DuplicateOption {
                question_id,
                option_id,
            } => write!(
                f,
                "option {} appears more than once in question {}",
                option_id, question_id
            ),
            QuestionBankError::Empty => write!(f, "question bank contains no questions"),
        }
    }
}

impl std::error::Error for QuestionBankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuestionBankError::Io(err) => Some(err),
            QuestionBankError::Csv(err) => Some(err),
            QuestionBankError::UnknownTrait { source, .. } => Some(source),
            QuestionBankError::DuplicateOption { .. } | QuestionBankError::Empty => None,
        }
    }
}

impl From<std::io::Error> for QuestionBankError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for QuestionBankError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads a custom question bank from a `question_id,question_text,option_id,option_text,trait` CSV.
pub struct QuestionBankImporter;

impl QuestionBankImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<QuestionBank, QuestionBankError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<QuestionBank, QuestionBankError> {
        let mut questions: Vec<Question> = Vec::new();

        for row in parser::parse_rows(reader)? {
            let trait_category = match row.trait_label.as_deref() {
                Some(label) => Some(label.parse::<TraitCategory>().map_err(|source| {
                    QuestionBankError::UnknownTrait {
                        question_id: row.question_id,
                        option_id: row.option_id.clone(),
                        source,
                    }
                })?),
                None => None,
            };

            let index = match questions
                .iter()
                .position(|question| question.id == row.question_id)
            {
                Some(index) => index,
                None => {
                    questions.push(Question {
                        id: row.question_id,
                        text: row.question_text,
                        options: Vec::new(),
                    });
                    questions.len() - 1
                }
            };

            let question = &mut questions[index];
            if question.option(&row.option_id).is_some() {
                return Err(QuestionBankError::DuplicateOption {
                    question_id: row.question_id,
                    option_id: row.option_id,
                });
            }

            question.options.push(AnswerOption {
                id: row.option_id,
                text: row.option_text,
                trait_category,
            });
        }

        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }

        Ok(QuestionBank::new(questions))
    }
}
