use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use crate::advisor::{AdvisorError, RecommendationBackend};
use crate::questionnaire::{AnswerMap, QuestionBank};

/// Backend double returning a canned reply and recording prompts.
pub(super) struct ScriptedBackend {
    reply: Reply,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

pub(super) enum Reply {
    Text(String),
    Status(u16),
}

impl ScriptedBackend {
    pub(super) fn replying(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Text(text.into()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub(super) fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Status(status),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(super) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt log poisoned").clone()
    }
}

#[async_trait]
impl RecommendationBackend for ScriptedBackend {
    async fn generate(&self, prompt: &str) -> Result<String, AdvisorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .expect("prompt log poisoned")
            .push(prompt.to_string());

        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Status(status) => Err(AdvisorError::Status {
                status: *status,
                body: "upstream unavailable".to_string(),
            }),
        }
    }
}

pub(super) fn question_bank() -> Arc<QuestionBank> {
    Arc::new(QuestionBank::standard())
}

/// Six tech answers and three creative ones.
pub(super) fn tech_creative_answers() -> AnswerMap {
    [
        (1, "1a"),
        (2, "2a"),
        (3, "3a"),
        (4, "4e"),
        (5, "5a"),
        (6, "6e"),
        (7, "7a"),
        (8, "8a"),
        (9, "9e"),
    ]
    .into_iter()
    .map(|(question, option)| (question, option.to_string()))
    .collect()
}

pub(super) fn generated_reply(fields: &[&str]) -> String {
    let recommendations: Vec<serde_json::Value> = fields
        .iter()
        .map(|field| {
            json!({
                "field": field,
                "roles": ["Lead", "Specialist"],
                "description": format!("Works as a {field}."),
                "skills": ["Communication"],
                "education": ["Bachelor's degree"],
                "fitReason": format!("{field} suits your answers.")
            })
        })
        .collect();

    let body = json!({
        "personalityInsight": "You enjoy building things with technology.",
        "topFields": fields,
        "recommendations": recommendations
    });
    format!("Sure! Here are your careers:\n{body}")
}
