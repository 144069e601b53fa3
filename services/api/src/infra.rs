use metrics_exporter_prometheus::PrometheusHandle;
use pathfinder::advisor::{CareerAdvisor, GeminiBackend};
use pathfinder::careers::CareerCatalog;
use pathfinder::config::AppConfig;
use pathfinder::error::AppError;
use pathfinder::questionnaire::{AnswerMap, QuestionBank, QuestionBankImporter};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Questionnaire resources shared by every request.
#[derive(Clone)]
pub(crate) struct Pathfinder {
    pub(crate) questions: Arc<QuestionBank>,
    pub(crate) catalog: Arc<CareerCatalog>,
    pub(crate) advisor: Arc<CareerAdvisor>,
    pub(crate) max_results: usize,
}

impl Pathfinder {
    pub(crate) fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let questions = Arc::new(load_question_bank(config)?);

        let advisor = if config.advisor.is_enabled() {
            let backend = GeminiBackend::from_config(&config.advisor)?;
            info!(model = backend.model(), "gemini advisor enabled");
            CareerAdvisor::new(Arc::new(backend), questions.clone())
        } else {
            info!("GEMINI_API_KEY not set, advisor serves curated fallback recommendations");
            CareerAdvisor::without_backend(questions.clone())
        };

        Ok(Self {
            questions,
            catalog: Arc::new(CareerCatalog::standard()),
            advisor: Arc::new(advisor),
            max_results: config.recommendations.max_results,
        })
    }
}

fn load_question_bank(config: &AppConfig) -> Result<QuestionBank, AppError> {
    match &config.recommendations.question_bank_path {
        Some(path) => {
            let bank = QuestionBankImporter::from_path(path)?;
            info!(path = %path.display(), questions = bank.len(), "loaded custom question bank");
            Ok(bank)
        }
        None => Ok(QuestionBank::standard()),
    }
}

/// Parses a `QUESTION=OPTION` pair such as `1=1a`.
pub(crate) fn parse_answer(raw: &str) -> Result<(u32, String), String> {
    let (question, option) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=OPTION, got '{raw}'"))?;
    let question = question
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("question id '{}' is not a number ({err})", question.trim()))?;
    let option = option.trim();
    if option.is_empty() {
        return Err(format!("answer for question {question} is empty"));
    }
    Ok((question, option.to_string()))
}

pub(crate) fn answer_map(pairs: Vec<(u32, String)>) -> AnswerMap {
    pairs.into_iter().collect()
}
