use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::routing::post;
use axum::{Json, Router};
use pathfinder::advisor::{AdvisorError, CareerAdvisor, GeminiBackend, RecommendationBackend};
use pathfinder::careers::RecommendationSource;
use pathfinder::questionnaire::{AnswerMap, QuestionBank, TraitCategory};
use serde_json::{json, Value};

#[derive(Debug, Clone)]
struct CapturedRequest {
    action: String,
    query: Option<String>,
    api_key: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    reply: Value,
    delay: Duration,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

async fn generate_content(
    State(state): State<StubState>,
    Path(action): Path<String>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state
        .requests
        .lock()
        .expect("request log poisoned")
        .push(CapturedRequest {
            action,
            query: uri.query().map(str::to_string),
            api_key: headers
                .get("x-goog-api-key")
                .and_then(|value| value.to_str().ok())
                .map(str::to_string),
            body,
        });
    tokio::time::sleep(state.delay).await;
    (state.status, Json(state.reply.clone()))
}

async fn spawn_stub(
    status: StatusCode,
    reply: Value,
    delay: Duration,
) -> (String, Arc<Mutex<Vec<CapturedRequest>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        status,
        reply,
        delay,
        requests: requests.clone(),
    };
    let app = Router::new()
        .route("/v1/models/:action", post(generate_content))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server runs");
    });

    (format!("http://{addr}"), requests)
}

fn envelope(text: &str) -> Value {
    json!({
        "candidates": [
            { "content": { "role": "model", "parts": [{ "text": text }] }, "finishReason": "STOP" }
        ]
    })
}

fn backend(base_url: &str, timeout: Duration) -> GeminiBackend {
    GeminiBackend::new("test-key", base_url, "gemini-test", timeout).expect("client builds")
}

#[tokio::test]
async fn posts_prompt_and_returns_candidate_text() {
    let (base_url, requests) =
        spawn_stub(StatusCode::OK, envelope("generated text"), Duration::ZERO).await;

    let text = backend(&base_url, Duration::from_secs(5))
        .generate("Which careers suit me?")
        .await
        .expect("generation succeeds");

    assert_eq!(text, "generated text");
    let requests = requests.lock().expect("request log poisoned");
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.action, "gemini-test:generateContent");
    assert_eq!(request.query, None);
    assert_eq!(request.api_key.as_deref(), Some("test-key"));
    assert_eq!(
        request.body["contents"][0]["parts"][0]["text"],
        "Which careers suit me?"
    );
    assert_eq!(request.body["generationConfig"]["topK"], 40);
    assert_eq!(request.body["generationConfig"]["maxOutputTokens"], 2048);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let (base_url, _) = spawn_stub(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": { "message": "quota exceeded" } }),
        Duration::ZERO,
    )
    .await;

    match backend(&base_url, Duration::from_secs(5)).generate("prompt").await {
        Err(AdvisorError::Status { status, body }) => {
            assert_eq!(status, 429);
            assert!(body.contains("quota exceeded"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn envelope_without_candidates_is_malformed() {
    let (base_url, _) = spawn_stub(
        StatusCode::OK,
        json!({ "promptFeedback": { "blockReason": "SAFETY" } }),
        Duration::ZERO,
    )
    .await;

    match backend(&base_url, Duration::from_secs(5)).generate("prompt").await {
        Err(AdvisorError::MalformedEnvelope) => {}
        other => panic!("expected malformed envelope, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_backend_times_out() {
    let (base_url, _) = spawn_stub(
        StatusCode::OK,
        envelope("too late"),
        Duration::from_secs(2),
    )
    .await;

    match backend(&base_url, Duration::from_millis(200))
        .generate("prompt")
        .await
    {
        Err(AdvisorError::Transport(err)) => {
            assert!(err.is_timeout());
            assert!(err.url().is_none());
        }
        other => panic!("expected transport timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn advisor_uses_gemini_recommendations_end_to_end() {
    let generated = json!({
        "personalityInsight": "A hands-on problem solver.",
        "topFields": ["Robotics Engineer", "Software Developer"],
        "recommendations": [
            {
                "field": "Robotics Engineer",
                "roles": ["Automation Specialist"],
                "description": "Builds robots.",
                "skills": ["Control systems"],
                "education": ["Mechanical Engineering degree"],
                "fitReason": "You like building systems."
            },
            {
                "field": "Software Developer",
                "roles": ["Backend Engineer"],
                "description": "Writes software.",
                "skills": ["Programming"],
                "education": ["Computer Science degree"],
                "fitReason": "You enjoy logic puzzles."
            }
        ]
    });
    let (base_url, requests) = spawn_stub(
        StatusCode::OK,
        envelope(&format!("```json\n{generated}\n```")),
        Duration::ZERO,
    )
    .await;

    let advisor = CareerAdvisor::new(
        Arc::new(backend(&base_url, Duration::from_secs(5))),
        Arc::new(QuestionBank::standard()),
    );
    let answers: AnswerMap = [(1, "1b"), (2, "2b"), (3, "3a")]
        .into_iter()
        .map(|(question, option)| (question, option.to_string()))
        .collect();

    let outcome = advisor.recommend(&answers).await;

    assert_eq!(outcome.source, RecommendationSource::Advisor);
    assert_eq!(outcome.profile.dominant_type, TraitCategory::Engineering);
    assert_eq!(outcome.response.recommendations.len(), 5);
    assert!(outcome.response.recommendations[0].matches(TraitCategory::Engineering));
    assert!(outcome.response.recommendations[1].matches(TraitCategory::Tech));
    assert_eq!(
        outcome.response.top_fields[2],
        "Software Developer (Specialization)"
    );
    assert_eq!(requests.lock().expect("request log poisoned").len(), 1);
}

#[tokio::test]
async fn advisor_falls_back_when_gemini_fails() {
    let (base_url, _) = spawn_stub(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "boom" }),
        Duration::ZERO,
    )
    .await;

    let advisor = CareerAdvisor::new(
        Arc::new(backend(&base_url, Duration::from_secs(5))),
        Arc::new(QuestionBank::standard()),
    );

    let outcome = advisor.recommend(&AnswerMap::new()).await;

    assert_eq!(outcome.source, RecommendationSource::Fallback);
    assert_eq!(outcome.response.recommendations.len(), 5);
    assert_eq!(outcome.response.recommendations[0].title, "Full-Stack Developer");
}

#[tokio::test]
async fn transport_failures_never_expose_the_api_key() {
    // Nothing listens on port 1, so the request fails before any response.
    let secret = "AIzaSy-pathfinder-secret";
    let backend = GeminiBackend::new(
        secret,
        "http://127.0.0.1:1",
        "gemini-test",
        Duration::from_secs(2),
    )
    .expect("client builds");
    let advisor = CareerAdvisor::new(Arc::new(backend), Arc::new(QuestionBank::standard()));

    let outcome = advisor.recommend(&AnswerMap::new()).await;

    assert_eq!(outcome.source, RecommendationSource::Fallback);
    let reason = outcome.fallback_reason.as_deref().expect("fallback reason recorded");
    assert!(reason.starts_with("request to recommendation backend failed"));
    assert!(!reason.contains(secret));
    let serialized = serde_json::to_string(&outcome).expect("outcome serializes");
    assert!(!serialized.contains(secret));
}
