use crate::infra::{AppState, Pathfinder};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use pathfinder::advisor::AdvisorOutcome;
use pathfinder::careers::{select_recommendations, CareerDescriptor, RecommendationSource};
use pathfinder::error::AppError;
use pathfinder::questionnaire::{analyze_answers, AnswerMap, PersonalityProfile, Question};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileRequest {
    #[serde(default)]
    pub(crate) answers: AnswerMap,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationRequest {
    #[serde(default)]
    pub(crate) answers: AnswerMap,
    #[serde(default)]
    pub(crate) max_results: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionsResponse<'a> {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) count: usize,
    pub(crate) questions: &'a [Question],
}

#[derive(Debug, Serialize)]
pub(crate) struct ProfileResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) profile: PersonalityProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum RecommendationStatus {
    Ok,
    NoRecommendations,
}

#[derive(Debug, Serialize)]
pub(crate) struct RecommendationResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) status: RecommendationStatus,
    pub(crate) source: RecommendationSource,
    pub(crate) profile: PersonalityProfile,
    pub(crate) recommendations: Vec<CareerDescriptor>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AiRecommendationResponse {
    pub(crate) generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub(crate) outcome: AdvisorOutcome,
}

pub(crate) fn router(pathfinder: Pathfinder) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/questions", get(questions_endpoint))
        .route("/api/v1/profile", post(profile_endpoint))
        .route("/api/v1/recommendations", post(recommendations_endpoint))
        .route(
            "/api/v1/recommendations/ai",
            post(ai_recommendations_endpoint),
        )
        .with_state(pathfinder)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn questions_endpoint(State(pathfinder): State<Pathfinder>) -> impl IntoResponse {
    let questions = pathfinder.questions.questions();
    Json(QuestionsResponse {
        generated_at: Utc::now(),
        count: questions.len(),
        questions,
    })
    .into_response()
}

pub(crate) async fn profile_endpoint(
    State(pathfinder): State<Pathfinder>,
    Json(payload): Json<ProfileRequest>,
) -> Json<ProfileResponse> {
    let profile = analyze_answers(&payload.answers, pathfinder.questions.questions());
    Json(ProfileResponse {
        generated_at: Utc::now(),
        profile,
    })
}

pub(crate) async fn recommendations_endpoint(
    State(pathfinder): State<Pathfinder>,
    Json(payload): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let max_results = match payload.max_results {
        Some(0) => {
            return Err(AppError::InvalidRequest(
                "max_results must be at least 1".to_string(),
            ));
        }
        Some(max) => max,
        None => pathfinder.max_results,
    };

    let profile = analyze_answers(&payload.answers, pathfinder.questions.questions());
    let recommendations = select_recommendations(&profile, &pathfinder.catalog, max_results);
    let status = if recommendations.is_empty() {
        RecommendationStatus::NoRecommendations
    } else {
        RecommendationStatus::Ok
    };

    Ok(Json(RecommendationResponse {
        generated_at: Utc::now(),
        status,
        source: RecommendationSource::Catalog,
        profile,
        recommendations,
    }))
}

pub(crate) async fn ai_recommendations_endpoint(
    State(pathfinder): State<Pathfinder>,
    Json(payload): Json<ProfileRequest>,
) -> Json<AiRecommendationResponse> {
    let outcome = pathfinder.advisor.recommend(&payload.answers).await;
    Json(AiRecommendationResponse {
        generated_at: Utc::now(),
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::response::Response;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use pathfinder::advisor::CareerAdvisor;
    use pathfinder::careers::CareerCatalog;
    use pathfinder::questionnaire::QuestionBank;
    use serde_json::Value;
    use std::collections::BTreeMap;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn pathfinder_state(catalog: CareerCatalog) -> Pathfinder {
        let questions = Arc::new(QuestionBank::standard());
        Pathfinder {
            advisor: Arc::new(CareerAdvisor::without_backend(questions.clone())),
            questions,
            catalog: Arc::new(catalog),
            max_results: 6,
        }
    }

    fn app(catalog: CareerCatalog, ready: bool) -> Router {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        router(pathfinder_state(catalog)).layer(Extension(state))
    }

    async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn post_json(uri: &str, payload: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request builds")
    }

    fn reference_answers() -> Value {
        json!({
            "1": "1a", "2": "2a", "3": "3a", "4": "4e", "5": "5a",
            "6": "6e", "7": "7a", "8": "8a", "9": "9e"
        })
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let response = app(CareerCatalog::standard(), false)
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request builds"))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(read_json_body(response).await["status"], "initializing");
    }

    #[tokio::test]
    async fn questions_route_lists_standard_bank() {
        let response = app(CareerCatalog::standard(), true)
            .oneshot(
                Request::get("/api/v1/questions")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["count"], 9);
        assert_eq!(payload["questions"][3]["options"][4]["id"], "4e");
        assert_eq!(payload["questions"][3]["options"][4]["type"], "creative");
        assert!(payload["generated_at"].is_string());
    }

    #[tokio::test]
    async fn profile_route_scores_answers() {
        let response = app(CareerCatalog::standard(), true)
            .oneshot(post_json(
                "/api/v1/profile",
                json!({ "answers": reference_answers() }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["profile"]["dominant_type"], "tech");
        assert_eq!(payload["profile"]["secondary_type"], "creative");
        assert_eq!(payload["profile"]["distribution"]["tech"], 67);
        assert_eq!(payload["profile"]["distribution"]["creative"], 33);
    }

    #[tokio::test]
    async fn recommendations_route_honours_max_results() {
        let response = app(CareerCatalog::standard(), true)
            .oneshot(post_json(
                "/api/v1/recommendations",
                json!({ "answers": reference_answers(), "max_results": 4 }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["source"], "catalog");
        let recommendations = payload["recommendations"]
            .as_array()
            .expect("recommendation list");
        assert_eq!(recommendations.len(), 4);
        assert_eq!(recommendations[0]["title"], "Software Engineer");
    }

    #[tokio::test]
    async fn recommendations_route_reports_empty_catalog() {
        let response = app(CareerCatalog::new(BTreeMap::new()), true)
            .oneshot(post_json(
                "/api/v1/recommendations",
                json!({ "answers": {} }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["status"], "no_recommendations");
        assert_eq!(payload["profile"]["dominant_type"], "tech");
        assert_eq!(payload["profile"]["secondary_type"], "business");
    }

    #[tokio::test]
    async fn recommendations_route_rejects_zero_max_results() {
        let response = app(CareerCatalog::standard(), true)
            .oneshot(post_json(
                "/api/v1/recommendations",
                json!({ "answers": reference_answers(), "max_results": 0 }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = read_json_body(response).await;
        assert!(payload["error"]
            .as_str()
            .expect("error message")
            .contains("max_results"));
    }

    #[tokio::test]
    async fn ai_route_serves_fallback_without_backend() {
        let response = app(CareerCatalog::standard(), true)
            .oneshot(post_json(
                "/api/v1/recommendations/ai",
                json!({ "answers": reference_answers() }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["source"], "fallback");
        assert_eq!(
            payload["response"]["recommendations"]
                .as_array()
                .expect("recommendation list")
                .len(),
            5
        );
        assert_eq!(payload["response"]["top_fields"][3], "UX/UI Designer");
        assert!(payload["generated_at"].is_string());
    }
}
