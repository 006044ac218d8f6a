//! HTTP API for the agent.
//!
//! Two routes: `POST /agent/execute` runs one bounded agent loop, `GET /` is
//! the liveness probe. Each request gets its own independent run; no state is
//! shared across requests.

pub mod types;

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::agent::Agent;
use crate::config::Config;
use crate::llm::LlmError;

use types::{ExecuteRequest, ExecuteResponse, HealthResponse};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<Agent>,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/agent/execute", post(execute_agent))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve the API until the process exits.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState {
        agent: Arc::new(Agent::new(&config)),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// `POST /agent/execute` - run one bounded agent loop over the prompt.
async fn execute_agent(
    State(state): State<AppState>,
    Json(request): Json<ExecuteRequest>,
) -> Result<Json<ExecuteResponse>, ApiError> {
    let outcome = state.agent.execute(&request.prompt).await?;
    Ok(Json(ExecuteResponse {
        trajectory: outcome.trajectory,
        final_answer: outcome.final_answer,
        status: outcome.status,
    }))
}

/// `GET /` - liveness probe.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Agent Backend Online".to_string(),
    })
}

/// Completion-endpoint faults surface to the caller as a server error.
struct ApiError(LlmError);

impl From<LlmError> for ApiError {
    fn from(e: LlmError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("completion endpoint failure: {}", self.0);
        let body = serde_json::json!({ "detail": format!("LLM Error: {}", self.0) });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ChatMessage, LlmClient};
    use async_trait::async_trait;

    /// Client that always returns the same reply.
    struct FixedLlm(&'static str);

    #[async_trait]
    impl LlmClient for FixedLlm {
        async fn complete(
            &self,
            _model: &str,
            _messages: &[ChatMessage],
            _temperature: f32,
        ) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    fn state_with(reply: &'static str, workspace: &std::path::Path) -> AppState {
        let config = Config::new(
            "http://localhost:8000/v1".to_string(),
            "test-model".to_string(),
            workspace.to_path_buf(),
        );
        AppState {
            agent: Arc::new(Agent::with_client(&config, Arc::new(FixedLlm(reply)))),
        }
    }

    #[tokio::test]
    async fn health_reports_online() {
        let Json(body) = health().await;
        assert_eq!(body.status, "Agent Backend Online");
    }

    #[tokio::test]
    async fn execute_returns_final_answer_payload() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with(r#"{"action":"final_answer","params":{"answer":"4"}}"#, dir.path());

        let result = execute_agent(
            State(state),
            Json(ExecuteRequest {
                prompt: "What is 2+2?".to_string(),
            }),
        )
        .await;

        let Json(response) = result.unwrap_or_else(|_| panic!("expected 200 response"));
        assert_eq!(response.final_answer.as_deref(), Some("4"));
        assert_eq!(response.status, None);
        assert_eq!(response.trajectory.len(), 1);
    }

    #[tokio::test]
    async fn transport_fault_maps_to_server_error() {
        struct BrokenLlm;

        #[async_trait]
        impl LlmClient for BrokenLlm {
            async fn complete(
                &self,
                _model: &str,
                _messages: &[ChatMessage],
                _temperature: f32,
            ) -> Result<String, LlmError> {
                Err(LlmError::MalformedResponse("boom".to_string()))
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(
            "http://localhost:8000/v1".to_string(),
            "test-model".to_string(),
            dir.path().to_path_buf(),
        );
        let state = AppState {
            agent: Arc::new(Agent::with_client(&config, Arc::new(BrokenLlm))),
        };

        let result = execute_agent(
            State(state),
            Json(ExecuteRequest {
                prompt: "hello".to_string(),
            }),
        )
        .await;

        let response = result.err().expect("expected an error").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
