use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::AppState;
use crate::error::PipelineError;
use crate::sentiment::{SentimentClassifier, SentimentLabel};

#[derive(Debug, Deserialize)]
pub struct ClassifyParams {
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifyResponse {
    pub predict: SentimentLabel,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Failure of a classification request, rendered as `{"detail": ...}`.
#[derive(Debug)]
pub enum ApiError {
    /// `text` query parameter missing or empty.
    MissingQuery,
    Pipeline(PipelineError),
}

impl From<PipelineError> for ApiError {
    fn from(value: PipelineError) -> Self {
        ApiError::Pipeline(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::MissingQuery => (StatusCode::NOT_FOUND, "Query is required".to_string()),
            ApiError::Pipeline(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// `POST /api/v1/classify-comment?text=...`
pub async fn classify_comment<M>(
    State(state): State<AppState<M>>,
    Query(params): Query<ClassifyParams>,
) -> Result<Json<ClassifyResponse>, ApiError>
where
    M: SentimentClassifier + 'static,
{
    let text = match params.text {
        Some(text) if !text.is_empty() => text,
        _ => {
            warn!("rejected classification request without text");
            return Err(ApiError::MissingQuery);
        }
    };

    let pipeline = Arc::clone(&state.pipeline);
    let output = tokio::task::spawn_blocking(move || pipeline.run(&text))
        .await
        .map_err(|e| PipelineError::Classifier(format!("Classification task failed: {e}")))?
        .inspect_err(|e| {
            if !logged_by_pipeline(e) {
                error!(error = %e, "classification failed");
            }
        })?;

    info!(
        label = %output.label,
        elapsed_ms = output.stats.total_time.as_secs_f64() * 1000.0,
        "classified comment"
    );

    Ok(Json(ClassifyResponse {
        predict: output.label,
    }))
}

/// The pipeline reports label-table mismatches itself.
fn logged_by_pipeline(e: &PipelineError) -> bool {
    matches!(e, PipelineError::OutOfRangeLabel(_))
}
