//! HTTP surface: one endpoint, `POST /api/v1/classify-comment?text=...`.
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | classified | 200 | `{"predict": "Negative" \| "Neutral" \| "Positive"}` |
//! | `text` missing or empty | 404 | `{"detail": "Query is required"}` |
//! | pipeline error | 500 | `{"detail": "<message>"}` |

pub(crate) mod config;
pub(crate) mod handlers;

pub use config::ServerConfig;
pub use handlers::{ApiError, ClassifyParams, ClassifyResponse, ErrorResponse};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::Result;
use crate::normalization::SlangDictionary;
use crate::sentiment::{
    ClassificationPipeline, ClassificationPipelineBuilder, ModernBertClassifier,
    SentimentClassifier,
};

/// Route path of the classification endpoint.
pub const CLASSIFY_PATH: &str = "/api/v1/classify-comment";

/// Shared per-process state handed to every handler.
pub struct AppState<M: SentimentClassifier> {
    pub pipeline: Arc<ClassificationPipeline<M>>,
}

impl<M: SentimentClassifier> Clone for AppState<M> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}

/// Build the router around an already-loaded pipeline.
pub fn router<M>(pipeline: Arc<ClassificationPipeline<M>>) -> Router
where
    M: SentimentClassifier + 'static,
{
    Router::new()
        .route(CLASSIFY_PATH, post(handlers::classify_comment::<M>))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { pipeline })
}

/// Load the slang dictionary and the model. Any failure here is fatal.
pub fn load_pipeline(config: &ServerConfig) -> Result<ClassificationPipeline<ModernBertClassifier>> {
    let dictionary = SlangDictionary::from_path(&config.teencode_path)?;

    ClassificationPipelineBuilder::modernbert(config.model_source())
        .dictionary(dictionary)
        .normalization(config.normalization())
        .device(config.device_request())
        .max_length(config.max_length)
        .build()
}

/// Serve `router` on `addr` until Ctrl-C.
pub async fn serve(router: Router, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
