use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use comment_sentiment::server::{self, ServerConfig};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::parse();
    let addr = config.bind_addr();

    // Model loading is blocking and must finish before the first request.
    let pipeline = match tokio::task::spawn_blocking(move || server::load_pipeline(&config)).await {
        Ok(Ok(pipeline)) => pipeline,
        Ok(Err(e)) => {
            error!(error = %e, "startup failed");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!(error = %e, "startup task panicked");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = server::serve(server::router(Arc::new(pipeline)), addr).await {
        error!(error = %e, %addr, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
