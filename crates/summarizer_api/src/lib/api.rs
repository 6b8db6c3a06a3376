pub mod builder;
pub mod summarize;
pub mod transcript;

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::post, Router};
use tokio::net::TcpListener;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{llm::transcript::TranscriptSummarizer, GenerationParams, Summarizer};

/// Everything a request needs, built once at startup and shared read-only.
#[derive(Debug)]
pub struct AppState<S, T> {
    pub(crate) summarizer: S,
    pub(crate) transcripts: T,
    pub(crate) params: GenerationParams,
}

/// Builds the service routes around `state`.
///
/// Cross-origin requests are allowed from any origin.
pub fn router<S, T>(state: AppState<S, T>) -> Router
where
    S: Summarizer + Send + Sync + 'static,
    T: TranscriptSummarizer + Send + Sync + 'static,
{
    Router::new()
        .route("/summarize", post(summarize::summarize::<S, T>))
        .route(
            "/summarize-transcript",
            post(transcript::summarize_transcript::<S, T>),
        )
        .layer(trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Request spans and completion events at INFO, so every request is logged
/// under the default filter.
fn trace_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    DefaultMakeSpan,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

/// Serves `app` on `listener` until Ctrl-C or SIGTERM.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    let addr = listener.local_addr().context("listener has no local address")?;
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("error starting service")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight requests");
}
