use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    api::AppState,
    llm::transcript::{SummaryMode, TranscriptSummarizer},
    ErrorResponse, Summarizer, TranscriptRequest, TranscriptSummary,
};

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("invalid request body: {message}")]
    InvalidRequest { status: StatusCode, message: String },
    #[error("Failed to generate summary")]
    Generation,
}

impl From<JsonRejection> for TranscriptError {
    fn from(rejection: JsonRejection) -> Self {
        TranscriptError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for TranscriptError {
    fn into_response(self) -> Response {
        let status = match &self {
            TranscriptError::InvalidRequest { status, .. } => *status,
            TranscriptError::Generation => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// `POST /summarize-transcript`
///
/// Summarizes a meeting transcript for one speaker, or per speaker plus an
/// overall summary when no speaker is given.
#[tracing::instrument(skip_all, fields(speaker = tracing::field::Empty))]
pub async fn summarize_transcript<S, T>(
    State(state): State<Arc<AppState<S, T>>>,
    payload: Result<Json<TranscriptRequest>, JsonRejection>,
) -> Result<Json<TranscriptSummary>, TranscriptError>
where
    S: Summarizer + Send + Sync + 'static,
    T: TranscriptSummarizer + Send + Sync + 'static,
{
    let Json(request) = payload
        .inspect_err(|e| tracing::warn!(error = %e, "Rejected transcript request body"))?;

    if let Some(speaker) = request.speaker() {
        tracing::Span::current().record("speaker", speaker);
    }
    let mode = SummaryMode::from_speaker(request.speaker());

    let summary = state
        .transcripts
        .summarize_transcript(&request.transcript, mode)
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "Error generating transcript summary");
            TranscriptError::Generation
        })?;

    Ok(Json(summary))
}
