use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::{
    api::AppState, error::SummarizeError, llm::transcript::TranscriptSummarizer,
    GenerationParams, SummarizeRequest, SummarizeResponse, Summarizer,
};

/// `POST /summarize`
///
/// Always answers 200 with a single `summary` field; failures are reported
/// as `"Error: <description>"` inside it.
pub async fn summarize<S, T>(
    State(state): State<Arc<AppState<S, T>>>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Json<SummarizeResponse>
where
    S: Summarizer + Send + Sync + 'static,
    T: TranscriptSummarizer + Send + Sync + 'static,
{
    let text = match payload {
        Ok(Json(request)) => request.text.unwrap_or_default(),
        Err(rejection) => {
            let err = SummarizeError::InvalidInput(format!(
                "invalid request body: {}",
                rejection.body_text()
            ));
            tracing::warn!(kind = err.kind(), error = %err, "Rejected summarize request");
            return Json(SummarizeResponse::error(err));
        }
    };

    Json(summarize_text(&state.summarizer, &text, &state.params).await)
}

/// Summarizes `text`, folding every outcome into a response body.
///
/// Empty text short-circuits to the placeholder without calling the model.
/// Otherwise the first candidate the model returns is used verbatim.
#[tracing::instrument(skip(summarizer, text), fields(input_len = text.len()))]
pub async fn summarize_text<S>(
    summarizer: &S,
    text: &str,
    params: &GenerationParams,
) -> SummarizeResponse
where
    S: Summarizer + Send + Sync,
{
    if text.is_empty() {
        return SummarizeResponse::no_input();
    }

    let result = summarizer
        .summarize(text, params)
        .await
        .map_err(Into::<SummarizeError>::into)
        .and_then(|candidates| {
            candidates.into_iter().next().ok_or_else(|| {
                SummarizeError::Internal("model returned no summary candidates".into())
            })
        });

    match result {
        Ok(candidate) => SummarizeResponse {
            summary: candidate.summary_text,
        },
        Err(err) => {
            tracing::error!(kind = err.kind(), error = %err, "Summarization failed");
            SummarizeResponse::error(err)
        }
    }
}
