pub mod api;
pub mod error;
mod llm;
pub mod parser;
pub mod tracing;
pub mod types;

pub use api::{builder::AppStateBuilder, router, serve, AppState};
pub use error::SummarizeError;
pub use llm::{inference, openai};
pub use llm::{
    summarizer::Summarizer,
    transcript::{NoTranscriptBackend, SummaryMode, TranscriptSummarizer},
};
pub use types::{
    ErrorResponse, GenerationParams, SummarizeRequest, SummarizeResponse, SummaryCandidate,
    TranscriptRequest, TranscriptSummary,
};
