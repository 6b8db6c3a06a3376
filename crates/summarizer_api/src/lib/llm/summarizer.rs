use std::{fmt::Debug, future::Future};

use crate::{error::SummarizeError, GenerationParams, SummaryCandidate};

/// A model that reduces input text to a shorter text.
///
/// Implementations are built once at startup and shared read-only between
/// requests, so `summarize` takes `&self`.
pub trait Summarizer {
    type Error: Into<SummarizeError> + Debug + Send;

    /// Returns the generated candidates, best first.
    fn summarize(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> impl Future<Output = Result<Vec<SummaryCandidate>, Self::Error>> + Send;
}
