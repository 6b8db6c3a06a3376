use std::sync::{Arc, Mutex};
use summarizer_api::{GenerationParams, SummarizeError, Summarizer, SummaryCandidate};

#[derive(Clone)]
pub struct MockSummarizer {
    pub candidates: Vec<SummaryCandidate>,
    pub calls: Arc<Mutex<Vec<(String, GenerationParams)>>>,
    pub fail_with: Option<SummarizeError>,
}

impl MockSummarizer {
    pub fn new(summaries: &[&str]) -> Self {
        Self {
            candidates: summaries
                .iter()
                .map(|s| SummaryCandidate {
                    summary_text: s.to_string(),
                })
                .collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(err: SummarizeError) -> Self {
        Self {
            candidates: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(err),
        }
    }
}

impl Summarizer for MockSummarizer {
    type Error = SummarizeError;

    async fn summarize(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<Vec<SummaryCandidate>, Self::Error> {
        self.calls.lock().unwrap().push((text.to_string(), *params));
        if let Some(ref err) = self.fail_with {
            return Err(err.clone());
        }
        Ok(self.candidates.clone())
    }
}
