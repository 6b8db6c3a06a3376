use std::sync::{Arc, Mutex};
use summarizer_api::{SummaryMode, TranscriptSummarizer, TranscriptSummary};

#[derive(Clone)]
pub struct MockTranscriptSummarizer {
    pub summary: TranscriptSummary,
    /// (transcript, speaker) per call
    pub calls: Arc<Mutex<Vec<(String, Option<String>)>>>,
    pub fail_with: Option<String>,
}

impl MockTranscriptSummarizer {
    pub fn new(summary: TranscriptSummary) -> Self {
        Self {
            summary,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            summary: TranscriptSummary::Speaker {
                summary: Vec::new(),
            },
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl TranscriptSummarizer for MockTranscriptSummarizer {
    type Error = anyhow::Error;

    async fn summarize_transcript(
        &self,
        transcript: &str,
        mode: SummaryMode<'_>,
    ) -> Result<TranscriptSummary, Self::Error> {
        let speaker = match mode {
            SummaryMode::Speaker(speaker) => Some(speaker.to_string()),
            SummaryMode::Meeting => None,
        };
        self.calls
            .lock()
            .unwrap()
            .push((transcript.to_string(), speaker));
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.summary.clone())
    }
}
