use std::{fmt::Debug, future::Future, sync::LazyLock};

use regex::{Captures, Regex};

use crate::TranscriptSummary;

const SPEAKER_PROMPT: &str = include_str!("./prompts/speaker.txt");
const MEETING_PROMPT: &str = include_str!("./prompts/meeting.txt");

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(speaker|transcript)\}").unwrap());

/// What a transcript summary should focus on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMode<'a> {
    /// Bullet points, action items and decisions for one speaker.
    Speaker(&'a str),
    /// A summary per speaker plus an overall one.
    Meeting,
}

impl<'a> SummaryMode<'a> {
    pub fn from_speaker(speaker: Option<&'a str>) -> Self {
        match speaker {
            Some(speaker) if !speaker.is_empty() => SummaryMode::Speaker(speaker),
            _ => SummaryMode::Meeting,
        }
    }

    /// Renders the instruction sent to the chat model.
    ///
    /// Placeholders are filled in a single pass over the template, so text
    /// coming from the request is never expanded again.
    pub fn prompt(&self, transcript: &str) -> String {
        let (template, speaker) = match self {
            SummaryMode::Speaker(speaker) => (SPEAKER_PROMPT, *speaker),
            SummaryMode::Meeting => (MEETING_PROMPT, ""),
        };

        PLACEHOLDER_RE
            .replace_all(template, |caps: &Captures<'_>| match &caps[1] {
                "speaker" => speaker,
                _ => transcript,
            })
            .into_owned()
    }
}

pub trait TranscriptSummarizer {
    type Error: Debug + Send;

    fn summarize_transcript(
        &self,
        transcript: &str,
        mode: SummaryMode<'_>,
    ) -> impl Future<Output = Result<TranscriptSummary, Self::Error>> + Send;
}

/// Used when no chat model has been configured; every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranscriptBackend;

#[derive(Debug, thiserror::Error)]
#[error("transcript summarization backend is not configured")]
pub struct NotConfigured;

impl TranscriptSummarizer for NoTranscriptBackend {
    type Error = NotConfigured;

    async fn summarize_transcript(
        &self,
        _transcript: &str,
        _mode: SummaryMode<'_>,
    ) -> Result<TranscriptSummary, Self::Error> {
        Err(NotConfigured)
    }
}
