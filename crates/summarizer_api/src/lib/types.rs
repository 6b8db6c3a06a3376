use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body of `POST /summarize`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Body returned by `POST /summarize` for every outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

impl SummarizeResponse {
    pub const NO_INPUT: &'static str = "No input provided.";

    pub fn no_input() -> Self {
        Self {
            summary: Self::NO_INPUT.to_string(),
        }
    }

    pub fn error(err: impl std::fmt::Display) -> Self {
        Self {
            summary: format!("Error: {err}"),
        }
    }
}

/// Bounds and decoding mode forwarded to the summarization model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationParams {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: 100,
            min_length: 20,
            do_sample: false,
        }
    }
}

/// One generated summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCandidate {
    pub summary_text: String,
}

/// Body of `POST /summarize-transcript`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TranscriptRequest {
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub speaker: Option<String>,
}

impl TranscriptRequest {
    /// The speaker to focus on, if a non-empty one was given.
    pub fn speaker(&self) -> Option<&str> {
        self.speaker.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranscriptSummary {
    /// Bullet points for a single speaker.
    Speaker { summary: Vec<String> },
    /// Per-speaker summaries plus an overall meeting summary.
    Meeting {
        per_speaker: BTreeMap<String, String>,
        overall_summary: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_text_defaults_to_none() {
        let req: SummarizeRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.text.is_none());

        let req: SummarizeRequest = serde_json::from_value(json!({"text": null})).unwrap();
        assert!(req.text.is_none());
    }

    #[test]
    fn test_response_has_single_field() {
        let value = serde_json::to_value(SummarizeResponse::no_input()).unwrap();
        assert_eq!(value, json!({"summary": "No input provided."}));
    }

    #[test]
    fn test_generation_params_wire_format() {
        let value = serde_json::to_value(GenerationParams::default()).unwrap();
        assert_eq!(
            value,
            json!({"max_length": 100, "min_length": 20, "do_sample": false})
        );
    }

    #[test]
    fn test_empty_speaker_is_no_speaker() {
        let req: TranscriptRequest =
            serde_json::from_value(json!({"transcript": "hi", "speaker": ""})).unwrap();
        assert_eq!(req.speaker(), None);

        let req: TranscriptRequest =
            serde_json::from_value(json!({"transcript": "hi", "speaker": "User_A"})).unwrap();
        assert_eq!(req.speaker(), Some("User_A"));
    }
}
