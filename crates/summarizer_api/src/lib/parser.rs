//! # Model Output Parser
//!
//! Chat models asked for JSON tend to wrap it in markdown code fences, and
//! sometimes ignore the requested shape altogether. This module strips the
//! fences and reads the transcript summary, falling back to the raw text when
//! the output is not the JSON we asked for.

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde::{de::DeserializeOwned, Deserialize};

use crate::{error::Error, llm::transcript::SummaryMode, TranscriptSummary};

static CODE_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```json|```").unwrap());

/// Removes every markdown code fence marker and trims the result.
pub fn strip_code_fences(raw: &str) -> String {
    CODE_FENCE_RE.replace_all(raw, "").trim().to_string()
}

/// Deserializes fenced or bare JSON emitted by a model.
pub fn parse_model_json<T>(raw: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let cleaned = strip_code_fences(raw);
    if cleaned.is_empty() {
        return Err(Error::ParseError("Model output is empty"));
    }

    Ok(serde_json::from_str(&cleaned)?)
}

#[derive(Deserialize)]
struct SpeakerPayload {
    summary: Vec<String>,
}

#[derive(Deserialize)]
struct MeetingPayload {
    per_speaker: BTreeMap<String, String>,
    overall_summary: String,
}

/// Reads a transcript summary from model output.
///
/// # Returns
/// * The parsed summary when the output matches the shape for `mode`.
/// * Otherwise the cleaned text as the whole summary: a single bullet in
///   speaker mode, the overall summary (with no per-speaker entries) in
///   meeting mode.
#[tracing::instrument(skip(raw))]
pub fn parse_transcript_summary(raw: &str, mode: SummaryMode<'_>) -> TranscriptSummary {
    let parsed = match mode {
        SummaryMode::Speaker(_) => parse_model_json::<SpeakerPayload>(raw)
            .map(|p| TranscriptSummary::Speaker { summary: p.summary }),
        SummaryMode::Meeting => {
            parse_model_json::<MeetingPayload>(raw).map(|p| TranscriptSummary::Meeting {
                per_speaker: p.per_speaker,
                overall_summary: p.overall_summary,
            })
        }
    };

    parsed.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Model output is not the requested JSON, using it verbatim");
        let text = strip_code_fences(raw);
        match mode {
            SummaryMode::Speaker(_) => TranscriptSummary::Speaker {
                summary: vec![text],
            },
            SummaryMode::Meeting => TranscriptSummary::Meeting {
                per_speaker: BTreeMap::new(),
                overall_summary: text,
            },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_strips_json_fences() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_strips_bare_fences_and_whitespace() {
        assert_eq!(strip_code_fences("  ```\nhello\n```  "), "hello");
        assert_eq!(strip_code_fences("no fences"), "no fences");
    }

    #[test]
    fn test_parse_model_json() {
        let value = parse_model_json::<Value>("```json {\"key\": \"value\"} ```").unwrap();
        assert_eq!(value, json!({"key": "value"}));
    }

    #[test]
    fn test_parse_model_json_empty() {
        let result = parse_model_json::<Value>("```json\n```");
        assert!(matches!(result, Err(Error::ParseError(_))));
    }

    #[test]
    fn test_parse_model_json_invalid() {
        let result = parse_model_json::<Value>("{invalid: json}");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_speaker_summary_parses() {
        let raw = r#"{"summary": ["point 1", "action item 1"]}"#;
        assert_eq!(
            parse_transcript_summary(raw, SummaryMode::Speaker("User_A")),
            TranscriptSummary::Speaker {
                summary: vec!["point 1".into(), "action item 1".into()]
            }
        );
    }

    #[test]
    fn test_meeting_summary_parses() {
        let raw = r#"```json
        {
            "per_speaker": {"User_A": "Proposed a date", "User_B": "Agreed"},
            "overall_summary": "Launch date fixed"
        }
        ```"#;

        let TranscriptSummary::Meeting {
            per_speaker,
            overall_summary,
        } = parse_transcript_summary(raw, SummaryMode::Meeting)
        else {
            panic!("expected a meeting summary");
        };

        assert_eq!(overall_summary, "Launch date fixed");
        assert_eq!(per_speaker.len(), 2);
        assert_eq!(per_speaker["User_B"], "Agreed");
    }

    #[test]
    fn test_speaker_fallback_wraps_text() {
        assert_eq!(
            parse_transcript_summary("Just some prose.", SummaryMode::Speaker("User_A")),
            TranscriptSummary::Speaker {
                summary: vec!["Just some prose.".into()]
            }
        );
    }

    #[test]
    fn test_wrong_shape_falls_back() {
        // valid JSON, but the meeting shape was requested
        let raw = r#"{"summary": ["point"]}"#;
        assert_eq!(
            parse_transcript_summary(raw, SummaryMode::Meeting),
            TranscriptSummary::Meeting {
                per_speaker: BTreeMap::new(),
                overall_summary: raw.to_string()
            }
        );
    }

    #[test]
    fn test_empty_output_falls_back_to_empty_text() {
        assert_eq!(
            parse_transcript_summary("", SummaryMode::Meeting),
            TranscriptSummary::Meeting {
                per_speaker: BTreeMap::new(),
                overall_summary: String::new()
            }
        );
    }
}
