/// Errors raised while reading structured output produced by a model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    ParseError(&'static str),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a call to the summarization model did not produce a summary.
///
/// `Display` renders only the description so the handler can embed it
/// verbatim after the `"Error: "` prefix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummarizeError {
    /// The model (or the request body) rejected the input.
    #[error("{0}")]
    InvalidInput(String),
    /// The model could not be reached or is not ready to serve.
    #[error("{0}")]
    BackendUnavailable(String),
    #[error("{0}")]
    Internal(String),
}

impl SummarizeError {
    pub fn kind(&self) -> &'static str {
        match self {
            SummarizeError::InvalidInput(_) => "invalid_input",
            SummarizeError::BackendUnavailable(_) => "backend_unavailable",
            SummarizeError::Internal(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_description() {
        let err = SummarizeError::BackendUnavailable("model overloaded".into());
        assert_eq!(err.to_string(), "model overloaded");
        assert_eq!(err.kind(), "backend_unavailable");
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err = Error::from(json_err);
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("JSON error: "));
    }
}
