use thiserror::Error;

/// Errors produced by a single call to the classification service.
///
/// Flows never propagate these; the orchestrator stores the display string
/// in the view state and moves on.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed at the transport level.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx status on an endpoint that checks it.
    #[error("HTTP {status}")]
    Http { status: u16 },

    /// The response body was not valid JSON.
    #[error("invalid JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_shows_status() {
        assert_eq!(ApiError::Http { status: 500 }.to_string(), "HTTP 500");
        assert_eq!(ApiError::Http { status: 404 }.to_string(), "HTTP 404");
    }

    #[test]
    fn parse_error_keeps_serde_message() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let message = ApiError::from(source).to_string();
        assert!(message.starts_with("invalid JSON response: "), "{message}");
    }
}
