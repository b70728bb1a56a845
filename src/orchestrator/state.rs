use serde_json::Value;

use crate::api::{extract_summary, ResponseBody};

/// Everything the main screen renders.
///
/// Each flow writes only its own slots: classify owns `result` and
/// `loading`, health owns `health` and `health_dialog_open`, model owns
/// `model` and `model_dialog_open`. `error` is shared and cleared by
/// whichever flow starts next.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub url: String,
    pub result: Option<ResponseBody>,
    pub loading: bool,
    pub error: String,
    pub health: Option<Value>,
    pub model: Option<Value>,
    pub health_dialog_open: bool,
    pub model_dialog_open: bool,
}

impl ViewState {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    pub fn summary(&self) -> Option<String> {
        self.result.as_ref().and_then(extract_summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn starts_idle() {
        let view = ViewState::new("https://example.com");
        assert_eq!(view.url, "https://example.com");
        assert!(view.result.is_none());
        assert!(!view.loading);
        assert!(!view.has_error());
        assert!(!view.health_dialog_open);
        assert!(!view.model_dialog_open);
    }

    #[test]
    fn summary_reads_result() {
        let mut view = ViewState::default();
        assert_eq!(view.summary(), None);
        view.result = Some(ResponseBody::classify(json!([{"summary": "s"}])));
        assert_eq!(view.summary(), Some("s".to_string()));
    }
}
