use serde::Serialize;
use serde_json::Value;

/// A classification response, tagged by its top-level shape.
///
/// The service conventionally answers with either one object or a list of
/// objects; anything that is not a JSON array is kept as a single value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    SingleObject(Value),
    ObjectList(Vec<Value>),
}

impl ResponseBody {
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::ObjectList(items),
            other => Self::SingleObject(other),
        }
    }

    /// The element the summary is read from.
    pub fn first(&self) -> Option<&Value> {
        match self {
            Self::SingleObject(value) => Some(value),
            Self::ObjectList(items) => items.first(),
        }
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Pull a display summary out of a classification response.
///
/// Looks at `summary` on the first element, then at `summary.text`. Returns
/// `None` when neither holds a usable value; never panics on odd shapes.
pub fn extract_summary(body: &ResponseBody) -> Option<String> {
    let summary = body.first()?.get("summary")?;
    usable_text(summary).or_else(|| summary.get("text").and_then(usable_text))
}

fn usable_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64().is_some_and(|n| n != 0.0) => {
            Some(number.to_string())
        }
        // Shown as a summary with no text.
        Value::Bool(true) => Some(String::new()),
        _ => None,
    }
}
