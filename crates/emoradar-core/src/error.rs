use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("invalid score type for '{field}': expected number, found {found}")]
    InvalidScoreType { field: String, found: &'static str },
    #[error("reading is not a JSON object (found {found})")]
    NotAnObject { found: &'static str },
    #[error("malformed reading: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unknown {kind} label: {label}")]
    UnknownLabel { kind: &'static str, label: String },
}

pub type Result<T> = std::result::Result<T, ScoreError>;

/// Human-readable JSON type name for error messages.
pub(crate) fn value_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
