use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced by tree construction, geometry registration and the frame driver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Caller-supplied input is out of range (negative depth, too small a renderer)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An operation was called in the wrong lifecycle state, or an internal
    /// consistency check failed
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),
    /// Scene configuration could not be parsed or failed validation
    #[error("config error: {0}")]
    Config(String),
}

impl From<TreeError> for JsValue {
    fn from(err: TreeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = TreeError::InvalidArgument("max_depth must be >= 0, got -1".into());
        assert_eq!(err.to_string(), "invalid argument: max_depth must be >= 0, got -1");
    }
}
