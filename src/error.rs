use thiserror::Error;

/// The only way a generation request can fail. Everything past validation is
/// total over its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashtagError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
}

impl HashtagError {
    pub fn missing(field: &'static str) -> Self {
        HashtagError::MissingField { field }
    }
}
