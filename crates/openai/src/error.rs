use async_openai::error::OpenAIError;

/// Failure modes of the external generator.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The service could not be reached at all.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered, but with a non-success status or an unusable
    /// payload shape.
    #[error("service error: {0}")]
    Service(String),

    /// The response arrived but does not parse as the expected structure.
    /// Retrying the parse is pointless; only a fresh call could help, and
    /// the retry policy treats this as terminal.
    #[error("unparseable response: {0}")]
    Parse(String),
}

impl GeneratorError {
    pub fn is_retryable(&self) -> bool {
        !matches!(self, GeneratorError::Parse(_))
    }
}

impl From<OpenAIError> for GeneratorError {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::Reqwest(e) => GeneratorError::Transport(e.to_string()),
            other => GeneratorError::Service(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_are_not_retryable() {
        assert!(!GeneratorError::Parse("bad json".into()).is_retryable());
        assert!(GeneratorError::Transport("down".into()).is_retryable());
        assert!(GeneratorError::Service("500".into()).is_retryable());
    }
}
