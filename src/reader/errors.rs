use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReaderError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("environment unsupported: {0}")]
    EnvironmentUnsupported(String),
}

impl ReaderError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    pub fn environment_unsupported(reason: impl Into<String>) -> Self {
        Self::EnvironmentUnsupported(reason.into())
    }
}
