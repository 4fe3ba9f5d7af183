use thiserror::Error;

/// Errors raised by the classical cipher tools.
///
/// The breakers never fail for lack of a convincing answer; they always
/// return their best candidate. Only malformed input is an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Input contains no text to analyze")]
    EmptyInput,

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Search worker stopped before reporting a result")]
    WorkerLost,
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
