//! Error types for this crate.
//!
//! All fallible operations return [`Result<T>`] which uses [`PipelineError`] as the error type.

use thiserror::Error;

/// A [`Result`](std::result::Result) alias using [`PipelineError`] as the error type.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// The unified error type for all crate errors.
///
/// Per-request failures (`EmptyInput`, `OutOfRangeLabel`, `Classifier`) are
/// returned from classification calls. `Startup` is only produced while loading
/// the slang dictionary, the model or the tokenizer.
///
/// # Example
///
/// ```rust
/// use comment_sentiment::error::PipelineError;
///
/// fn describe(e: &PipelineError) -> &'static str {
///     match e {
///         PipelineError::EmptyInput => "reject the request",
///         PipelineError::OutOfRangeLabel(_) => "model and label table disagree",
///         PipelineError::Classifier(_) => "inference failed",
///         PipelineError::Startup(_) => "cannot serve",
///         _ => "unknown",
///     }
/// }
///
/// assert_eq!(describe(&PipelineError::EmptyInput), "reject the request");
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PipelineError {
    /// Input text was empty or whitespace only.
    #[error("Input text is empty")]
    EmptyInput,

    /// The classifier produced a class index with no sentiment label.
    #[error("Classifier returned label index {0}, expected 0 (Negative), 1 (Neutral) or 2 (Positive)")]
    OutOfRangeLabel(u32),

    /// Failure inside the classification model. Not retried.
    #[error("{0}")]
    Classifier(String),

    /// Dictionary, model, tokenizer or device failed to load. Fatal.
    #[error("{0}")]
    Startup(String),
}

impl PipelineError {
    /// True for errors that can only happen while the service is starting up.
    pub fn is_startup(&self) -> bool {
        matches!(self, PipelineError::Startup(_))
    }
}

impl From<candle_core::Error> for PipelineError {
    fn from(value: candle_core::Error) -> Self {
        PipelineError::Classifier(value.to_string())
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(value: std::io::Error) -> Self {
        PipelineError::Startup(value.to_string())
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(value: serde_json::Error) -> Self {
        PipelineError::Startup(format!("Invalid model config: {}", value))
    }
}

impl From<csv::Error> for PipelineError {
    fn from(value: csv::Error) -> Self {
        PipelineError::Startup(format!("Invalid slang dictionary: {}", value))
    }
}
