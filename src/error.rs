use thiserror::Error;

/// Feedback pipeline error types
///
/// Variants map one-to-one onto the failure kinds surfaced to API clients;
/// see [`FeedbackError::kind`].
#[derive(Error, Debug)]
pub enum FeedbackError {
    /// Malformed or missing request fields.
    #[error("{0}")]
    InvalidArgument(String),

    /// Syntactically valid request without enough substance to process.
    #[error("{0}")]
    FailedPrecondition(String),

    /// The caller exceeded the sliding-window rate limit.
    #[error("リクエスト制限を超えました。1分後に再試行してください。")]
    RateLimited,

    /// The completion backend rejected or failed the call.
    #[error("completion API error: {0}")]
    Api(#[from] async_openai::error::OpenAIError),

    /// The completion call outlived the per-operation deadline.
    #[error("フィードバック生成がタイムアウトしました。時間をおいて再試行してください。")]
    DeadlineExceeded,

    /// The backend answered with a shape we cannot use.
    #[error("unexpected completion response: {0}")]
    UnexpectedResponse(String),
}

impl FeedbackError {
    /// Machine-readable failure kind, stable across message wording changes.
    pub fn kind(&self) -> &'static str {
        match self {
            FeedbackError::InvalidArgument(_) => "invalid-argument",
            FeedbackError::FailedPrecondition(_) => "failed-precondition",
            FeedbackError::RateLimited => "resource-exhausted",
            FeedbackError::DeadlineExceeded => "deadline-exceeded",
            FeedbackError::Api(_) | FeedbackError::UnexpectedResponse(_) => "internal",
        }
    }
}

/// Result type alias for feedback operations
pub type Result<T> = std::result::Result<T, FeedbackError>;
