//! # gitcoach - worksheet feedback backend
//!
//! Core pipeline for the GitHub training worksheet: sanitizes learner
//! answers, rate-limits callers, checks preconditions and forwards a
//! rendered comparison prompt to an OpenAI-compatible completion backend.

pub mod error;
pub mod gate;
pub mod prompts;
pub mod rate_limit;
pub mod sanitize;
pub mod types;
pub mod worksheet;

mod engine;

// Re-exports
pub use engine::{Engine, ANONYMOUS_IDENTITY};
pub use error::{FeedbackError, Result};
pub use sanitize::{sanitize_answers, AnswerSet, MAX_ANSWER_CHARS};
pub use types::{EngineConfig, OverallFeedback, SectionFeedback};
