use serde::Serialize;
use std::time::Duration;

/// Configuration for the feedback engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Completion model name
    pub model: String,
    /// Base URL of the OpenAI-compatible backend (None uses the client default)
    pub base_url: Option<String>,
    /// API key (None falls back to the client's environment lookup)
    pub api_key: Option<String>,
    pub temperature: f32,
    /// Response budget for single-section feedback
    pub section_max_tokens: u32,
    /// Response budget for whole-worksheet feedback
    pub overall_max_tokens: u32,
    /// Overall deadline for a single-section call
    pub section_timeout: Duration,
    /// Overall deadline for a whole-worksheet call (larger prompt and response)
    pub overall_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            base_url: None,
            api_key: None,
            temperature: 0.0,
            section_max_tokens: 1500,
            overall_max_tokens: 2500,
            section_timeout: Duration::from_secs(60),
            overall_timeout: Duration::from_secs(90),
        }
    }
}

impl EngineConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_temperature(mut self, t: f32) -> Self {
        self.temperature = t;
        self
    }

    pub fn with_section_timeout(mut self, d: Duration) -> Self {
        self.section_timeout = d;
        self
    }

    pub fn with_overall_timeout(mut self, d: Duration) -> Self {
        self.overall_timeout = d;
        self
    }
}

/// Feedback for a single worksheet section
#[derive(Debug, Clone, Serialize)]
pub struct SectionFeedback {
    pub feedback: String,
    pub section: String,
}

/// Feedback over the whole worksheet
#[derive(Debug, Clone, Serialize)]
pub struct OverallFeedback {
    pub feedback: String,
}
