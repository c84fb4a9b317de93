//! Data models and structures
//!
//! Defines the core data structures for the eligibility assessment pipeline
//! and the environment-derived runtime configuration.

use serde::{Deserialize, Serialize};

/// Visitor profile captured from the eligibility form at submit time.
///
/// All fields are free text; nothing here validates length or content.
#[derive(Debug, Clone)]
pub struct EligibilityInput {
    pub nationality: String,
    pub education: String,
    pub experience: String,
    pub desired_country: String,
    pub goal: String,
}

/// Structured assessment decoded from the model's JSON payload.
///
/// `suggested_pathways` may be empty but is never absent once parsing has
/// succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub assessment: String,
    pub suggested_pathways: Vec<String>,
}

/// Terminal outcome of one logical assessment call.
///
/// Exactly one variant is produced per completed attempt; every failure mode
/// of the pipeline is captured here rather than propagated as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    Success(GenerationResult),
    /// Well-formed envelope with no usable candidate content.
    EmptyResponse,
    /// Non-success HTTP status other than 429, or a transport-layer failure
    /// (no status at all).
    TransportError { status: Option<u16> },
    /// Still rate limited after the retry budget was spent.
    RateLimited { status: u16 },
    /// Candidate text present but not decodable as [`GenerationResult`].
    ParseError,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub eligibility_model: String,
    pub chat_webhook_url: Option<String>,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| crate::Error::Config("GEMINI_API_KEY not set".to_string()))?,
            eligibility_model: std::env::var("ELIGIBILITY_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash-preview-05-20".to_string()),
            chat_webhook_url: std::env::var("CHAT_WEBHOOK_URL").ok(),
        })
    }
}
