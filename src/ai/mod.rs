//! AI service integration for the eligibility assessment
//!
//! Provides the service seam between the form controller and the Gemini
//! `generateContent` API, plus a mock implementation for tests.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiAssessmentClient;
pub use mock::MockAssessmentClient;

use crate::models::{EligibilityInput, RequestOutcome};
use async_trait::async_trait;

/// One-shot eligibility assessment.
///
/// Implementations never fail at the type level: every transport, rate-limit,
/// and decoding failure is folded into the returned [`RequestOutcome`].
#[async_trait]
pub trait AssessmentService: Send + Sync {
    async fn assess(&self, input: &EligibilityInput) -> RequestOutcome;
}
