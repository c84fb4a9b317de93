//! Extraction and validation of the structured assessment payload.

use super::types::GenerateContentResponse;
use crate::models::{GenerationResult, RequestOutcome};

/// Decode the first candidate's first text part as a [`GenerationResult`].
///
/// Malformed input never escapes as a fault: a missing candidate or part is
/// an `EmptyResponse`, and any decode failure is a `ParseError`. Fields of a
/// successful decode are carried verbatim, pathway order included.
pub fn parse_response(response: GenerateContentResponse) -> RequestOutcome {
    let text = match response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.parts.first())
    {
        Some(part) => &part.text,
        None => {
            tracing::error!("Unexpected response structure from Gemini: no candidate content");
            return RequestOutcome::EmptyResponse;
        }
    };

    match serde_json::from_str::<GenerationResult>(text) {
        Ok(result) => RequestOutcome::Success(result),
        Err(e) => {
            tracing::error!("Failed to parse assessment payload: {}", e);
            RequestOutcome::ParseError
        }
    }
}
