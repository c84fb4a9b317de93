use super::client::GeminiHttpClient;
use super::parse::parse_response;
use super::types::{assessment_schema, Content, GenerateContentRequest, GenerationConfig, Part};
use crate::ai::AssessmentService;
use crate::models::{EligibilityInput, RequestOutcome};
use crate::prompts;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

/// Build the `generateContent` request for a visitor profile.
///
/// Deterministic for a given input; the response schema is a fixed constant
/// and does not vary with the profile.
pub fn build_request(input: &EligibilityInput) -> GenerateContentRequest {
    let prompt = prompts::render(
        prompts::ELIGIBILITY_USER,
        &[
            ("nationality", input.nationality.as_str()),
            ("education", input.education.as_str()),
            ("experience", input.experience.as_str()),
            ("desiredCountry", input.desired_country.as_str()),
            ("goal", input.goal.as_str()),
        ],
    );

    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part { text: prompt }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: assessment_schema(),
        },
    }
}

/// Backoff budget for one logical assessment call.
///
/// `max_attempts` caps total transport calls, not just retries.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// Delay before the retry following attempt number `attempt` (0-based):
    /// `base_delay * 2^attempt`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.pow(attempt)
    }
}

/// Gemini-backed implementation of [`AssessmentService`].
pub struct GeminiAssessmentClient {
    http: GeminiHttpClient,
    retry: RetryPolicy,
}

impl GeminiAssessmentClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(30),
                client,
            ),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    /// Perform the assessment call, retrying only on HTTP 429.
    ///
    /// The attempt counter is local to this call and is checked against the
    /// cap before every retry, so the loop issues at most
    /// `retry.max_attempts` transport calls. Any other non-success status is
    /// terminal, as is a transport-layer failure.
    pub async fn send(&self, request: &GenerateContentRequest) -> RequestOutcome {
        let mut attempt = 0u32;

        loop {
            let response = match self.http.post_generate_content(request).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::error!("Failed to reach Gemini: {}", e);
                    return RequestOutcome::TransportError {
                        status: e.status().map(|s| s.as_u16()),
                    };
                }
            };

            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                attempt += 1;
                if attempt >= self.retry.max_attempts {
                    tracing::error!("Still rate limited after {} attempts, giving up", attempt);
                    return RequestOutcome::RateLimited {
                        status: status.as_u16(),
                    };
                }

                let delay = self.retry.delay_for(attempt - 1);
                tracing::warn!(
                    "Rate limited (429), retrying in {} ms (attempt {}/{})",
                    delay.as_millis(),
                    attempt,
                    self.retry.max_attempts
                );
                tokio::time::sleep(delay).await;
                continue;
            }

            if !status.is_success() {
                let error_text = response.text().await.unwrap_or_default();
                tracing::error!("Gemini API error (status {}): {}", status, error_text);
                return RequestOutcome::TransportError {
                    status: Some(status.as_u16()),
                };
            }

            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::error!("Failed to read Gemini response body: {}", e);
                    return RequestOutcome::TransportError {
                        status: e.status().map(|s| s.as_u16()),
                    };
                }
            };

            return match serde_json::from_str(&body) {
                Ok(envelope) => parse_response(envelope),
                Err(e) => {
                    tracing::error!("Failed to decode Gemini envelope: {}\nBody: {}", e, body);
                    RequestOutcome::ParseError
                }
            };
        }
    }
}

#[async_trait]
impl AssessmentService for GeminiAssessmentClient {
    async fn assess(&self, input: &EligibilityInput) -> RequestOutcome {
        tracing::debug!(
            "Requesting eligibility assessment for destination {}",
            input.desired_country
        );
        let request = build_request(input);
        self.send(&request).await
    }
}
