use super::AssessmentService;
use crate::models::{EligibilityInput, GenerationResult, RequestOutcome};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
struct MockResponse {
    delay: Option<Duration>,
    outcome: RequestOutcome,
}

/// Scripted [`AssessmentService`] for tests.
///
/// Configured outcomes are served in order and cycle once exhausted. An
/// optional per-outcome delay lets tests exercise overlapping submissions.
#[derive(Clone)]
pub struct MockAssessmentClient {
    responses: Arc<Mutex<Vec<MockResponse>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockAssessmentClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_outcome(self, outcome: RequestOutcome) -> Self {
        self.responses.lock().unwrap().push(MockResponse {
            delay: None,
            outcome,
        });
        self
    }

    pub fn with_delayed_outcome(self, delay: Duration, outcome: RequestOutcome) -> Self {
        self.responses.lock().unwrap().push(MockResponse {
            delay: Some(delay),
            outcome,
        });
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockAssessmentClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssessmentService for MockAssessmentClient {
    async fn assess(&self, input: &EligibilityInput) -> RequestOutcome {
        let response = {
            let mut count = self.call_count.lock().unwrap();
            *count += 1;

            let responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                // Default mock response derived from the input.
                MockResponse {
                    delay: None,
                    outcome: RequestOutcome::Success(GenerationResult {
                        assessment: format!(
                            "Evaluación preliminar para migrar a {}",
                            input.desired_country
                        ),
                        suggested_pathways: Vec::new(),
                    }),
                }
            } else {
                let index = (*count - 1) % responses.len();
                responses[index].clone()
            }
        };

        if let Some(delay) = response.delay {
            tokio::time::sleep(delay).await;
        }

        response.outcome
    }
}
