//! Submission orchestration for the eligibility form.

use crate::ai::AssessmentService;
use crate::models::EligibilityInput;
use crate::presenter::AssessmentPresenter;
use std::sync::{Arc, Mutex};

/// Drives one eligibility form: prompt build, request, parse, present.
///
/// Submissions are not guarded against overlap. Each call runs its own
/// request chain to completion and applies its outcome to the shared
/// presenter, so with concurrent submissions the last chain to complete
/// determines what stays on screen.
#[derive(Clone)]
pub struct FormController {
    service: Arc<dyn AssessmentService>,
    presenter: Arc<Mutex<AssessmentPresenter>>,
}

impl FormController {
    pub fn new(
        service: Arc<dyn AssessmentService>,
        presenter: Arc<Mutex<AssessmentPresenter>>,
    ) -> Self {
        Self { service, presenter }
    }

    pub fn presenter(&self) -> Arc<Mutex<AssessmentPresenter>> {
        self.presenter.clone()
    }

    pub async fn submit(&self, input: EligibilityInput) {
        self.presenter.lock().unwrap().begin_loading();

        let outcome = self.service.assess(&input).await;

        self.presenter.lock().unwrap().apply(&outcome);
    }
}
