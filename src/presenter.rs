//! Presentation state machine for the eligibility form.
//!
//! The presenter owns the [`UiPhase`] and pushes every visual effect through
//! an [`AssessmentView`] collaborator, so the page wiring stays out of the
//! pipeline and tests can record effects instead of rendering them.

use crate::models::RequestOutcome;

/// Shown when the envelope carried no usable assessment.
pub const EMPTY_RESPONSE_MESSAGE: &str =
    "No se pudo obtener una evaluación. Por favor, intente de nuevo.";

/// Shown on transport failures and exhausted rate-limit retries.
pub const TRANSPORT_ERROR_MESSAGE: &str =
    "Ocurrió un error al procesar su solicitud. Por favor, intente de nuevo más tarde.";

/// Shown when the payload did not match the expected structure.
pub const UNEXPECTED_STRUCTURE_MESSAGE: &str =
    "La respuesta del servicio tuvo una estructura inesperada. Por favor, intente de nuevo.";

/// Presentation lifecycle of one form instance.
///
/// `Idle` is only ever the initial phase; after the first submission the
/// machine moves between `Loading` and the two result phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiPhase {
    Idle,
    Loading,
    ResultShown,
    ResultFailed,
}

/// Rendering surface the presenter writes through.
///
/// Mirrors the page contract: a loading-indicator toggle, a results-panel
/// toggle with an error flavor, an assessment-text sink, and a pathways-list
/// sink that replaces its contents wholesale.
pub trait AssessmentView: Send {
    fn set_loading_visible(&mut self, visible: bool);
    fn set_results_visible(&mut self, visible: bool);
    fn set_error_flavor(&mut self, error: bool);
    fn set_assessment_text(&mut self, text: &str);
    fn replace_pathways(&mut self, pathways: &[String]);
}

pub struct AssessmentPresenter {
    view: Box<dyn AssessmentView>,
    phase: UiPhase,
}

impl AssessmentPresenter {
    pub fn new(view: Box<dyn AssessmentView>) -> Self {
        Self {
            view,
            phase: UiPhase::Idle,
        }
    }

    pub fn phase(&self) -> UiPhase {
        self.phase
    }

    /// Enter `Loading`: indicator on, any prior result hidden.
    pub fn begin_loading(&mut self) {
        self.phase = UiPhase::Loading;
        self.view.set_loading_visible(true);
        self.view.set_results_visible(false);
    }

    /// Apply a terminal outcome unconditionally.
    ///
    /// With overlapping submissions the outcome that completes last wins,
    /// regardless of submission order. Every path leaves the loading
    /// indicator hidden and the results panel revealed.
    pub fn apply(&mut self, outcome: &RequestOutcome) {
        match outcome {
            RequestOutcome::Success(result) => {
                self.phase = UiPhase::ResultShown;
                self.view.set_assessment_text(&result.assessment);
                self.view.replace_pathways(&result.suggested_pathways);
                self.view.set_error_flavor(false);
            }
            RequestOutcome::EmptyResponse => self.fail(EMPTY_RESPONSE_MESSAGE),
            RequestOutcome::TransportError { .. } | RequestOutcome::RateLimited { .. } => {
                self.fail(TRANSPORT_ERROR_MESSAGE)
            }
            RequestOutcome::ParseError => self.fail(UNEXPECTED_STRUCTURE_MESSAGE),
        }

        self.view.set_loading_visible(false);
        self.view.set_results_visible(true);
    }

    fn fail(&mut self, message: &str) {
        self.phase = UiPhase::ResultFailed;
        self.view.set_assessment_text(message);
        self.view.replace_pathways(&[]);
        self.view.set_error_flavor(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenerationResult;
    use std::sync::{Arc, Mutex};

    /// Records the last value written through each view channel.
    #[derive(Default)]
    pub struct ViewState {
        pub loading_visible: bool,
        pub results_visible: bool,
        pub error_flavor: bool,
        pub assessment_text: String,
        pub pathways: Vec<String>,
        pub pathway_writes: usize,
    }

    pub struct RecordingView {
        pub state: Arc<Mutex<ViewState>>,
    }

    impl RecordingView {
        pub fn new() -> (Self, Arc<Mutex<ViewState>>) {
            let state = Arc::new(Mutex::new(ViewState::default()));
            (
                Self {
                    state: state.clone(),
                },
                state,
            )
        }
    }

    impl AssessmentView for RecordingView {
        fn set_loading_visible(&mut self, visible: bool) {
            self.state.lock().unwrap().loading_visible = visible;
        }

        fn set_results_visible(&mut self, visible: bool) {
            self.state.lock().unwrap().results_visible = visible;
        }

        fn set_error_flavor(&mut self, error: bool) {
            self.state.lock().unwrap().error_flavor = error;
        }

        fn set_assessment_text(&mut self, text: &str) {
            self.state.lock().unwrap().assessment_text = text.to_string();
        }

        fn replace_pathways(&mut self, pathways: &[String]) {
            let mut state = self.state.lock().unwrap();
            state.pathways = pathways.to_vec();
            state.pathway_writes += 1;
        }
    }

    fn success_outcome() -> RequestOutcome {
        RequestOutcome::Success(GenerationResult {
            assessment: "Eligible for skilled-worker pathways".to_string(),
            suggested_pathways: vec!["Express Entry".to_string(), "Provincial Nominee".to_string()],
        })
    }

    #[test]
    fn test_initial_phase_is_idle() {
        let (view, _) = RecordingView::new();
        let presenter = AssessmentPresenter::new(Box::new(view));
        assert_eq!(presenter.phase(), UiPhase::Idle);
    }

    #[test]
    fn test_loading_shows_indicator_and_hides_results() {
        let (view, state) = RecordingView::new();
        let mut presenter = AssessmentPresenter::new(Box::new(view));

        presenter.begin_loading();

        assert_eq!(presenter.phase(), UiPhase::Loading);
        let state = state.lock().unwrap();
        assert!(state.loading_visible);
        assert!(!state.results_visible);
    }

    #[test]
    fn test_success_renders_verbatim_and_in_order() {
        let (view, state) = RecordingView::new();
        let mut presenter = AssessmentPresenter::new(Box::new(view));

        presenter.begin_loading();
        presenter.apply(&success_outcome());

        assert_eq!(presenter.phase(), UiPhase::ResultShown);
        let state = state.lock().unwrap();
        assert_eq!(state.assessment_text, "Eligible for skilled-worker pathways");
        assert_eq!(state.pathways, vec!["Express Entry", "Provincial Nominee"]);
        assert!(!state.loading_visible);
        assert!(state.results_visible);
        assert!(!state.error_flavor);
    }

    #[test]
    fn test_pathways_are_replaced_not_appended() {
        let (view, state) = RecordingView::new();
        let mut presenter = AssessmentPresenter::new(Box::new(view));

        presenter.apply(&success_outcome());
        presenter.apply(&RequestOutcome::Success(GenerationResult {
            assessment: "Updated".to_string(),
            suggested_pathways: vec!["Study Permit".to_string()],
        }));

        let state = state.lock().unwrap();
        assert_eq!(state.pathways, vec!["Study Permit"]);
        assert_eq!(state.pathway_writes, 2);
    }

    #[test]
    fn test_failure_messages_per_outcome() {
        let cases = [
            (RequestOutcome::EmptyResponse, EMPTY_RESPONSE_MESSAGE),
            (
                RequestOutcome::TransportError { status: Some(500) },
                TRANSPORT_ERROR_MESSAGE,
            ),
            (
                RequestOutcome::RateLimited { status: 429 },
                TRANSPORT_ERROR_MESSAGE,
            ),
            (RequestOutcome::ParseError, UNEXPECTED_STRUCTURE_MESSAGE),
        ];

        for (outcome, message) in cases {
            let (view, state) = RecordingView::new();
            let mut presenter = AssessmentPresenter::new(Box::new(view));

            presenter.begin_loading();
            presenter.apply(&outcome);

            assert_eq!(presenter.phase(), UiPhase::ResultFailed);
            let state = state.lock().unwrap();
            assert_eq!(state.assessment_text, message);
            assert!(state.pathways.is_empty());
            assert!(state.error_flavor);
            // Failure still restores a non-loading view.
            assert!(!state.loading_visible);
            assert!(state.results_visible);
        }
    }

    #[test]
    fn test_resubmission_goes_back_to_loading_not_idle() {
        let (view, _) = RecordingView::new();
        let mut presenter = AssessmentPresenter::new(Box::new(view));

        presenter.begin_loading();
        presenter.apply(&RequestOutcome::ParseError);
        assert_eq!(presenter.phase(), UiPhase::ResultFailed);

        presenter.begin_loading();
        assert_eq!(presenter.phase(), UiPhase::Loading);
    }
}
