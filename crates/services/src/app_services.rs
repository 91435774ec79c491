use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::catalog::QuestionCatalog;

use crate::prediction_service::{PredictionBackend, PredictionService};
use crate::quiz::{QuizFlowService, QuizSession};

/// Assembles the questionnaire services for an embedding application.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<QuestionCatalog>,
    quiz_flow: Arc<QuizFlowService>,
}

impl AppServices {
    /// Built-in catalog plus the env-configured prediction client.
    #[must_use]
    pub fn from_env(clock: Clock) -> Self {
        Self::with_backend(clock, Arc::new(PredictionService::from_env()))
    }

    /// Same assembly with a caller-supplied backend (tests, alternate
    /// transports).
    #[must_use]
    pub fn with_backend(clock: Clock, backend: Arc<dyn PredictionBackend>) -> Self {
        let catalog = Arc::new(QuestionCatalog::builtin());
        let quiz_flow = Arc::new(QuizFlowService::new(clock, Arc::clone(&catalog), backend));
        Self { catalog, quiz_flow }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<QuestionCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }

    /// A fresh session on the home screen.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        QuizSession::new()
    }
}
