use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::catalog::QuestionCatalog;

use super::session::{QuizMode, QuizSession};
use crate::error::SessionError;
use crate::prediction_service::PredictionBackend;

/// Result of starting a quiz mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeStart {
    Started,
    /// The mode exists on the selection screen but has no behavior yet;
    /// the session was left untouched.
    Unavailable,
}

/// Result of a submission round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(String),
    /// The response arrived for a run the user has since abandoned; it was
    /// discarded and the session is unchanged.
    Stale,
}

/// Orchestrates the session transitions that need collaborators: catalog
/// lookup on quiz start and the prediction round-trip on submit.
///
/// Pure transitions (`answer`, `back`, `go_home`, ...) live on
/// [`QuizSession`] itself; the wrappers here only supply the clock.
#[derive(Clone)]
pub struct QuizFlowService {
    clock: Clock,
    catalog: Arc<QuestionCatalog>,
    backend: Arc<dyn PredictionBackend>,
}

impl QuizFlowService {
    #[must_use]
    pub fn new(
        clock: Clock,
        catalog: Arc<QuestionCatalog>,
        backend: Arc<dyn PredictionBackend>,
    ) -> Self {
        Self {
            clock,
            catalog,
            backend,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Start the chosen mode for the condition selected on the session.
    ///
    /// `Normal` resolves the condition's question set and enters the quiz.
    /// `Short` is offered but unimplemented: it logs, leaves the session
    /// where it is, and reports [`ModeStart::Unavailable`].
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoConditionSelected` when no condition was
    /// picked, and `SessionError::Catalog` when the selection is not in the
    /// catalog; in that case the session is sent back to the home screen
    /// first, since the selection cannot lead anywhere.
    pub fn start_mode(
        &self,
        session: &mut QuizSession,
        mode: QuizMode,
    ) -> Result<ModeStart, SessionError> {
        match mode {
            QuizMode::Normal => {
                let name = session
                    .selected_condition()
                    .ok_or(SessionError::NoConditionSelected)?
                    .to_owned();
                let entry = match self.catalog.lookup(&name) {
                    Ok(entry) => entry,
                    Err(err) => {
                        tracing::warn!(condition = %name, "selected condition not in catalog");
                        session.drop_selection();
                        return Err(err.into());
                    }
                };
                session.begin_quiz(
                    entry.condition().clone(),
                    entry.questions().clone(),
                    self.clock.now(),
                );
                Ok(ModeStart::Started)
            }
            QuizMode::Short => {
                tracing::info!("short mode selected; no behavior wired up yet");
                Ok(ModeStart::Unavailable)
            }
        }
    }

    /// Clock-supplying wrapper for [`QuizSession::next`].
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveQuestion` off the quiz screen.
    pub fn advance(&self, session: &mut QuizSession) -> Result<(), SessionError> {
        session.next(self.clock.now())
    }

    /// Clock-supplying wrapper for [`QuizSession::choose`].
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveQuestion` off the quiz screen.
    pub fn choose(&self, session: &mut QuizSession, option: &str) -> Result<(), SessionError> {
        session.choose(option, self.clock.now())
    }

    /// Submit the finished run to the prediction backend and apply the
    /// result.
    ///
    /// The sole asynchronous step. A failed call leaves the session on the
    /// summary screen with no prediction set, so the user can retry; a
    /// response for a run abandoned mid-flight is discarded.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotOnSummary` off the summary screen and
    /// `SessionError::Submission` when the backend call fails.
    pub async fn submit(&self, session: &mut QuizSession) -> Result<SubmitOutcome, SessionError> {
        let request = session.prediction_request()?;
        let label = match self
            .backend
            .predict(&request.disease, &request.answers)
            .await
        {
            Ok(label) => label,
            Err(err) => {
                tracing::warn!(disease = %request.disease, error = %err, "prediction submission failed");
                return Err(err.into());
            }
        };

        if session.apply_prediction(request.generation, label.clone()) {
            Ok(SubmitOutcome::Accepted(label))
        } else {
            tracing::info!(disease = %request.disease, "discarding prediction for superseded run");
            Ok(SubmitOutcome::Stale)
        }
    }
}
