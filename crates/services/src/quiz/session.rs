use chrono::{DateTime, Utc};

use quiz_core::catalog::Condition;
use quiz_core::model::{AnswerSheet, Question, QuestionSet};

use super::progress::QuizProgress;
use crate::error::SessionError;

//
// ─── SCREENS AND MODES ─────────────────────────────────────────────────────────
//

/// The screen the presentation layer should currently render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    ModeSelection,
    Quiz,
    Summary,
}

/// Quiz length variant offered on the mode-selection screen.
///
/// `Short` is a real variant of the product but has no behavior yet;
/// starting it leaves the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    Normal,
    Short,
}

//
// ─── PREDICTION REQUEST ────────────────────────────────────────────────────────
//

/// Generation-tagged snapshot of a finished questionnaire.
///
/// The tag lets a late-arriving response be matched against the session that
/// produced it; responses for an abandoned run are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    pub generation: u64,
    pub disease: String,
    pub answers: Vec<(String, String)>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory state of one interactive questionnaire run.
///
/// Owns every piece of navigation state: the visible screen, the selected
/// condition, the question cursor, recorded answers, the staged numeric
/// entry, and any received prediction. All transitions are synchronous
/// methods; the only asynchronous step (submission) happens outside and is
/// applied back through [`QuizSession::apply_prediction`].
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    screen: Screen,
    selected_condition: Option<String>,
    condition: Option<Condition>,
    questions: Option<QuestionSet>,
    current: usize,
    answers: AnswerSheet,
    staged_input: String,
    prediction: Option<String>,
    generation: u64,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// A fresh session on the home screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    //
    // ─── ACCESSORS ─────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Name chosen on the home screen, before catalog resolution.
    #[must_use]
    pub fn selected_condition(&self) -> Option<&str> {
        self.selected_condition.as_deref()
    }

    /// Condition resolved from the catalog when the quiz started.
    #[must_use]
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    #[must_use]
    pub fn question_set(&self) -> Option<&QuestionSet> {
        self.questions.as_ref()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.as_ref()?.get(self.current)
    }

    /// Previously recorded answer for the current question, if any.
    /// Revisited questions stay visible and overwritable.
    #[must_use]
    pub fn recorded_answer(&self) -> Option<&str> {
        self.answers.get(self.current_question()?.text())
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    #[must_use]
    pub fn staged_input(&self) -> &str {
        &self.staged_input
    }

    #[must_use]
    pub fn prediction(&self) -> Option<&str> {
        self.prediction.as_deref()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.questions.as_ref().map_or(0, QuestionSet::len),
            answered: self.answers.len(),
            position: self.current,
            is_complete: self.is_complete(),
        }
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────
    //

    /// Pick a condition on the home screen and move to mode selection.
    ///
    /// Starts a fresh run: recorded answers, staged input, and any earlier
    /// prediction are dropped, and the submission generation advances so
    /// in-flight responses from the previous run cannot land here.
    pub fn select_condition(&mut self, name: impl Into<String>) {
        self.screen = Screen::ModeSelection;
        self.selected_condition = Some(name.into());
        self.condition = None;
        self.questions = None;
        self.current = 0;
        self.answers.reset();
        self.staged_input.clear();
        self.prediction = None;
        self.started_at = None;
        self.completed_at = None;
        self.generation += 1;
    }

    /// Enter the quiz screen with a resolved condition and its questions.
    pub(crate) fn begin_quiz(
        &mut self,
        condition: Condition,
        questions: QuestionSet,
        started_at: DateTime<Utc>,
    ) {
        self.screen = Screen::Quiz;
        self.selected_condition = Some(condition.name().to_owned());
        self.condition = Some(condition);
        self.questions = Some(questions);
        self.current = 0;
        self.answers.reset();
        self.staged_input.clear();
        self.prediction = None;
        self.started_at = Some(started_at);
        self.completed_at = None;
        self.generation += 1;
    }

    /// Abandon an unresolvable selection and return to the home screen.
    pub(crate) fn drop_selection(&mut self) {
        self.screen = Screen::Home;
        self.selected_condition = None;
    }

    /// Record `value` against the current question without advancing.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveQuestion` off the quiz screen.
    pub fn answer_current(&mut self, value: impl Into<String>) -> Result<(), SessionError> {
        if self.screen != Screen::Quiz {
            return Err(SessionError::NoActiveQuestion);
        }
        let text = self
            .current_question()
            .ok_or(SessionError::NoActiveQuestion)?
            .text()
            .to_owned();
        self.answers.record(text, value);
        Ok(())
    }

    /// Pick a choice option: records the answer and advances in one step.
    ///
    /// `now` stamps the completion time when this was the last question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveQuestion` off the quiz screen.
    pub fn choose(
        &mut self,
        option: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        self.answer_current(option)?;
        self.advance_or_complete(now);
        Ok(())
    }

    /// Replace the staged numeric entry for the current free-form question.
    ///
    /// Input is filtered at the keystroke level: a replacement containing
    /// anything but ASCII digits is refused outright (no error is surfaced)
    /// and the previous staging is kept. Returns whether the replacement was
    /// accepted. An empty string clears the staging.
    pub fn stage_input(&mut self, text: &str) -> bool {
        if !text.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        text.clone_into(&mut self.staged_input);
        true
    }

    /// Move forward: commits a non-empty staged entry to the current
    /// question first, then steps to the next question or, from the last
    /// one, to the summary screen (stamped with `now`).
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveQuestion` off the quiz screen.
    pub fn next(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        if self.screen != Screen::Quiz {
            return Err(SessionError::NoActiveQuestion);
        }
        if !self.staged_input.is_empty() {
            let staged = self.staged_input.clone();
            self.answer_current(staged)?;
        }
        self.advance_or_complete(now);
        Ok(())
    }

    /// Step back one question. A no-op at the first question or off the
    /// quiz screen. Recorded answers are left alone.
    pub fn back(&mut self) {
        if self.screen == Screen::Quiz && self.current > 0 {
            self.current -= 1;
        }
    }

    /// Return to the home screen from anywhere.
    ///
    /// Session data is not cleared here; answers survive until the next
    /// condition selection (the home-icon escape hatch).
    pub fn go_home(&mut self) {
        self.screen = Screen::Home;
    }

    fn advance_or_complete(&mut self, now: DateTime<Utc>) {
        let Some(questions) = &self.questions else {
            return;
        };
        if self.current < questions.last_index() {
            self.current += 1;
            self.staged_input.clear();
        } else {
            self.screen = Screen::Summary;
            self.completed_at = Some(now);
        }
    }

    //
    // ─── SUBMISSION ────────────────────────────────────────────────────────
    //

    /// Snapshot the finished run for the prediction backend.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotOnSummary` unless the summary screen is
    /// showing, and `SessionError::NoConditionSelected` if no resolved
    /// condition is held (not reachable through normal navigation).
    pub fn prediction_request(&self) -> Result<PredictionRequest, SessionError> {
        if self.screen != Screen::Summary {
            return Err(SessionError::NotOnSummary);
        }
        let condition = self
            .condition
            .as_ref()
            .ok_or(SessionError::NoConditionSelected)?;
        Ok(PredictionRequest {
            generation: self.generation,
            disease: condition.backend_key().to_owned(),
            answers: self.answers.export_all(),
        })
    }

    /// Accept a prediction label for the run tagged `generation`.
    ///
    /// A label from a superseded run is discarded; returns whether it was
    /// applied.
    pub fn apply_prediction(&mut self, generation: u64, label: impl Into<String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.prediction = Some(label.into());
        true
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
