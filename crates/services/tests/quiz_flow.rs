use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quiz_core::catalog::CatalogError;
use quiz_core::model::QuestionKind;
use quiz_core::time::fixed_clock;
use services::{
    AppServices, ModeStart, PredictionBackend, QuizFlowService, QuizMode, QuizSession, Screen,
    SessionError, StatusCode, SubmissionError, SubmitOutcome,
};

/// Backend double that records every request and answers with a fixed label.
struct RecordingBackend {
    label: String,
    requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl RecordingBackend {
    fn positive() -> Self {
        Self {
            label: "Positive".to_owned(),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PredictionBackend for RecordingBackend {
    async fn predict(
        &self,
        disease: &str,
        answers: &[(String, String)],
    ) -> Result<String, SubmissionError> {
        self.requests
            .lock()
            .unwrap()
            .push((disease.to_owned(), answers.to_vec()));
        Ok(self.label.clone())
    }
}

/// Backend double that fails a number of times before succeeding.
struct FlakyBackend {
    failures_left: Mutex<u32>,
}

#[async_trait]
impl PredictionBackend for FlakyBackend {
    async fn predict(
        &self,
        _disease: &str,
        _answers: &[(String, String)],
    ) -> Result<String, SubmissionError> {
        let mut left = self.failures_left.lock().unwrap();
        if *left > 0 {
            *left -= 1;
            return Err(SubmissionError::HttpStatus(
                StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
        Ok("Positive".to_owned())
    }
}

/// Walk the whole quiz: first option for choices, staged digits for
/// free-form entries.
fn answer_everything(flow: &QuizFlowService, session: &mut QuizSession) {
    while session.screen() == Screen::Quiz {
        let question = session.current_question().unwrap().clone();
        match question.kind() {
            QuestionKind::Choice(options) => {
                let option = options[0].clone();
                flow.choose(session, &option).unwrap();
            }
            QuestionKind::FreeForm => {
                assert!(session.stage_input("120"));
                flow.advance(session).unwrap();
            }
        }
    }
}

#[tokio::test]
async fn heart_disease_run_submits_and_surfaces_prediction() {
    let backend = Arc::new(RecordingBackend::positive());
    let app = AppServices::with_backend(fixed_clock(), backend.clone());
    let flow = app.quiz_flow();
    let mut session = app.new_session();

    session.select_condition("Heart Disease");
    let started = flow.start_mode(&mut session, QuizMode::Normal).unwrap();
    assert_eq!(started, ModeStart::Started);
    assert_eq!(session.screen(), Screen::Quiz);
    assert_eq!(session.current_index(), 0);
    assert!(session.answers().is_empty());

    answer_everything(&flow, &mut session);
    assert_eq!(session.screen(), Screen::Summary);
    assert_eq!(session.progress().answered, 13);

    let outcome = flow.submit(&mut session).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Accepted("Positive".to_owned()));
    assert_eq!(session.prediction(), Some("Positive"));

    let requests = backend.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (disease, answers) = &requests[0];
    assert_eq!(disease, "Heart_Disease");
    assert_eq!(answers.len(), 13);
    assert_eq!(answers[0], ("What is your age?".to_owned(), "120".to_owned()));
}

#[test]
fn every_condition_starts_with_a_clean_quiz() {
    let app = AppServices::with_backend(fixed_clock(), Arc::new(RecordingBackend::positive()));
    let flow = app.quiz_flow();
    let names: Vec<String> = app
        .catalog()
        .conditions()
        .map(|condition| condition.name().to_owned())
        .collect();
    assert_eq!(names.len(), 4);

    for name in names {
        let mut session = app.new_session();
        session.select_condition(&name);
        assert_eq!(session.screen(), Screen::ModeSelection);

        flow.start_mode(&mut session, QuizMode::Normal).unwrap();
        assert_eq!(session.screen(), Screen::Quiz);
        assert_eq!(session.current_index(), 0);
        assert!(session.answers().is_empty());
        assert!(session.prediction().is_none());
    }
}

#[tokio::test]
async fn failed_submission_is_retryable_from_the_summary() {
    let app = AppServices::with_backend(
        fixed_clock(),
        Arc::new(FlakyBackend {
            failures_left: Mutex::new(1),
        }),
    );
    let flow = app.quiz_flow();
    let mut session = app.new_session();

    session.select_condition("Lung Cancer");
    flow.start_mode(&mut session, QuizMode::Normal).unwrap();
    answer_everything(&flow, &mut session);

    let err = flow.submit(&mut session).await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::Submission(SubmissionError::HttpStatus(status))
            if status == StatusCode::INTERNAL_SERVER_ERROR
    ));
    assert_eq!(session.screen(), Screen::Summary);
    assert!(session.prediction().is_none());

    let outcome = flow.submit(&mut session).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Accepted("Positive".to_owned()));
    assert_eq!(session.prediction(), Some("Positive"));
}

#[tokio::test]
async fn re_answering_keeps_only_the_latest_value() {
    let backend = Arc::new(RecordingBackend::positive());
    let app = AppServices::with_backend(fixed_clock(), backend.clone());
    let flow = app.quiz_flow();
    let mut session = app.new_session();

    session.select_condition("Heart Disease");
    flow.start_mode(&mut session, QuizMode::Normal).unwrap();

    assert!(session.stage_input("52"));
    flow.advance(&mut session).unwrap();
    session.back();
    assert!(session.stage_input("53"));
    flow.advance(&mut session).unwrap();

    answer_everything(&flow, &mut session);
    flow.submit(&mut session).await.unwrap();

    let requests = backend.requests.lock().unwrap();
    let (_, answers) = &requests[0];
    assert_eq!(answers.len(), 13);
    let age = answers
        .iter()
        .find(|(question, _)| question == "What is your age?")
        .unwrap();
    assert_eq!(age.1, "53");
}

#[test]
fn short_mode_leaves_the_session_untouched() {
    let app = AppServices::with_backend(fixed_clock(), Arc::new(RecordingBackend::positive()));
    let flow = app.quiz_flow();
    let mut session = app.new_session();

    session.select_condition("Diabetes");
    let started = flow.start_mode(&mut session, QuizMode::Short).unwrap();
    assert_eq!(started, ModeStart::Unavailable);
    assert_eq!(session.screen(), Screen::ModeSelection);

    // Normal still works afterwards
    let started = flow.start_mode(&mut session, QuizMode::Normal).unwrap();
    assert_eq!(started, ModeStart::Started);
    assert_eq!(session.screen(), Screen::Quiz);
}

#[test]
fn unknown_condition_abandons_the_flow_to_home() {
    let app = AppServices::with_backend(fixed_clock(), Arc::new(RecordingBackend::positive()));
    let flow = app.quiz_flow();
    let mut session = app.new_session();

    session.select_condition("Migraine");
    let err = flow.start_mode(&mut session, QuizMode::Normal).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Catalog(CatalogError::UnknownCondition(name)) if name == "Migraine"
    ));
    assert_eq!(session.screen(), Screen::Home);
    assert!(session.selected_condition().is_none());
}
