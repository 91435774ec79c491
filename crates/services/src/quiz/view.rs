use quiz_core::model::QuestionKind;

use super::session::{QuizSession, Screen};

/// Input widget a question calls for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// Digit-only text entry.
    Digits,
    /// One button per option, in catalog order.
    Choices(Vec<String>),
}

/// What the quiz screen renders for the current question.
///
/// Carries data only, no formatting: the UI decides how "3/13", buttons,
/// and the staged entry are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// 1-based position, for the "n/total" header.
    pub number: usize,
    pub total: usize,
    pub text: String,
    pub input: InputKind,
    /// Digits typed but not yet committed.
    pub staged_input: String,
    /// Answer recorded on an earlier visit, if the user navigated back.
    pub recorded: Option<String>,
}

impl QuestionView {
    /// Builds the view when a question is showing; `None` off the quiz
    /// screen.
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Option<Self> {
        if session.screen() != Screen::Quiz {
            return None;
        }
        let question = session.current_question()?;
        let input = match question.kind() {
            QuestionKind::Choice(options) => InputKind::Choices(options.clone()),
            QuestionKind::FreeForm => InputKind::Digits,
        };
        Some(Self {
            number: session.current_index() + 1,
            total: session.question_set().map_or(0, |set| set.len()),
            text: question.text().to_owned(),
            input,
            staged_input: session.staged_input().to_owned(),
            recorded: session.recorded_answer().map(str::to_owned),
        })
    }
}

/// One answered question on the summary screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub question: String,
    pub answer: String,
}

/// What the summary screen renders: the run's answers in the order they
/// were first given, plus the prediction once one arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub condition: String,
    pub entries: Vec<SummaryEntry>,
    pub prediction: Option<String>,
}

impl SummaryView {
    /// Builds the view on the summary screen; `None` elsewhere.
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Option<Self> {
        if session.screen() != Screen::Summary {
            return None;
        }
        let condition = session.condition()?.name().to_owned();
        let entries = session
            .answers()
            .iter()
            .map(|(question, answer)| SummaryEntry {
                question: question.to_owned(),
                answer: answer.to_owned(),
            })
            .collect();
        Some(Self {
            condition,
            entries,
            prediction: session.prediction().map(str::to_owned),
        })
    }
}
