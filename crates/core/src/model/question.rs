use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// How a question is answered.
///
/// The kind is fixed when the catalog is authored: a question that ships a
/// non-empty option list is a choice question, one without options is
/// free-form and collects a bare number (age, BMI, blood pressure, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    Choice(Vec<String>),
    FreeForm,
}

/// A single immutable questionnaire entry.
///
/// The text doubles as the answer key on the wire, so it is preserved
/// verbatim from the catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "QuestionShape", into = "QuestionShape")]
pub struct Question {
    text: String,
    kind: QuestionKind,
}

impl Question {
    /// Builds a question whose kind follows the shape of `options`:
    /// a non-empty list makes a choice question, an empty one is free-form.
    #[must_use]
    pub fn new(text: impl Into<String>, options: Vec<String>) -> Self {
        let kind = if options.is_empty() {
            QuestionKind::FreeForm
        } else {
            QuestionKind::Choice(options)
        };
        Self {
            text: text.into(),
            kind,
        }
    }

    #[must_use]
    pub fn free_form(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    #[must_use]
    pub fn choice<I, S>(text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(text, options.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// The ordered option list, if this is a choice question.
    #[must_use]
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            QuestionKind::Choice(options) => Some(options),
            QuestionKind::FreeForm => None,
        }
    }

    #[must_use]
    pub fn is_free_form(&self) -> bool {
        matches!(self.kind, QuestionKind::FreeForm)
    }
}

/// Authoring/wire shape of a question: `{ text, options? }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct QuestionShape {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
}

impl From<QuestionShape> for Question {
    fn from(shape: QuestionShape) -> Self {
        Question::new(shape.text, shape.options.unwrap_or_default())
    }
}

impl From<Question> for QuestionShape {
    fn from(question: Question) -> Self {
        let options = match question.kind {
            QuestionKind::Choice(options) => Some(options),
            QuestionKind::FreeForm => None,
        };
        Self {
            text: question.text,
            options,
        }
    }
}

//
// ─── QUESTION SET ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("question set cannot be empty")]
    Empty,

    #[error("duplicate question text: {0}")]
    DuplicateText(String),
}

/// Ordered, non-empty sequence of questions for one condition.
///
/// The order is fixed and defines the navigation sequence. Texts must be
/// unique within a set because they key the recorded answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Question>", into = "Vec<Question>")]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// # Errors
    ///
    /// Returns `QuestionSetError::Empty` for an empty list and
    /// `QuestionSetError::DuplicateText` when two questions share a text.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        if questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.text()) {
                return Err(QuestionSetError::DuplicateText(question.text().to_owned()));
            }
        }

        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; construction rejects empty sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Index of the final question.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

impl TryFrom<Vec<Question>> for QuestionSet {
    type Error = QuestionSetError;

    fn try_from(questions: Vec<Question>) -> Result<Self, Self::Error> {
        Self::new(questions)
    }
}

impl From<QuestionSet> for Vec<Question> {
    fn from(set: QuestionSet) -> Self {
        set.questions
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
