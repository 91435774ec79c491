mod answers;
mod question;

pub use answers::AnswerSheet;
pub use question::{Question, QuestionKind, QuestionSet, QuestionSetError};
