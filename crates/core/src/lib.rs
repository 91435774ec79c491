#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod time;

pub use catalog::{CatalogEntry, CatalogError, Condition, QuestionCatalog};
pub use model::{AnswerSheet, Question, QuestionKind, QuestionSet, QuestionSetError};
pub use time::Clock;
