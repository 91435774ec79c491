#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod prediction_service;
pub mod quiz;

pub use quiz_core::Clock;
pub use reqwest::StatusCode;

pub use app_services::AppServices;
pub use error::{SessionError, SubmissionError};
pub use prediction_service::{PredictionBackend, PredictionConfig, PredictionService};

pub use quiz::{
    InputKind, ModeStart, PredictionRequest, QuestionView, QuizFlowService, QuizMode,
    QuizProgress, QuizSession, Screen, SubmitOutcome, SummaryEntry, SummaryView,
};
