mod flow;
mod progress;
mod session;
mod view;

pub use flow::{ModeStart, QuizFlowService, SubmitOutcome};
pub use progress::QuizProgress;
pub use session::{PredictionRequest, QuizMode, QuizSession, Screen};
pub use view::{InputKind, QuestionView, SummaryEntry, SummaryView};
