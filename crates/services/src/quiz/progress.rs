/// Aggregated view of questionnaire progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub position: usize,
    pub is_complete: bool,
}
