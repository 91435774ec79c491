//
// ─── ANSWER SHEET ──────────────────────────────────────────────────────────────
//

/// Session-scoped record of answers, keyed by question text.
///
/// Entries keep their first-insertion order even when re-answered, so an
/// export reflects the sequence in which the user first reached each
/// question. Values are stored verbatim; numeric answers stay strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    entries: Vec<(String, String)>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the answer for a question. Overwriting keeps
    /// the entry at its original position.
    pub fn record(&mut self, question: impl Into<String>, value: impl Into<String>) {
        let question = question.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(text, _)| *text == question) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((question, value)),
        }
    }

    #[must_use]
    pub fn get(&self, question: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(text, _)| text == question)
            .map(|(_, value)| value.as_str())
    }

    /// Snapshot of all entries in insertion order.
    #[must_use]
    pub fn export_all(&self) -> Vec<(String, String)> {
        self.entries.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(text, value)| (text.as_str(), value.as_str()))
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
