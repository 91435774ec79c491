use serde::Serialize;
use thiserror::Error;

use crate::model::{Question, QuestionSet};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("unknown condition: {0}")]
    UnknownCondition(String),
}

//
// ─── CONDITION ─────────────────────────────────────────────────────────────────
//

/// A selectable medical topic, pairing its display name with the canonical
/// key the prediction backend expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    name: String,
    backend_key: String,
}

impl Condition {
    #[must_use]
    pub fn new(name: impl Into<String>, backend_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            backend_key: backend_key.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn backend_key(&self) -> &str {
        &self.backend_key
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// One condition together with its ordered question set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    condition: Condition,
    questions: QuestionSet,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(condition: Condition, questions: QuestionSet) -> Self {
        Self {
            condition,
            questions,
        }
    }

    #[must_use]
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }
}

/// Static, read-only mapping from condition name to its question set.
///
/// Lookup is the only operation; the content is fixed data supplied at
/// build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    entries: Vec<CatalogEntry>,
}

impl QuestionCatalog {
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// # Errors
    ///
    /// Returns `CatalogError::UnknownCondition` if no entry carries `name`.
    pub fn lookup(&self, name: &str) -> Result<&CatalogEntry, CatalogError> {
        self.entries
            .iter()
            .find(|entry| entry.condition.name() == name)
            .ok_or_else(|| CatalogError::UnknownCondition(name.to_owned()))
    }

    /// Conditions in authoring order; drives the home screen listing.
    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        self.entries.iter().map(CatalogEntry::condition)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The production catalog: four conditions with their full question
    /// sets. Question texts are answer keys on the wire and are preserved
    /// verbatim, spelling and all.
    ///
    /// # Panics
    ///
    /// Panics if the built-in data violates set invariants (non-empty,
    /// unique texts), which is a programming error.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            entry("Lung Cancer", "lung_cancer", lung_cancer_questions()),
            entry("Diabetes", "diabetes", diabetes_questions()),
            entry("Thyroid Cancer", "thyroid_cancer", thyroid_cancer_questions()),
            entry("Heart Disease", "Heart_Disease", heart_disease_questions()),
        ])
    }
}

fn entry(name: &str, backend_key: &str, questions: Vec<Question>) -> CatalogEntry {
    let questions = QuestionSet::new(questions).expect("built-in question set should be valid");
    CatalogEntry::new(Condition::new(name, backend_key), questions)
}

fn yes_no(text: &str) -> Question {
    Question::choice(text, ["Yes", "No"])
}

fn lung_cancer_questions() -> Vec<Question> {
    vec![
        Question::choice("What is your gender?", ["Male", "Female"]),
        Question::free_form("How old are you?"),
        yes_no("Have you smoked over 100 cigarettes?"),
        yes_no("Do you have yellowish fingers?"),
        yes_no("Do you have anxiety?"),
        yes_no("Do you have peer pressure?"),
        yes_no("Do you have Chronic Diseases?"),
        yes_no("Are you constantly fatigued?"),
        yes_no("Do you have allergies?"),
        yes_no("Do you constantly wheeze?"),
        yes_no("Do you drink alcohol?"),
        yes_no("Do you constantly cough?"),
        yes_no("Do you have shortness of breath?"),
        yes_no("Do you have difficulty swallowing?"),
        yes_no("Do you have chest pain?"),
    ]
}

fn thyroid_cancer_questions() -> Vec<Question> {
    vec![
        Question::free_form("How old are you?"),
        Question::choice("What is your gender?", ["Male", "Female"]),
        yes_no("Do you currently smoke?"),
        yes_no("Have you ever smoked?"),
        yes_no("Have you received radiotherpy treatment?"),
        Question::choice(
            "What are the results of your physical examination?",
            [
                "Single nodular goiter-left",
                "Single nodular goiter-right",
                "Multinodular goiter",
                "Diffuse goiter",
                "Normal",
            ],
        ),
        Question::choice(
            "Do you have enlarged lymph nodes in your neck?",
            ["No", "Right", "Extensive", "Left", "Bilateral", "Posterior"],
        ),
        Question::choice(
            "What is the pathology results of your thyroid biopsy?",
            ["Micropapillary ", "Papillary", "Follicular", "Hurthle cell"],
        ),
        Question::choice(
            "Is your thyroid cancer unifocal or multifocal?",
            ["Uni-Focal", "Multi-Focal"],
        ),
        Question::choice(
            "What is your tumor classification?",
            ["T1a", "T1b", "T2", "T3a", "T4a", "T4b"],
        ),
        Question::choice(
            "What is your lymph node classification based on cancer staging?",
            ["N0", "N1a", "N1b"],
        ),
        yes_no("Has your cancer spread to distant organs?"),
        Question::choice("What is your stage of cancer?", ["I", "II", "III", "IVA", "IVB"]),
        Question::choice(
            "How did your cancer respond to treatment?",
            ["Indeterminate", "Excellent", "Structural", "Biochemical Incomplete"],
        ),
    ]
}

fn heart_disease_questions() -> Vec<Question> {
    vec![
        Question::free_form("What is your age?"),
        Question::choice("What is your gender?", ["Male", "Female"]),
        Question::choice(
            "What type of chestpain do you experience?",
            ["Typical Angina", "Atypical Angina", "Non-Anginal Pain", "Asymptomatic"],
        ),
        Question::free_form("What is your resting blood pressure (mmHg)?"),
        Question::free_form("What is your cholesterol level (mg/dL)?"),
        yes_no("Is you fasting blood sugar more than 120 mg/dL?"),
        Question::choice(
            "What are your resting electrocardiographic results?",
            ["Normal", "ST-T wave abnormality", "Left ventricular hypertrophy"],
        ),
        Question::free_form("What is your maximum heart rate?"),
        yes_no("Do you experience exercise induced angina?"),
        Question::free_form("What is your ST depression induced by exercise relative to rest?"),
        Question::choice(
            "What is the slope of your peak exercise segment?",
            ["Upsloping", "Flat", "Downsloping"],
        ),
        Question::choice(
            "What is the number of major vessels colored by flourosopy?",
            ["0", "1", "2", "3"],
        ),
        Question::choice(
            "What is the thalassemia type?",
            ["Normal", "Fixed Defect", "Reversible Defect"],
        ),
    ]
}

fn diabetes_questions() -> Vec<Question> {
    vec![
        yes_no("Do you have high Blood Pressure?"),
        yes_no("Do you have high Cholesterol?"),
        yes_no("Have you had a Cholesterol Check in the past 5 years?"),
        Question::free_form("What is your BMI?"),
        yes_no("Have you smoked over 100 cigaretes?"),
        yes_no("Have you had a stroke?"),
        yes_no("Do you have a Coronary Heart Disease or Myocardial Infarction?"),
        yes_no("Do you exercise frequently?"),
        yes_no("Do you eat a daily serving of fruits?"),
        yes_no("Do you eat a daily serving of vegetables?"),
        yes_no("Do you drink heavy alcohol?"),
        yes_no("Do you have any kind of healthcare coverage?"),
        yes_no(
            "Was there a time in the past year when you needed to see a doctor but did not because of its cost?",
        ),
        Question::choice(
            "How would you rank your general health (1 is the best, 5 is the worst)",
            ["1", "2", "3", "4", "5"],
        ),
        Question::free_form("How many days for the past 30 days was your mental health not good"),
        Question::free_form("How many days for the past 30 days was your physical health not good"),
        yes_no("Do you have serious difficulty walking or climbing stairs?"),
        Question::choice("What is you gender?", ["Male", "Female"]),
        Question::free_form("What is your age?"),
        Question::free_form(
            "Rank your education: \n1 = Never attended school/only kindergarten \n2 = Grades 1-8\n3 = Grades 9-11\n4 = Grade 12 or GED\n5 = College 1-3 years \n6 = College 4 years+",
        ),
        Question::choice(
            "Rank your income: \n1 = less than $10k \n5 = less than 35k \n8 = more than 75k",
            ["1", "5", "8"],
        ),
    ]
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
