use std::collections::BTreeMap;
use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::SubmissionError;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Seam to the external prediction service, so flows can run against a
/// test double.
#[async_trait]
pub trait PredictionBackend: Send + Sync {
    /// Resolve a label for the given backend key and answer snapshot.
    async fn predict(
        &self,
        disease: &str,
        answers: &[(String, String)],
    ) -> Result<String, SubmissionError>;
}

#[derive(Clone, Debug)]
pub struct PredictionConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl PredictionConfig {
    /// Reads `QUIZ_PREDICT_URL` and `QUIZ_PREDICT_TIMEOUT_SECS`, falling
    /// back to the development defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("QUIZ_PREDICT_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let timeout = env::var("QUIZ_PREDICT_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .map_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS), Duration::from_secs);
        Self { base_url, timeout }
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// HTTP client for the prediction service.
///
/// One `POST {base_url}/predict` per submission; the timeout is applied per
/// request and a timed-out call surfaces like any other transport failure.
#[derive(Clone)]
pub struct PredictionService {
    client: Client,
    config: PredictionConfig,
}

impl PredictionService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(PredictionConfig::from_env())
    }

    #[must_use]
    pub fn new(config: PredictionConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl PredictionBackend for PredictionService {
    async fn predict(
        &self,
        disease: &str,
        answers: &[(String, String)],
    ) -> Result<String, SubmissionError> {
        let url = format!("{}/predict", self.config.base_url.trim_end_matches('/'));
        let payload = PredictRequest {
            disease: disease.to_owned(),
            answers: answers.iter().cloned().collect(),
        };

        let response = self
            .client
            .post(url)
            .timeout(self.config.timeout)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SubmissionError::HttpStatus(response.status()));
        }

        let body: PredictResponse = response.json().await?;
        body.prediction.ok_or(SubmissionError::MissingPrediction)
    }
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    disease: String,
    answers: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    prediction: Option<String>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
