/// Hugging Face inference-API sentiment classifier
///
/// Wraps a pretrained binary text-classification model (SST-2 DistilBERT by
/// default). The model is opaque to this service: text goes in, a
/// POSITIVE/NEGATIVE label with a score comes out.
///
/// The inference API answers with a nested list of label/score pairs, one
/// inner list per input:
/// `[[{"label": "POSITIVE", "score": 0.99}, {"label": "NEGATIVE", ...}]]`
use crate::{
    error::{AppError, AppResult},
    models::{Classification, SentimentLabel},
    services::providers::SentimentClassifier,
};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

#[derive(Clone, Debug)]
pub struct HuggingFaceClassifier {
    http_client: HttpClient,
    api_token: String,
    api_url: String,
}

impl HuggingFaceClassifier {
    /// Creates the classifier, failing when no API token is configured.
    ///
    /// Called once at startup; the caller records the failure and answers
    /// every subsequent sentiment request with a classifier-unavailable
    /// error instead of retrying initialization.
    pub fn new(api_token: Option<String>, api_url: String) -> AppResult<Self> {
        let api_token = api_token.ok_or_else(|| {
            AppError::ClassifierUnavailable(
                "HF_API_TOKEN is not set; sentiment classification is disabled".to_string(),
            )
        })?;

        Ok(Self {
            http_client: HttpClient::new(),
            api_token,
            api_url,
        })
    }

    fn parse_label(label: &str) -> AppResult<SentimentLabel> {
        match label {
            "POSITIVE" => Ok(SentimentLabel::Positive),
            "NEGATIVE" => Ok(SentimentLabel::Negative),
            other => Err(AppError::Upstream(format!(
                "Classifier returned unknown label: {}",
                other
            ))),
        }
    }
}

#[async_trait::async_trait]
impl SentimentClassifier for HuggingFaceClassifier {
    async fn classify(&self, text: &str) -> AppResult<Classification> {
        let response = self
            .http_client
            .post(&self.api_url)
            .bearer_auth(&self.api_token)
            .json(&json!({ "inputs": text }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "Classifier API returned status {}: {}",
                status, body
            )));
        }

        let scores: Vec<Vec<LabelScore>> = response.json().await?;

        let best = scores
            .into_iter()
            .flatten()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or_else(|| {
                AppError::Upstream("Classifier API returned an empty score list".to_string())
            })?;

        let classification = Classification {
            label: Self::parse_label(&best.label)?,
            score: best.score,
        };

        tracing::debug!(
            label = ?classification.label,
            score = classification.score,
            "Review classified"
        );

        Ok(classification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_token_fails() {
        let err = HuggingFaceClassifier::new(None, "http://test.local".to_string()).unwrap_err();
        assert!(matches!(err, AppError::ClassifierUnavailable(_)));
    }

    #[test]
    fn test_new_with_token_succeeds() {
        let classifier =
            HuggingFaceClassifier::new(Some("hf_test".to_string()), "http://test.local".to_string());
        assert!(classifier.is_ok());
    }

    #[test]
    fn test_parse_label_positive_and_negative() {
        assert_eq!(
            HuggingFaceClassifier::parse_label("POSITIVE").unwrap(),
            SentimentLabel::Positive
        );
        assert_eq!(
            HuggingFaceClassifier::parse_label("NEGATIVE").unwrap(),
            SentimentLabel::Negative
        );
    }

    #[test]
    fn test_parse_label_unknown_is_upstream_error() {
        let err = HuggingFaceClassifier::parse_label("NEUTRAL").unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[test]
    fn test_inference_response_deserialization() {
        let json = r#"[[
            {"label": "POSITIVE", "score": 0.9987},
            {"label": "NEGATIVE", "score": 0.0013}
        ]]"#;

        let scores: Vec<Vec<LabelScore>> = serde_json::from_str(json).unwrap();
        let best = scores
            .into_iter()
            .flatten()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .unwrap();

        assert_eq!(best.label, "POSITIVE");
        assert!(best.score > 0.99);
    }
}
