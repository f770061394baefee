use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    classification::{entities::FoodLabel, ports::FoodClassifier},
    common::entities::app_errors::CoreError,
};

/// Number of candidates requested from the serving sidecar per image.
const TOP_K: u32 = 10;

/// REST client for the model-serving sidecar that owns the classifier
/// weights. The sidecar loads the model once at startup; this client only
/// submits images and reads back ranked candidates.
#[derive(Debug, Clone)]
pub struct ServingClassifierClient {
    endpoint: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    model: &'a str,
    image: String,
    top_k: u32,
}

#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    candidates: Vec<CandidateResponse>,
}

#[derive(Debug, Deserialize)]
struct CandidateResponse {
    label: String,
    confidence: f64,
}

impl ServingClassifierClient {
    pub fn new(endpoint: String, model_name: String) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model_name,
            client: Client::new(),
        }
    }
}

impl FoodClassifier for ServingClassifierClient {
    async fn classify(&self, image_data: Vec<u8>) -> Result<Vec<FoodLabel>, CoreError> {
        let url = format!("{}/v1/classify", self.endpoint);
        let request = ClassifyRequest {
            model: &self.model_name,
            image: general_purpose::STANDARD.encode(&image_data),
            top_k: TOP_K,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("classifier request failed: {}", e);
                CoreError::ExternalServiceError(format!("classifier error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("classifier returned error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "classifier returned error: {} - {}",
                status, error_text
            )));
        }

        let parsed: ClassifyResponse = response.json().await.map_err(|e| {
            tracing::error!("failed to parse classifier response: {}", e);
            CoreError::ExternalServiceError(format!(
                "failed to parse classifier response: {}",
                e
            ))
        })?;

        Ok(parsed
            .candidates
            .into_iter()
            .map(|candidate| FoodLabel {
                label: candidate.label,
                confidence: candidate.confidence,
            })
            .collect())
    }

    async fn ready(&self) -> Result<bool, CoreError> {
        let url = format!("{}/v1/health", self.endpoint);
        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(e) => {
                tracing::debug!("classifier health probe failed: {}", e);
                Ok(false)
            }
        }
    }
}
