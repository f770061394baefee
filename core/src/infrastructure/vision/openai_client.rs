use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    classification::{
        ports::VisionClient,
        value_objects::{VisionHints, VisionIdentification},
    },
    common::entities::app_errors::CoreError,
};

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Identification is best-effort; a slow vision call must not hold the
/// analysis hostage, so the whole request is bounded and never retried.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// The chat API reports no confidence score, so identifications carry a
/// fixed one.
const VISION_CONFIDENCE: f64 = 0.85;

const MAX_TOKENS: u32 = 50;

/// OpenAI chat-completions client used as the secondary vision service
/// when the primary classifier is unsure.
#[derive(Debug, Clone)]
pub struct OpenAiVisionClient {
    api_key: String,
    model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageResponse,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: String,
}

impl OpenAiVisionClient {
    pub fn new(api_key: String, model: String) -> Result<Self, anyhow::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            api_key,
            model,
            client,
        })
    }

    fn build_prompt(hints: &VisionHints) -> String {
        let mut prompt = "Identify this food item. Respond with just the food name.".to_string();

        if hints.has_braces {
            prompt.push_str(" Note: this is for someone with braces.");
        }
        if let Some(treatment) = &hints.current_treatment {
            prompt.push_str(&format!(" They are currently undergoing: {}.", treatment));
        }

        prompt
    }
}

impl VisionClient for OpenAiVisionClient {
    async fn identify(
        &self,
        image_data: Vec<u8>,
        hints: VisionHints,
    ) -> Result<VisionIdentification, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(&image_data);
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text {
                        text: Self::build_prompt(&hints),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("data:image/jpeg;base64,{}", base64_image),
                        },
                    },
                ],
            }],
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("vision API request failed: {}", e);
                CoreError::ExternalServiceError(format!("vision API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("vision API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "vision API returned error: {} - {}",
                status, error_text
            )));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("failed to parse vision response: {}", e);
            CoreError::ExternalServiceError(format!("failed to parse vision response: {}", e))
        })?;

        let food_name = parsed
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                CoreError::ExternalServiceError("no response from vision service".to_string())
            })?;

        Ok(VisionIdentification {
            food_name,
            confidence: VISION_CONFIDENCE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_mentions_braces_and_treatment() {
        let hints = VisionHints {
            has_braces: true,
            current_treatment: Some("Invisalign".to_string()),
        };
        let prompt = OpenAiVisionClient::build_prompt(&hints);
        assert!(prompt.contains("braces"));
        assert!(prompt.contains("Invisalign"));
    }

    #[test]
    fn default_prompt_is_plain() {
        let prompt = OpenAiVisionClient::build_prompt(&VisionHints::default());
        assert_eq!(
            prompt,
            "Identify this food item. Respond with just the food name."
        );
    }
}
