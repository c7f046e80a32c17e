//! Gemini REST client
//!
//! Speaks the generateContent API for structured generation and chat, and
//! the Imagen predict API for image generation. The [`GenerativeService`]
//! trait is the seam the orchestrator and chat session depend on, so both
//! can be exercised against an in-memory fake.

pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::chat::ChatMessage;
use crate::config::BrandwiseConfig;
use crate::error::{BrandwiseError, Result};
use self::types::{
    GeminiContent, GeminiGenerationConfig, GeminiRequest, GeminiResponse,
    GeminiSystemInstruction, GeminiTextPart, GeneratedImage, ImagenInstance, ImagenParameters,
    ImagenRequest, ImagenResponse,
};

/// Unified interface to the remote generative service.
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// One-shot structured generation: returns the raw JSON text the model
    /// produced under the supplied response schema.
    async fn generate_structured(&self, prompt: &str, schema: &Value) -> Result<String>;

    /// Generate exactly one square PNG image for the prompt.
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage>;

    /// Send one conversational turn with the full prior history and return
    /// the reply text.
    async fn send_chat(&self, system: &str, history: &[ChatMessage]) -> Result<String>;
}

/// HTTP client for the Gemini API family
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    plan_model: String,
    image_model: String,
    chat_model: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(config: &BrandwiseConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.gemini_api_key.clone(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            plan_model: config.plan_model.clone(),
            image_model: config.image_model.clone(),
            chat_model: config.chat_model.clone(),
            timeout: Duration::from_secs(config.request_timeout),
        }
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/v1beta/models/{}:{}?key={}",
            self.base_url, model, method, self.api_key
        )
    }

    /// POST a request body and decode the JSON reply, mapping non-success
    /// statuses to [`BrandwiseError::Service`].
    async fn post<B, R>(&self, url: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .json(body)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BrandwiseError::Service {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<R>().await?)
    }

    /// Concatenate the text parts of the first candidate.
    fn extract_text(response: GeminiResponse) -> Result<String> {
        if let Some(error) = response.error {
            return Err(BrandwiseError::Service {
                status: error.code.unwrap_or(0),
                message: error.message,
            });
        }

        let text: String = response
            .candidates
            .into_iter()
            .flatten()
            .take(1)
            .flat_map(|c| c.content.parts.into_iter().flatten())
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            return Err(BrandwiseError::Schema(
                "response contained no text".to_string(),
            ));
        }
        Ok(text)
    }

    /// Pull the first prediction out of an Imagen reply. Zero predictions,
    /// or a prediction without image bytes, is an asset-generation failure.
    fn extract_image(response: ImagenResponse) -> Result<GeneratedImage> {
        if let Some(error) = response.error {
            return Err(BrandwiseError::Service {
                status: error.code.unwrap_or(0),
                message: error.message,
            });
        }

        let prediction = response
            .predictions
            .into_iter()
            .flatten()
            .next()
            .ok_or_else(|| {
                BrandwiseError::AssetGeneration("response contained zero images".to_string())
            })?;

        let bytes_base64 = prediction.bytes_base64_encoded.ok_or_else(|| {
            BrandwiseError::AssetGeneration("prediction carried no image bytes".to_string())
        })?;

        Ok(GeneratedImage {
            bytes_base64,
            mime_type: prediction.mime_type.unwrap_or_else(|| "image/png".to_string()),
        })
    }

    fn history_to_contents(history: &[ChatMessage]) -> Vec<GeminiContent> {
        history
            .iter()
            .map(|msg| GeminiContent {
                role: msg.role.as_wire_str().to_string(),
                parts: vec![GeminiTextPart {
                    text: msg.text.clone(),
                }],
            })
            .collect()
    }
}

#[async_trait]
impl GenerativeService for GeminiClient {
    async fn generate_structured(&self, prompt: &str, schema: &Value) -> Result<String> {
        debug!(model = %self.plan_model, "structured generation request");

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiTextPart {
                    text: prompt.to_string(),
                }],
            }],
            system_instruction: None,
            generation_config: Some(GeminiGenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema.clone()),
            }),
        };

        let url = self.endpoint(&self.plan_model, "generateContent");
        let response: GeminiResponse = self.post(&url, &request).await?;
        Self::extract_text(response)
    }

    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage> {
        debug!(model = %self.image_model, "image generation request");

        let request = ImagenRequest {
            instances: vec![ImagenInstance {
                prompt: prompt.to_string(),
            }],
            parameters: ImagenParameters {
                sample_count: 1,
                aspect_ratio: "1:1".to_string(),
            },
        };

        let url = self.endpoint(&self.image_model, "predict");
        let response: ImagenResponse = self.post(&url, &request).await?;
        Self::extract_image(response)
    }

    async fn send_chat(&self, system: &str, history: &[ChatMessage]) -> Result<String> {
        debug!(model = %self.chat_model, turns = history.len(), "chat request");

        let request = GeminiRequest {
            contents: Self::history_to_contents(history),
            system_instruction: Some(GeminiSystemInstruction {
                parts: vec![GeminiTextPart {
                    text: system.to_string(),
                }],
            }),
            generation_config: None,
        };

        let url = self.endpoint(&self.chat_model, "generateContent");
        let response: GeminiResponse = self.post(&url, &request).await?;
        Self::extract_text(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{ChatMessage, ChatRole};
    use super::types::{
        GeminiApiError, GeminiCandidate, GeminiContentResponse, GeminiPartResponse,
        ImagenPrediction,
    };

    fn text_response(text: &str) -> GeminiResponse {
        GeminiResponse {
            candidates: Some(vec![GeminiCandidate {
                content: GeminiContentResponse {
                    parts: Some(vec![GeminiPartResponse {
                        text: Some(text.to_string()),
                    }]),
                },
            }]),
            error: None,
        }
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response = GeminiResponse {
            candidates: Some(vec![GeminiCandidate {
                content: GeminiContentResponse {
                    parts: Some(vec![
                        GeminiPartResponse {
                            text: Some("hello ".to_string()),
                        },
                        GeminiPartResponse {
                            text: Some("world".to_string()),
                        },
                    ]),
                },
            }]),
            error: None,
        };
        assert_eq!(GeminiClient::extract_text(response).unwrap(), "hello world");
    }

    #[test]
    fn test_extract_text_empty_is_schema_error() {
        let response = GeminiResponse {
            candidates: Some(vec![]),
            error: None,
        };
        assert!(matches!(
            GeminiClient::extract_text(response),
            Err(BrandwiseError::Schema(_))
        ));
    }

    #[test]
    fn test_extract_text_surfaces_embedded_error() {
        let response = GeminiResponse {
            candidates: None,
            error: Some(GeminiApiError {
                code: Some(400),
                message: "bad request".to_string(),
            }),
        };
        match GeminiClient::extract_text(response) {
            Err(BrandwiseError::Service { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "bad request");
            }
            other => panic!("expected service error, got {other:?}"),
        }
        // sanity: plain text still extracts
        assert_eq!(GeminiClient::extract_text(text_response("ok")).unwrap(), "ok");
    }

    #[test]
    fn test_extract_image_returns_first_prediction() {
        let response = ImagenResponse {
            predictions: Some(vec![ImagenPrediction {
                bytes_base64_encoded: Some("QUJD".to_string()),
                mime_type: Some("image/png".to_string()),
            }]),
            error: None,
        };
        let image = GeminiClient::extract_image(response).unwrap();
        assert_eq!(image.bytes_base64, "QUJD");
        assert_eq!(image.to_data_uri(), "data:image/png;base64,QUJD");
    }

    #[test]
    fn test_extract_image_empty_predictions_is_asset_error() {
        for predictions in [None, Some(vec![])] {
            let response = ImagenResponse {
                predictions,
                error: None,
            };
            assert!(matches!(
                GeminiClient::extract_image(response),
                Err(BrandwiseError::AssetGeneration(_))
            ));
        }
    }

    #[test]
    fn test_extract_image_missing_bytes_is_asset_error() {
        let response = ImagenResponse {
            predictions: Some(vec![ImagenPrediction {
                bytes_base64_encoded: None,
                mime_type: Some("image/png".to_string()),
            }]),
            error: None,
        };
        assert!(matches!(
            GeminiClient::extract_image(response),
            Err(BrandwiseError::AssetGeneration(_))
        ));
    }

    #[test]
    fn test_extract_image_defaults_mime_type() {
        let response = ImagenResponse {
            predictions: Some(vec![ImagenPrediction {
                bytes_base64_encoded: Some("QUJD".to_string()),
                mime_type: None,
            }]),
            error: None,
        };
        let image = GeminiClient::extract_image(response).unwrap();
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn test_extract_image_surfaces_embedded_error() {
        let response = ImagenResponse {
            predictions: None,
            error: Some(GeminiApiError {
                code: Some(429),
                message: "quota exceeded".to_string(),
            }),
        };
        assert!(matches!(
            GeminiClient::extract_image(response),
            Err(BrandwiseError::Service { status: 429, .. })
        ));
    }

    #[test]
    fn test_history_to_contents_maps_roles() {
        let history = vec![
            ChatMessage::new(ChatRole::User, "hi"),
            ChatMessage::new(ChatRole::Model, "hello"),
        ];
        let contents = GeminiClient::history_to_contents(&history);
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0].role, "user");
        assert_eq!(contents[1].role, "model");
        assert_eq!(contents[1].parts[0].text, "hello");
    }
}
