//! Wire types for the Gemini generateContent and Imagen predict APIs

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// generateContent request
// ============================================================================

#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiSystemInstruction>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Debug, Serialize)]
pub struct GeminiSystemInstruction {
    pub parts: Vec<GeminiTextPart>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeminiContent {
    pub role: String,
    pub parts: Vec<GeminiTextPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiTextPart {
    pub text: String,
}

/// Constrains the model output. `response_schema` makes the call a
/// structured-generation request returning a single JSON document.
#[derive(Debug, Serialize)]
pub struct GeminiGenerationConfig {
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
}

// ============================================================================
// generateContent response
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    pub candidates: Option<Vec<GeminiCandidate>>,
    pub error: Option<GeminiApiError>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    pub content: GeminiContentResponse,
}

#[derive(Debug, Deserialize)]
pub struct GeminiContentResponse {
    pub parts: Option<Vec<GeminiPartResponse>>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiPartResponse {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiApiError {
    pub code: Option<u16>,
    pub message: String,
}

// ============================================================================
// Imagen predict
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ImagenRequest {
    pub instances: Vec<ImagenInstance>,
    pub parameters: ImagenParameters,
}

#[derive(Debug, Serialize)]
pub struct ImagenInstance {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ImagenParameters {
    #[serde(rename = "sampleCount")]
    pub sample_count: u32,
    #[serde(rename = "aspectRatio")]
    pub aspect_ratio: String,
}

#[derive(Debug, Deserialize)]
pub struct ImagenResponse {
    pub predictions: Option<Vec<ImagenPrediction>>,
    pub error: Option<GeminiApiError>,
}

#[derive(Debug, Deserialize)]
pub struct ImagenPrediction {
    #[serde(rename = "bytesBase64Encoded")]
    pub bytes_base64_encoded: Option<String>,
    #[serde(rename = "mimeType")]
    pub mime_type: Option<String>,
}

// ============================================================================
// Client-facing image result
// ============================================================================

/// A single generated image, bytes still base64-encoded as the API returns
/// them.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub bytes_base64: String,
    pub mime_type: String,
}

impl GeneratedImage {
    /// Wrap the image as a `data:` URI usable directly in an `<img>` tag.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.bytes_base64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_format() {
        let image = GeneratedImage {
            bytes_base64: "aGVsbG8=".to_string(),
            mime_type: "image/png".to_string(),
        };
        assert_eq!(image.to_data_uri(), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn test_imagen_request_serializes_camel_case() {
        let request = ImagenRequest {
            instances: vec![ImagenInstance {
                prompt: "a minimalist fox".to_string(),
            }],
            parameters: ImagenParameters {
                sample_count: 1,
                aspect_ratio: "1:1".to_string(),
            },
        };
        let v = serde_json::to_value(&request).unwrap();
        assert_eq!(v["parameters"]["sampleCount"], 1);
        assert_eq!(v["parameters"]["aspectRatio"], "1:1");
        assert_eq!(v["instances"][0]["prompt"], "a minimalist fox");
    }

    #[test]
    fn test_gemini_response_deserializes() {
        let raw = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "hello" } ] } }
            ]
        }"#;
        let response: GeminiResponse = serde_json::from_str(raw).unwrap();
        let candidates = response.candidates.unwrap();
        let parts = candidates[0].content.parts.as_ref().unwrap();
        assert_eq!(parts[0].text.as_deref(), Some("hello"));
    }

    #[test]
    fn test_imagen_response_deserializes() {
        let raw = r#"{
            "predictions": [
                { "bytesBase64Encoded": "QUJD", "mimeType": "image/png" }
            ]
        }"#;
        let response: ImagenResponse = serde_json::from_str(raw).unwrap();
        let predictions = response.predictions.unwrap();
        assert_eq!(predictions[0].bytes_base64_encoded.as_deref(), Some("QUJD"));
    }
}
