//! Gemini `generateContent` backend — direct REST transport via reqwest.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use super::{GenerativeBackend, PortfolioRequest, prompt};
use crate::error::ContentError;

/// Client for the Gemini multimodal generation API.
pub struct GeminiBackend {
    api_key: SecretString,
    model: String,
    endpoint: String,
    client: reqwest::Client,
}

impl GeminiBackend {
    pub fn new(api_key: SecretString, model: &str, endpoint: &str) -> Self {
        Self {
            api_key,
            model: model.to_string(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn api_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }

    /// Assemble the multimodal request body: the instruction text part, the
    /// optional inline image part, and the declared response schema.
    fn request_body(&self, request: &PortfolioRequest) -> Value {
        let mut parts = vec![serde_json::json!({ "text": request.prompt })];
        if let Some(image) = &request.image {
            parts.push(serde_json::json!({
                "inline_data": {
                    "mime_type": image.mime_type,
                    "data": image.data,
                }
            }));
        }
        serde_json::json!({
            "contents": [{ "parts": parts }],
            "generationConfig": {
                "response_mime_type": "application/json",
                "response_schema": prompt::response_schema(),
            }
        })
    }
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    async fn generate(&self, request: &PortfolioRequest) -> Result<String, ContentError> {
        let resp = self
            .client
            .post(self.api_url())
            .query(&[("key", self.api_key.expose_secret())])
            .json(&self.request_body(request))
            .send()
            .await
            .map_err(|e| ContentError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ContentError::Status { status, body });
        }

        let payload: Value = resp
            .json()
            .await
            .map_err(|e| ContentError::Transport(e.to_string()))?;

        let text = payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .ok_or_else(|| ContentError::InvalidResponse("no candidate text in response".into()))?;
        if text.trim().is_empty() {
            return Err(ContentError::InvalidResponse("empty candidate text".into()));
        }
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ImagePayload;

    fn backend() -> GeminiBackend {
        GeminiBackend::new(
            SecretString::from("test-key"),
            "gemini-3-flash-preview",
            "https://generativelanguage.googleapis.com/",
        )
    }

    #[test]
    fn api_url_has_model_and_no_trailing_slash() {
        assert_eq!(
            backend().api_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn text_only_body_has_single_part_and_schema() {
        let request = PortfolioRequest {
            prompt: "describe the craft".to_string(),
            image: None,
        };
        let body = backend().request_body(&request);
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0]["text"], "describe the craft");
        assert_eq!(
            body["generationConfig"]["response_mime_type"],
            "application/json"
        );
        assert!(body["generationConfig"]["response_schema"]["required"].is_array());
    }

    #[test]
    fn image_becomes_second_inline_part() {
        let request = PortfolioRequest {
            prompt: "describe the craft".to_string(),
            image: Some(ImagePayload {
                mime_type: "image/jpeg".to_string(),
                data: "Zm9v".to_string(),
            }),
        };
        let body = backend().request_body(&request);
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1]["inline_data"]["mime_type"], "image/jpeg");
        assert_eq!(parts[1]["inline_data"]["data"], "Zm9v");
    }
}
