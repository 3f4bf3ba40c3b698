//! AI gateway client
//!
//! Builds the chat-completions request (system prompt + user turn with
//! the image) and performs the single upstream POST. One best-effort
//! attempt per invocation, no retries.

use crate::error::ApiError;
use livestock_ai_common::prompts::{SYSTEM_PROMPT, USER_PROMPT};
use serde::{Deserialize, Serialize};

pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Chat-completions request
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: Content,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Content {
    Text(String),
    Parts(Vec<Part>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Part {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

/// Chat-completions response (only the fields we read)
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

/// Upstream gateway endpoint plus the HTTP client used to reach it.
/// Holds no per-request state; safe to share across requests.
#[derive(Debug, Clone)]
pub struct Gateway {
    http: reqwest::Client,
    url: String,
    model: String,
}

impl Gateway {
    pub fn new(url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            model: model.into(),
        }
    }

    /// Endpoint and model from the environment, with production defaults.
    pub fn from_env() -> Self {
        let url = std::env::var("LIVESTOCK_GATEWAY_URL")
            .unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
        let model =
            std::env::var("LIVESTOCK_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(url, model)
    }

    /// Send one image to the vision model and return the raw reply text.
    pub async fn classify_image(&self, api_key: &str, image: &str) -> Result<String, ApiError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Content::Text(SYSTEM_PROMPT.to_string()),
                },
                Message {
                    role: "user",
                    content: Content::Parts(vec![
                        Part::Text {
                            text: USER_PROMPT.to_string(),
                        },
                        Part::ImageUrl {
                            image_url: ImageUrl {
                                url: image.to_string(),
                            },
                        },
                    ]),
                },
            ],
        };

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, %detail, "AI gateway error");
            return Err(map_upstream_status(status.as_u16()));
        }

        let reply: ChatResponse = response.json().await?;
        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ApiError::Internal("Empty response from AI gateway".to_string()))
    }
}

/// Map a non-success upstream status to the proxy error taxonomy.
pub fn map_upstream_status(status: u16) -> ApiError {
    match status {
        429 => ApiError::RateLimited,
        402 => ApiError::QuotaExceeded,
        _ => ApiError::Upstream,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Status mapping
    // =============================================

    #[test]
    fn test_map_upstream_status() {
        assert!(matches!(map_upstream_status(429), ApiError::RateLimited));
        assert!(matches!(map_upstream_status(402), ApiError::QuotaExceeded));
        assert!(matches!(map_upstream_status(500), ApiError::Upstream));
        assert!(matches!(map_upstream_status(403), ApiError::Upstream));
        assert!(matches!(map_upstream_status(404), ApiError::Upstream));
    }

    // =============================================
    // Request/response serialization
    // =============================================

    #[test]
    fn test_chat_request_serialize() {
        let request = ChatRequest {
            model: "google/gemini-2.5-flash",
            messages: vec![
                Message {
                    role: "system",
                    content: Content::Text("instructions".to_string()),
                },
                Message {
                    role: "user",
                    content: Content::Parts(vec![
                        Part::Text {
                            text: "classify".to_string(),
                        },
                        Part::ImageUrl {
                            image_url: ImageUrl {
                                url: "data:image/jpeg;base64,abc".to_string(),
                            },
                        },
                    ]),
                },
            ],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "google/gemini-2.5-flash");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "instructions");
        assert_eq!(json["messages"][1]["content"][0]["type"], "text");
        assert_eq!(json["messages"][1]["content"][1]["type"], "image_url");
        assert_eq!(
            json["messages"][1]["content"][1]["image_url"]["url"],
            "data:image/jpeg;base64,abc"
        );
    }

    #[test]
    fn test_chat_response_deserialize() {
        let json = r#"{
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "{\"prediction\": \"cattle\"}"
                }
            }]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert!(response.choices[0].message.content.contains("cattle"));
    }

    #[test]
    fn test_gateway_from_defaults() {
        let gateway = Gateway::new(DEFAULT_GATEWAY_URL, DEFAULT_MODEL);
        assert_eq!(gateway.url, DEFAULT_GATEWAY_URL);
        assert_eq!(gateway.model, DEFAULT_MODEL);
    }
}
