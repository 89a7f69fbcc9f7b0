//! Gemini API client for generating Suno prompts.
//!
//! This module provides:
//!
//! - `PromptService`: the seam the controller drives (mocked in tests)
//! - `GeminiClient`: one `generateContent` call per generation, no retry
//! - `decode_prompt_result`: explicit validation of the model's JSON text
//!
//! The request pins a system instruction and a strict response schema naming
//! all five result fields as required. The reply text is still treated as an
//! untyped payload and must decode cleanly, otherwise the call fails with
//! `GenerationError::MalformedPayload`.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::history::PromptResult;

/// User agent for API requests
const USER_AGENT: &str = concat!("PromptLab/", env!("CARGO_PKG_VERSION"));

const SYSTEM_INSTRUCTION: &str = "You are an expert Music Producer and Prompt Engineer for Suno AI v5.
Your goal is to help users create perfect musical compositions by generating highly effective \"Style\" prompts and \"Lyrics\".

For \"Style\", use a mix of specific genres, moods, instruments, and production techniques (e.g., \"90s Boom Bap, Lo-fi piano, melancholic mood, male vocals, soulful chords\").
For \"Lyrics\", create structured song lyrics with [Verse], [Chorus], [Bridge], and [Outro] markers.

Always respond in a structured JSON format.";

/// Errors from a single generation attempt
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("No API key configured (set api.api_key or GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed response payload: {0}")]
    MalformedPayload(String),
}

/// Something that can turn an idea into a structured prompt
#[async_trait]
pub trait PromptService: Send + Sync {
    async fn generate(&self, user_text: &str) -> Result<PromptResult, GenerationError>;
}

/// Gemini `generateContent` client
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Create a client from API settings
    pub fn new(config: &ApiConfig) -> Result<Self, GenerationError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.resolve_api_key(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl PromptService for GeminiClient {
    async fn generate(&self, user_text: &str) -> Result<PromptResult, GenerationError> {
        let api_key = self.api_key.as_deref().ok_or(GenerationError::MissingApiKey)?;
        let start = std::time::Instant::now();

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&build_request_body(user_text))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api { status, body });
        }

        let body = response.text().await?;
        let result = decode_response(&body)?;

        tracing::info!(
            "Generated \"{}\" with {} in {:.1}s",
            result.title,
            self.model,
            start.elapsed().as_secs_f32()
        );
        Ok(result)
    }
}

/// Build the `generateContent` request body for an idea
pub fn build_request_body(user_text: &str) -> Value {
    json!({
        "systemInstruction": {
            "parts": [{ "text": SYSTEM_INSTRUCTION }]
        },
        "contents": [{
            "role": "user",
            "parts": [{ "text": format!("Generate a Suno v5 prompt for: {}", user_text) }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema()
        }
    })
}

fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "style": { "type": "STRING", "description": "Detailed style string for Suno" },
            "lyrics": { "type": "STRING", "description": "Structured lyrics with markers" },
            "title": { "type": "STRING", "description": "Suggested song title" },
            "tags": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Music tags"
            },
            "vibe": { "type": "STRING", "description": "A brief description of the song's energy" }
        },
        "required": ["style", "lyrics", "title", "tags", "vibe"]
    })
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// Decode a `generateContent` response body into a `PromptResult`
fn decode_response(body: &str) -> Result<PromptResult, GenerationError> {
    let envelope: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::MalformedPayload(format!("bad response envelope: {}", e)))?;
    decode_prompt_result(&envelope.text())
}

/// Validate the model's text into a `PromptResult`.
///
/// Empty text is treated as `{}`, which fails on the first required field.
pub fn decode_prompt_result(text: &str) -> Result<PromptResult, GenerationError> {
    let text = text.trim();
    let text = if text.is_empty() { "{}" } else { text };

    let payload: Value = serde_json::from_str(text)
        .map_err(|e| GenerationError::MalformedPayload(format!("not JSON: {}", e)))?;

    if !payload.is_object() {
        return Err(GenerationError::MalformedPayload(
            "expected a JSON object".to_string(),
        ));
    }

    serde_json::from_value(payload).map_err(|e| GenerationError::MalformedPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADING_PETALS: &str = r#"{
        "style": "90s Korean Ballad, emotional piano, orchestral, nostalgic",
        "lyrics": "[Verse]...[Chorus]...",
        "title": "Fading Petals",
        "tags": ["ballad", "piano", "90s"],
        "vibe": "melancholic and nostalgic"
    }"#;

    #[test]
    fn test_decode_valid_payload() {
        let result = decode_prompt_result(FADING_PETALS).unwrap();
        assert_eq!(result.title, "Fading Petals");
        assert_eq!(result.tags, vec!["ballad", "piano", "90s"]);
        assert_eq!(result.lyrics, "[Verse]...[Chorus]...");
    }

    #[test]
    fn test_decode_rejects_empty_and_partial() {
        assert!(matches!(
            decode_prompt_result(""),
            Err(GenerationError::MalformedPayload(_))
        ));
        assert!(matches!(
            decode_prompt_result("{}"),
            Err(GenerationError::MalformedPayload(_))
        ));
        assert!(matches!(
            decode_prompt_result(r#"{"style": "x", "lyrics": "y", "title": "z", "vibe": "v"}"#),
            Err(GenerationError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_decode_rejects_wrong_shapes() {
        assert!(decode_prompt_result("[1, 2, 3]").is_err());
        assert!(decode_prompt_result("not json at all").is_err());
        let tags_as_string = r#"{"style": "s", "lyrics": "l", "title": "t", "tags": "a,b", "vibe": "v"}"#;
        assert!(decode_prompt_result(tags_as_string).is_err());
    }

    #[test]
    fn test_request_body_shape() {
        let body = build_request_body("90s Korean Ballad");
        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "Generate a Suno v5 prompt for: 90s Korean Ballad"
        );
        assert!(
            body["systemInstruction"]["parts"][0]["text"]
                .as_str()
                .unwrap()
                .contains("[Verse], [Chorus], [Bridge], and [Outro]")
        );

        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(
            config["responseSchema"]["required"],
            json!(["style", "lyrics", "title", "tags", "vibe"])
        );
        assert_eq!(config["responseSchema"]["properties"]["tags"]["type"], "ARRAY");
    }

    #[test]
    fn test_response_text_joins_first_candidate_parts() {
        let raw = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        });
        let response: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.text(), "{\"a\":1}");

        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.text(), "");
    }

    #[test]
    fn test_decode_response_envelope() {
        let body = json!({
            "candidates": [{
                "content": { "parts": [{
                    "text": r#"{"style":"s","lyrics":"[Verse]","title":"t","tags":[],"vibe":"v"}"#
                }] }
            }]
        })
        .to_string();
        assert_eq!(decode_response(&body).unwrap().title, "t");

        for bad in ["<html>502 Bad Gateway</html>", "", r#"{"candidates": 3}"#, r#"{"candidates": []}"#] {
            assert!(
                matches!(decode_response(bad), Err(GenerationError::MalformedPayload(_))),
                "{:?} should be malformed",
                bad
            );
        }
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_request() {
        let client = GeminiClient {
            client: reqwest::Client::new(),
            base_url: "http://127.0.0.1:9".to_string(),
            model: "test-model".to_string(),
            api_key: None,
        };
        assert!(matches!(
            client.generate("anything").await,
            Err(GenerationError::MissingApiKey)
        ));
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/models/test-model:generateContent");
    }
}
