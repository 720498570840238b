//! HTTP client for the Gemini `generateContent` API.
//!
//! The only provider with a live test path. Sends a single prompt and
//! returns the first candidate's text. No retry, no backoff; a failure is
//! returned to the caller as an [`EngineError`] and surfaced in chat.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Fixed prompt sent by the `!test` command.
pub const TEST_PROMPT: &str = "Reply with one short sentence confirming you are reachable.";

/// Client for the Gemini REST API.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client for a validated API key.
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Build a client against a custom endpoint (tests point this at a
    /// local server).
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Send one prompt and return the generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, EngineError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, DEFAULT_MODEL, self.api_key
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self.http.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::Status(status, body));
        }

        let parsed: GenerateResponse = response.json().await?;
        parsed
            .first_text()
            .map(str::to_string)
            .ok_or(EngineError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .first()
            .map(|part| part.text.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Debug, Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_extracts_first_candidate_text() {
        let parsed: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"hello"},{"text":"ignored"}]}}]}"#,
        )
        .expect("valid response json");
        assert_eq!(parsed.first_text(), Some("hello"));
    }

    #[test]
    fn response_without_candidates_yields_none() {
        let parsed: GenerateResponse = serde_json::from_str("{}").expect("valid response json");
        assert_eq!(parsed.first_text(), None);
    }

    #[test]
    fn request_serializes_expected_wire_shape() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "ping".into(),
                }],
            }],
        };
        let json = serde_json::to_value(&request).expect("serializable");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "ping");
    }
}
