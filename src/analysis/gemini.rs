//! Gemini HTTP client for the `generateContent` REST API.
//!
//! Two call shapes, one per collaborator contract:
//! - structured extraction: inline file data + instruction + declared
//!   response schema, JSON response mode
//! - chat reply: system instruction (grounding) + one user turn
//!
//! Both live behind the [`GenerativeClient`] trait so the orchestrator
//! and chat session can run against [`MockGenerativeClient`] in tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Public Gemini API endpoint.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Request timeout — vision extraction on a large scan can be slow.
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Low temperature for factual extraction.
const EXTRACTION_TEMPERATURE: f32 = 0.2;

#[derive(thiserror::Error, Debug, Clone)]
pub enum GeminiError {
    #[error("cannot reach the Gemini API at {0}")]
    Connection(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Gemini API returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("response parsing error: {0}")]
    ResponseParsing(String),

    #[error("no response text from the model")]
    EmptyResponse,
}

/// Seam between the app and the generative API.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Extract structured JSON from an inline document.
    async fn extract_document(
        &self,
        mime_type: &str,
        data_base64: &str,
        instruction: &str,
        response_schema: &serde_json::Value,
    ) -> Result<String, GeminiError>;

    /// One grounded chat turn: system instruction + user text.
    async fn reply(&self, system_instruction: &str, message: &str) -> Result<String, GeminiError>;
}

/// Production client for the Gemini REST API.
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    /// Point the client at a different host (tests, proxies).
    pub fn with_base_url(api_key: String, model: String, base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
            http,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, body: &GenerateContentRequest<'_>) -> Result<String, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    GeminiError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    GeminiError::Timeout(REQUEST_TIMEOUT_SECS)
                } else {
                    GeminiError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::ResponseParsing(e.to_string()))?;

        parsed.first_text().ok_or(GeminiError::EmptyResponse)
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn extract_document(
        &self,
        mime_type: &str,
        data_base64: &str,
        instruction: &str,
        response_schema: &serde_json::Value,
    ) -> Result<String, GeminiError> {
        let body = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content {
                role: Some("user"),
                parts: vec![
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type,
                            data: data_base64,
                        }),
                    },
                    Part {
                        text: Some(instruction),
                        inline_data: None,
                    },
                ],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json"),
                response_schema: Some(response_schema),
                temperature: Some(EXTRACTION_TEMPERATURE),
            }),
        };

        self.generate(&body).await
    }

    async fn reply(&self, system_instruction: &str, message: &str) -> Result<String, GeminiError> {
        let body = GenerateContentRequest {
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part {
                    text: Some(system_instruction),
                    inline_data: None,
                }],
            }),
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: Some(message),
                    inline_data: None,
                }],
            }],
            generation_config: None,
        };

        self.generate(&body).await
    }
}

// ──────────────────────────────────────────────
// Wire types (camelCase per the REST API)
// ──────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Part<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<&'a serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate; `None` when the
    /// model returned nothing usable.
    fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

// ──────────────────────────────────────────────
// Mock client for tests
// ──────────────────────────────────────────────

/// Mock generative client — plays back a scripted sequence of turns.
///
/// Both trait methods draw from the same script; once the script is
/// exhausted the fallback result repeats.
pub struct MockGenerativeClient {
    script: Mutex<VecDeque<Result<String, GeminiError>>>,
    fallback: Result<String, GeminiError>,
}

impl MockGenerativeClient {
    /// Every call returns the same response.
    pub fn new(response: &str) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Ok(response.to_string()),
        }
    }

    /// Every call fails with a connection error.
    pub fn failing() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Err(GeminiError::Connection("mock".to_string())),
        }
    }

    /// Play back `turns` in order, then repeat the fallback.
    pub fn scripted(turns: Vec<Result<String, GeminiError>>) -> Self {
        Self {
            script: Mutex::new(turns.into()),
            fallback: Err(GeminiError::EmptyResponse),
        }
    }

    fn next(&self) -> Result<String, GeminiError> {
        let mut script = self.script.lock().expect("mock script lock");
        script.pop_front().unwrap_or_else(|| self.fallback.clone())
    }
}

#[async_trait]
impl GenerativeClient for MockGenerativeClient {
    async fn extract_document(
        &self,
        _mime_type: &str,
        _data_base64: &str,
        _instruction: &str,
        _response_schema: &serde_json::Value,
    ) -> Result<String, GeminiError> {
        self.next()
    }

    async fn reply(&self, _system_instruction: &str, _message: &str) -> Result<String, GeminiError> {
        self.next()
    }
}
