use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::error::ProviderError;
use crate::http_client::CLIENT;

/// Model every insight request is generated with.
pub const INSIGHT_MODEL: &str = "llama3-8b-8192";

/// Hosted text-generation collaborator.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, ProviderError>;
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

/// Groq's OpenAI-compatible chat completions endpoint.
pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GroqClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        GroqClient {
            client: CLIENT.clone(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl GenerationClient for GroqClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        let body = ChatRequest {
            model,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let res = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;
        let parsed = serde_json::from_str::<serde_json::Value>(&text);

        if !status.is_success() {
            // Groq wraps failures as {"error": {"message": ...}}; fall back to the raw body
            let message = parsed
                .ok()
                .and_then(|json| json["error"]["message"].as_str().map(str::to_string))
                .unwrap_or(text);
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let json = parsed.map_err(|e| ProviderError::InvalidResponse(format!("Groq response: {}", e)))?;

        let reply = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| ProviderError::InvalidResponse("missing choices[0].message.content".to_string()))?
            .to_string();

        debug!(model, reply_len = reply.len(), "generation finished");
        Ok(reply)
    }
}
