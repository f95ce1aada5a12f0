use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde_json::json;
use tracing::info;
use voxelgen_core::{ImagePayload, SceneDescription, Usage, VisionProvider};

use crate::error::{Error, Result};
use crate::retry::retry_with_backoff;

const DEFAULT_MAX_TOKENS: u32 = 1000;

pub struct OpenAiVisionProvider {
    client: Client,
    api_key: String,
    base_url: String,
    max_tokens: u32,
}

impl OpenAiVisionProvider {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        info!("Creating OpenAiVisionProvider");
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Build the chat-completions request body, embedding the image as a
    /// base64 data URL next to the instruction prompt.
    fn build_request(&self, image: &ImagePayload, prompt: &str, model: &str) -> serde_json::Value {
        let data_url = format!(
            "data:{};base64,{}",
            image.mime,
            STANDARD.encode(&image.bytes)
        );

        json!({
            "model": model,
            "messages": [{
                "role": "user",
                "content": [
                    {"type": "text", "text": prompt},
                    {"type": "image_url", "image_url": {"url": data_url}},
                ],
            }],
            "max_tokens": self.max_tokens,
        })
    }

    /// Helper method to send a single request
    async fn try_describe(&self, request: &serde_json::Value) -> Result<SceneDescription> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        parse_response(&response)
    }
}

fn parse_response(response: &serde_json::Value) -> Result<SceneDescription> {
    let text = response["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| {
            Error::MalformedResponse("missing choices[0].message.content".to_string())
        })?
        .to_string();

    let usage = response["usage"].as_object().map(|u| {
        let count = |key: &str| {
            u.get(key)
                .and_then(serde_json::Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0)
        };
        Usage {
            prompt_tokens: count("prompt_tokens"),
            completion_tokens: count("completion_tokens"),
            total_tokens: count("total_tokens"),
        }
    });

    Ok(SceneDescription { text, usage })
}

#[async_trait]
impl VisionProvider for OpenAiVisionProvider {
    async fn describe_image(
        &self,
        image: &ImagePayload,
        prompt: &str,
        model: &str,
    ) -> anyhow::Result<SceneDescription> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Credentials("no API key configured".to_string()).into());
        }

        let request = self.build_request(image, prompt, model);

        info!("Sending image analysis request: model={}", model);

        // Retry with exponential backoff: 2s, 4s, 6s, 8s, then 10s x 3
        let base_delays: [u64; 4] = [2, 4, 6, 8];
        let final_retries = 3;

        let description =
            retry_with_backoff(|| self.try_describe(&request), &base_delays, final_retries).await?;

        info!("Received image description");
        Ok(description)
    }

    fn default_model(&self) -> &str {
        "gpt-4o-mini"
    }
}
