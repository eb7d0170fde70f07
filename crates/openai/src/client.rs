//! The [`Generator`] trait and its OpenAI implementation.

use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, CreateImageRequestArgs,
    Image, ImageModel, ImageQuality, ImageResponseFormat, ImageSize,
};
use async_openai::Client;
use async_trait::async_trait;

use crate::error::GeneratorError;

/// Chat model used for card text.
pub const TEXT_MODEL: &str = "gpt-4";

/// Token budget for one card's worth of JSON.
pub const TEXT_MAX_TOKENS: u32 = 300;

/// Abstract generator capability: remote text and image generation.
///
/// The pipeline depends only on this trait, so tests substitute canned
/// implementations and never touch the network.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate structured text for the given prompt. The payload is
    /// untrusted; callers parse and normalize it themselves.
    async fn generate_text(&self, prompt: &str) -> Result<String, GeneratorError>;

    /// Generate an image for the given prompt, returning a remote URL.
    async fn generate_image(&self, prompt: &str) -> Result<String, GeneratorError>;

    /// Download image bytes from a URL returned by [`Self::generate_image`].
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, GeneratorError>;
}

/// Generator backed by the OpenAI chat-completions and images APIs.
pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    http: reqwest::Client,
}

impl OpenAiGenerator {
    pub fn new(config: OpenAIConfig) -> Self {
        Self {
            client: Client::with_config(config),
            http: reqwest::Client::new(),
        }
    }

    /// Build from `OPENAI_API_KEY` and (optionally) `OPENAI_BASE_URL`.
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set");
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            config = config.with_api_base(base_url);
        }
        Self::new(config)
    }
}

#[async_trait]
impl Generator for OpenAiGenerator {
    async fn generate_text(&self, prompt: &str) -> Result<String, GeneratorError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(TEXT_MODEL)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()])
            .max_tokens(TEXT_MAX_TOKENS)
            .build()?;

        let response = self.client.chat().create(request).await?;
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GeneratorError::Service("empty chat completion".to_string()))?;

        tracing::debug!(bytes = content.len(), "Received card text from generator");
        Ok(content)
    }

    async fn generate_image(&self, prompt: &str) -> Result<String, GeneratorError> {
        let request = CreateImageRequestArgs::default()
            .model(ImageModel::DallE3)
            .prompt(prompt)
            .n(1)
            .size(ImageSize::S1024x1024)
            .quality(ImageQuality::Standard)
            .response_format(ImageResponseFormat::Url)
            .build()?;

        let response = self.client.images().create(request).await?;
        let url = response
            .data
            .first()
            .and_then(|image| match image.as_ref() {
                Image::Url { url, .. } => Some(url.clone()),
                _ => None,
            })
            .ok_or_else(|| GeneratorError::Service("no image url in response".to_string()))?;

        tracing::debug!(%url, "Received image url from generator");
        Ok(url)
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, GeneratorError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| GeneratorError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| GeneratorError::Service(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GeneratorError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
