use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::trace;
use url::Url;

use crate::{
    config::Config,
    models::completion::{ChatCompletionRequest, ChatCompletionResponse},
};

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("failed to resolve completion endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("request error: {0}")]
    Request(#[source] reqwest::Error),
    #[error("completion api status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("json error: {0}")]
    Decode(#[source] reqwest::Error),
}

/// A remote chat-completion API.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(
        &self,
        req: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError>;
}

#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(cfg: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: cfg.openai_base_url.clone(),
            api_key: cfg.openai_api_key.clone(),
        }
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(
        &self,
        req: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        let url = self.base_url.join("chat/completions")?;
        trace!("POST {} model={}", url, req.model);

        let res = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(req)
            .send()
            .await
            .map_err(CompletionError::Request)?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(CompletionError::Status { status, body });
        }

        res.json::<ChatCompletionResponse>()
            .await
            .map_err(CompletionError::Decode)
    }
}
