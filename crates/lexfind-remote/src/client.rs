//! HTTP client for the remote syntax-analysis service.

use crate::syntax::{AnalyzeSyntaxRequest, AnalyzeSyntaxResponse};
use async_trait::async_trait;
use lexfind_core::config::RemoteConfig;
use lexfind_core::{NetworkError, TagError, Tagger, Token};
use reqwest::Client;
use std::time::Duration;

const KEY_PARAMETER: &str = "key";

/// Tags a query with one `POST` to the syntax endpoint. Category and lemma
/// come back together in a single pass.
#[derive(Debug, Clone)]
pub struct RemoteTagger {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl RemoteTagger {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NetworkError::Transport(e.to_string()))?;
        Ok(Self { client, endpoint: endpoint.into(), api_key: api_key.into() })
    }

    pub fn from_config(config: &RemoteConfig) -> Result<Self, NetworkError> {
        Self::new(&config.endpoint, &config.api_key, config.timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `text` for analysis and decode the response body.
    pub async fn analyze(&self, text: &str) -> Result<AnalyzeSyntaxResponse, NetworkError> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[(KEY_PARAMETER, self.api_key.as_str())])
            .json(&AnalyzeSyntaxRequest::plain_text(text))
            .send()
            .await
            .map_err(|e| NetworkError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "syntax analysis response");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NetworkError::Status { status: status.as_u16(), body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| NetworkError::Transport(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| NetworkError::Parse(e.to_string()))
    }
}

#[async_trait]
impl Tagger for RemoteTagger {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn tag(&self, text: &str) -> Result<Vec<Token>, TagError> {
        let tokens = self.analyze(text).await?.into_tokens();
        for token in &tokens {
            tracing::debug!(word = %token.text, category = %token.category, lemma = %token.lemma, "remote tag");
        }
        Ok(tokens)
    }
}
