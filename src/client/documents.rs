// file: src/client/documents.rs
// description: REST client for the search service document endpoints
// reference: https://docs.rs/reqwest

use crate::config::ApiConfig;
use crate::error::{ReindexError, Result};
use crate::models::Document;
use crate::utils::Validator;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The service had no document with that id.
    NotFound,
}

/// Remote operations the reindex driver needs.
#[allow(async_fn_in_trait)]
pub trait SearchIndex {
    async fn delete_document(&self, id: &str) -> Result<DeleteOutcome>;

    async fn index_document(&self, document: &Document) -> Result<()>;
}

#[derive(Clone)]
pub struct DocumentsClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl DocumentsClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ReindexError::Config(format!("Invalid API URL {}: {}", config.base_url, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ReindexError::Config(format!(
                "API URL cannot be used as a base: {}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// `{base}/v1/documents` plus any extra segments, each percent-encoded.
    fn documents_url(&self, extra: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ReindexError::Config(format!("API URL cannot be used as a base: {}", self.base_url))
            })?;
            segments.pop_if_empty().extend(["v1", "documents"]);
            if let Some(segment) = extra {
                segments.push(segment);
            }
        }
        Ok(url)
    }

    async fn error_from_response(response: reqwest::Response) -> ReindexError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable response body>".to_string());

        ReindexError::Api { status, body }
    }
}

impl SearchIndex for DocumentsClient {
    async fn delete_document(&self, id: &str) -> Result<DeleteOutcome> {
        Validator::validate_document_id(id)?;
        let url = self.documents_url(Some(id))?;
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(DeleteOutcome::Deleted),
            StatusCode::NOT_FOUND => Ok(DeleteOutcome::NotFound),
            _ => Err(Self::error_from_response(response).await),
        }
    }

    async fn index_document(&self, document: &Document) -> Result<()> {
        let url = self.documents_url(None)?;
        debug!("POST {} ({} chars)", url, document.text.len());

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(document)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        Ok(())
    }
}
