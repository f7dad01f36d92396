//! HTTP client for the seller search backend

use std::future::Future;

use reqwest::{Client, Url};
use serde_json::Value;
use thiserror::Error;

use super::types::{SearchRequest, SearchResponse};

/// Path of the search endpoint, appended to the configured base URL
pub const SEARCH_ENDPOINT: &str = "/api/v1/busqueda/vendedores";

/// Message used when a failed call carries no usable error body
pub const FALLBACK_MESSAGE: &str = "Error al buscar vendedores";

/// Failures the client does not turn into a response.
///
/// Transport problems (refused connections, non-2xx statuses) are normalized
/// into a failed [`SearchResponse`]; these variants are programming or
/// contract errors and are handed back to the caller.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("could not build search request: {0}")]
    Request(#[source] reqwest::Error),
    #[error("search response did not match the expected schema: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Outcome of one call, before normalization
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// 2xx with a body matching the response schema
    Ok(SearchResponse),
    /// Failed call whose body carried a `message`
    Structured(String),
    /// Failed call with nothing usable to show
    Opaque,
}

impl SearchOutcome {
    pub fn into_response(self) -> SearchResponse {
        match self {
            SearchOutcome::Ok(response) => response,
            SearchOutcome::Structured(message) => SearchResponse::failure(message),
            SearchOutcome::Opaque => SearchResponse::failure(FALLBACK_MESSAGE),
        }
    }

    /// Classify the body of a failed call
    pub fn from_error_body(body: &[u8]) -> Self {
        let message = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|value| value.get("message").and_then(Value::as_str).map(str::to_owned));

        match message {
            Some(message) if !message.is_empty() => SearchOutcome::Structured(message),
            _ => SearchOutcome::Opaque,
        }
    }
}

/// Anything that can answer a [`SearchRequest`]
pub trait SellerSearch {
    fn search_sellers(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = Result<SearchResponse, ClientError>> + Send;
}

/// Client for the vendedores search API
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    endpoint: Url,
}

impl SearchClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let raw = format!("{}{}", base_url.trim_end_matches('/'), SEARCH_ENDPOINT);
        let endpoint = Url::parse(&raw).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Run one search and normalize the result
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ClientError> {
        self.send(request).await.map(SearchOutcome::into_response)
    }

    async fn send(&self, request: &SearchRequest) -> Result<SearchOutcome, ClientError> {
        tracing::debug!(
            mode = request.mode.code(),
            value = %request.value,
            active_only = request.active_only,
            "POST {}",
            self.endpoint
        );

        let response = match self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_builder() => return Err(ClientError::Request(e)),
            Err(e) => {
                tracing::warn!("Search request failed: {}", e);
                return Ok(SearchOutcome::Opaque);
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Could not read search response ({}): {}", status, e);
                return Ok(SearchOutcome::Opaque);
            }
        };

        if status.is_success() {
            return Ok(SearchOutcome::Ok(serde_json::from_slice(&body)?));
        }

        tracing::warn!("Search endpoint answered {}", status);
        Ok(SearchOutcome::from_error_body(&body))
    }
}

impl SellerSearch for SearchClient {
    fn search_sellers(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = Result<SearchResponse, ClientError>> + Send {
        async move { self.search(&request).await }
    }
}
