//! HTTP access to the catalog endpoint.

use reqwest::Client;
use thiserror::Error;

use crate::catalog::product::Product;

/// Diagnostic stored on the snapshot when a load is aborted.
pub const ABORTED_MESSAGE: &str = "Request Aborted";

/// Diagnostic stored on the snapshot for transport and decode failures.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred";

/// Errors that can occur while fetching the catalog.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build catalog client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response.
    #[error("Catalog request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("Catalog endpoint returned {status}")]
    Status { status: u16 },

    /// The response body was not a product list.
    #[error("Failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The caller aborted the request before it settled.
    #[error("Catalog request aborted")]
    Aborted,
}

impl FetchError {
    /// Short user-facing text written to the snapshot's error message.
    pub fn diagnostic(&self) -> String {
        match self {
            FetchError::Aborted => ABORTED_MESSAGE.to_string(),
            FetchError::Status { status } => format!("Request failed with status {}", status),
            FetchError::Client(_) | FetchError::Transport { .. } | FetchError::Decode(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}

/// Client for the fixed catalog endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    endpoint: String,
}

impl CatalogClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("storefront/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one GET to the endpoint and decode the product list.
    ///
    /// No timeout and no retry: a single failed attempt is final.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Transport {
            endpoint: self.endpoint.clone(),
            source: e,
        })?;

        Ok(serde_json::from_slice(&body)?)
    }
}
