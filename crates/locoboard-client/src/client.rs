//! HTTP client for the location API.
//!
//! Two endpoints: `GET /api/location/getAll` returns every location record,
//! `POST /api/location/add` accepts a [`NewLocationInput`] and answers with
//! `{"success": bool}`. Failures surface as [`ClientError`]; nothing is
//! retried.

use std::time::Duration;

use locoboard_core::{LocationRecord, NewLocationInput};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::types::AddLocationResponse;

const LIST_PATH: &str = "api/location/getAll";
const ADD_PATH: &str = "api/location/add";

/// Client for the location API. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct LocationApiClient {
    client: Client,
    list_url: Url,
    add_url: Url,
}

impl LocationApiClient {
    /// Creates a client for the API served at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so joins append to any path prefix
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason,
        };
        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        let list_url = base.join(LIST_PATH).map_err(|e| invalid(e.to_string()))?;
        let add_url = base.join(ADD_PATH).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            list_url,
            add_url,
        })
    }

    #[must_use]
    pub fn list_url(&self) -> &Url {
        &self.list_url
    }

    #[must_use]
    pub fn add_url(&self) -> &Url {
        &self.add_url
    }

    /// Fetches every location record.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not a JSON array of records.
    pub async fn get_all(&self) -> Result<Vec<LocationRecord>, ClientError> {
        let response = self.client.get(self.list_url.clone()).send().await?;
        let locations: Vec<LocationRecord> = read_json(response, "getAll").await?;
        tracing::debug!(count = locations.len(), "fetched locations");
        Ok(locations)
    }

    /// Submits a new location.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not the expected JSON object.
    /// - [`ClientError::Rejected`] if `success` is not truthy.
    pub async fn add(&self, input: &NewLocationInput) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.add_url.clone())
            .json(input)
            .send()
            .await?;
        let result: AddLocationResponse = read_json(response, "add").await?;

        if result.success {
            Ok(())
        } else {
            Err(ClientError::Rejected {
                message: result
                    .message
                    .unwrap_or_else(|| "location was not added".to_string()),
            })
        }
    }
}

/// Asserts a 2xx status and parses the body as `T`.
async fn read_json<T: DeserializeOwned>(
    response: Response,
    context: &str,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}
