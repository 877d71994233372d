//! Client for a Nominatim-compatible geocoding endpoint.

use greenmap_core::SearchBounds;
use reqwest::{Client, Url};

use crate::error::ClientError;
use crate::types::Place;

/// Free-text place search restricted to the configured bounds.
pub struct SearchClient {
    client: Client,
    endpoint: Url,
    bounds: SearchBounds,
    limit: u32,
}

impl SearchClient {
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidUrl`] if `endpoint`
    /// does not parse.
    pub fn new(
        endpoint: &str,
        bounds: SearchBounds,
        limit: u32,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let client = crate::http_client(timeout_secs, user_agent)?;
        let endpoint = Url::parse(endpoint).map_err(|e| ClientError::InvalidUrl {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            client,
            endpoint,
            bounds,
            limit,
        })
    }

    /// Looks up places matching `query`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ClientError::Deserialize`] if the body is not a JSON array of places.
    pub async fn search(&self, query: &str) -> Result<Vec<Place>, ClientError> {
        let url = self.build_url(query);
        tracing::debug!(query, "geocoder request");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<Vec<Place>>(&body).map_err(|e| ClientError::Deserialize {
            context: format!("search(q={query})"),
            source: e,
        })
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("format", "json");
            pairs.append_pair("limit", &self.limit.to_string());
            if !self.bounds.country_codes.is_empty() {
                pairs.append_pair("countrycodes", &self.bounds.country_codes);
            }
            if let Some(viewbox) = &self.bounds.viewbox {
                pairs.append_pair("bounded", "1");
                pairs.append_pair("viewbox", viewbox);
            }
            pairs.append_pair("q", query);
        }
        url
    }
}
