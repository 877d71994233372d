//! Typed HTTP clients for the three remote endpoints the map view consumes:
//! geocoding search, accessibility scoring, and feedback storage.

pub mod accessibility;
pub mod error;
pub mod search;
pub mod types;

use std::time::Duration;

use reqwest::Client;

pub use accessibility::AccessibilityClient;
pub use error::ClientError;
pub use search::SearchClient;
pub use geojson::Geometry;
pub use types::{geometry_kind, FeedbackPayload, Park, Place, ScoreResult, SubScores};

/// Builds the shared `reqwest` client with the configured timeout and UA.
///
/// # Errors
///
/// Returns [`ClientError::Http`] if the TLS backend cannot be initialised.
pub(crate) fn http_client(timeout_secs: u64, user_agent: &str) -> Result<Client, ClientError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Parses `raw` as a URL base, guaranteeing exactly one trailing slash so
/// that relative joins append rather than replace the last path segment.
pub(crate) fn normalised_base(raw: &str) -> Result<reqwest::Url, ClientError> {
    let normalised = format!("{}/", raw.trim_end_matches('/'));
    reqwest::Url::parse(&normalised).map_err(|e| ClientError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })
}
