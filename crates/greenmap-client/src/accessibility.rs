//! Client for the green-space accessibility API.
//!
//! Two endpoints are used: the per-location score lookup and the feedback
//! sink. Both are single-attempt; callers decide how failures surface.

use greenmap_core::LatLng;
use reqwest::{Client, Url};

use crate::error::ClientError;
use crate::types::{FeedbackPayload, ScoreResult};

const SCORE_PATH: &str = "api/v1/accessibility/accessibility-score";
const FEEDBACK_PATH: &str = "api/v1/feedback/";

pub struct AccessibilityClient {
    client: Client,
    base_url: Url,
}

impl AccessibilityClient {
    /// Creates a client rooted at `base_url` (e.g. `http://localhost:8000`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidUrl`] if `base_url`
    /// does not parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client: crate::http_client(timeout_secs, user_agent)?,
            base_url: crate::normalised_base(base_url)?,
        })
    }

    /// Fetches the accessibility score for `point` with a `buffer_m` radius.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ClientError::Deserialize`] if the body does not match [`ScoreResult`].
    pub async fn accessibility_score(
        &self,
        point: LatLng,
        buffer_m: f64,
    ) -> Result<ScoreResult, ClientError> {
        let url = self.score_url(point, buffer_m)?;
        tracing::debug!(lat = point.lat, lon = point.lon, buffer_m, "score request");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<ScoreResult>(&body).map_err(|e| ClientError::Deserialize {
            context: format!("accessibility-score(lat={}, lon={})", point.lat, point.lon),
            source: e,
        })
    }

    /// Posts one feedback record. The response body is not inspected.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx response.
    pub async fn submit_feedback(&self, payload: &FeedbackPayload) -> Result<(), ClientError> {
        let url = self.endpoint(FEEDBACK_PATH)?;
        let response = self.client.post(url.clone()).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        tracing::debug!(liked = payload.liked, "feedback stored");
        Ok(())
    }

    fn score_url(&self, point: LatLng, buffer_m: f64) -> Result<Url, ClientError> {
        let mut url = self.endpoint(SCORE_PATH)?;
        url.query_pairs_mut()
            .append_pair("lat", &point.lat.to_string())
            .append_pair("lon", &point.lon.to_string())
            .append_pair("buffer_m", &buffer_m.to_string());
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url.join(path).map_err(|e| ClientError::InvalidUrl {
            url: format!("{}{path}", self.base_url),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> AccessibilityClient {
        AccessibilityClient::new(base_url, 30, "greenmap-test/0.1")
            .expect("client construction should not fail")
    }

    #[test]
    fn score_url_carries_coordinates_and_buffer() {
        let client = test_client("http://api.example.com");
        let url = client
            .score_url(LatLng::new(38.7369, -9.1427), 500.0)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.example.com/api/v1/accessibility/accessibility-score\
             ?lat=38.7369&lon=-9.1427&buffer_m=500"
        );
    }

    #[test]
    fn base_url_with_path_prefix_is_preserved() {
        let client = test_client("http://example.com/green/");
        let url = client.endpoint(FEEDBACK_PATH).unwrap();
        assert_eq!(url.as_str(), "http://example.com/green/api/v1/feedback/");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = AccessibilityClient::new("::::", 30, "ua");
        assert!(matches!(result, Err(ClientError::InvalidUrl { .. })));
    }
}
