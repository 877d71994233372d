//! Remote data sources consumed by the controller.
//!
//! The HTTP clients implement these directly; tests substitute in-memory
//! fakes.

use std::future::Future;

use greenmap_client::{
    AccessibilityClient, ClientError, FeedbackPayload, Place, ScoreResult, SearchClient,
};
use greenmap_core::LatLng;

pub trait SearchService: Send + Sync + 'static {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Place>, ClientError>> + Send;
}

pub trait ScoreService {
    fn accessibility_score(
        &self,
        point: LatLng,
        buffer_m: f64,
    ) -> impl Future<Output = Result<ScoreResult, ClientError>>;
}

pub trait FeedbackService {
    fn submit_feedback(
        &self,
        payload: &FeedbackPayload,
    ) -> impl Future<Output = Result<(), ClientError>>;
}

impl SearchService for SearchClient {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Place>, ClientError>> + Send {
        SearchClient::search(self, query)
    }
}

impl ScoreService for AccessibilityClient {
    fn accessibility_score(
        &self,
        point: LatLng,
        buffer_m: f64,
    ) -> impl Future<Output = Result<ScoreResult, ClientError>> {
        AccessibilityClient::accessibility_score(self, point, buffer_m)
    }
}

impl FeedbackService for AccessibilityClient {
    fn submit_feedback(
        &self,
        payload: &FeedbackPayload,
    ) -> impl Future<Output = Result<(), ClientError>> {
        AccessibilityClient::submit_feedback(self, payload)
    }
}
