//! Quiet-period scheduling for geocoder suggestions.
//!
//! Each keystroke cancels whatever lookup is still pending (sleeping or in
//! flight) and, if the query is long enough, schedules a new one after
//! [`QUIET_PERIOD`]. Results are delivered on a channel so the owner of the
//! controller applies them on its own task.

use std::sync::Arc;
use std::time::Duration;

use greenmap_client::Place;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::services::SearchService;

pub const QUIET_PERIOD: Duration = Duration::from_millis(250);
pub const MIN_QUERY_CHARS: usize = 3;

/// Places returned for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionBatch {
    pub query: String,
    pub places: Vec<Place>,
}

pub struct SuggestionDebouncer<S: SearchService> {
    service: Arc<S>,
    quiet_period: Duration,
    pending: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<SuggestionBatch>,
}

impl<S: SearchService> SuggestionDebouncer<S> {
    #[must_use]
    pub fn new(service: Arc<S>) -> (Self, mpsc::UnboundedReceiver<SuggestionBatch>) {
        Self::with_quiet_period(service, QUIET_PERIOD)
    }

    #[must_use]
    pub fn with_quiet_period(
        service: Arc<S>,
        quiet_period: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<SuggestionBatch>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Self {
            service,
            quiet_period,
            pending: None,
            tx,
        };
        (debouncer, rx)
    }

    /// Handles the current contents of the address box. Returns `true` if a
    /// lookup was scheduled.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn input(&mut self, query: &str) -> bool {
        self.cancel();
        if query.chars().count() < MIN_QUERY_CHARS {
            return false;
        }

        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        let quiet_period = self.quiet_period;
        let query = query.to_owned();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            match service.search(&query).await {
                Ok(places) => {
                    tracing::debug!(query = %query, results = places.len(), "suggestions received");
                    // Receiver gone means the view was torn down.
                    let _ = tx.send(SuggestionBatch { query, places });
                }
                Err(err) => {
                    tracing::warn!(query = %query, error = %err, "suggestion lookup failed");
                }
            }
        }));
        true
    }

    /// Drops any pending lookup.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<S: SearchService> Drop for SuggestionDebouncer<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
