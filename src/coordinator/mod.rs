//! Sequences the fetch lifecycle around the gateway call.
//!
//! The coordinator owns the decision of whether a topic needs fetching and
//! guarantees at most one in-flight fetch per topic: the RequestStarted event
//! is recorded atomically with the decision, before the gateway future is
//! awaited, so any concurrent `ensure_fresh` for the same topic observes the
//! in-flight flag and skips.

use std::sync::Arc;

use chrono::Utc;

use crate::gateway::Gateway;
use crate::normalizer::Normalizer;
use crate::store::{CacheEvent, CacheStore};

/// What `ensure_fresh` did for a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A fetch ran and this many items were received.
    Fetched(usize),
    /// The entry was fresh or a fetch was already in flight.
    Skipped,
    /// A fetch ran and the gateway failed; the entry is settled, not stuck.
    Failed,
}

pub struct Coordinator {
    store: Arc<CacheStore>,
    gateway: Arc<dyn Gateway + Send + Sync>,
    normalizer: Normalizer,
}

impl Coordinator {
    pub fn new(
        store: Arc<CacheStore>,
        gateway: Arc<dyn Gateway + Send + Sync>,
        normalizer: Normalizer,
    ) -> Self {
        Self {
            store,
            gateway,
            normalizer,
        }
    }

    /// Fetch the topic's posts if its cache entry is empty, invalidated, or
    /// absent; skip if it is populated or a fetch is already in flight.
    ///
    /// Gateway failures are contained here: they settle the entry via a
    /// RequestFailed event and surface only as [`FetchOutcome::Failed`] plus a
    /// warning log. Callers wanting a retry simply call again.
    pub async fn ensure_fresh(&self, topic: &str) -> FetchOutcome {
        if !self.store.begin_fetch_if_needed(topic) {
            tracing::debug!(topic, "entry fresh or fetch in flight, skipping");
            return FetchOutcome::Skipped;
        }

        match self.gateway.fetch(topic).await {
            Ok(payload) => {
                let items = self.normalizer.normalize(&payload);
                let count = items.len();
                self.store.dispatch(CacheEvent::ResponseReceived {
                    topic: topic.to_string(),
                    items,
                    received_at: Utc::now(),
                });
                tracing::info!(topic, count, "received posts");
                FetchOutcome::Fetched(count)
            }
            Err(e) => {
                tracing::warn!(topic, error = %e, "gateway fetch failed");
                self.store.dispatch(CacheEvent::RequestFailed {
                    topic: topic.to_string(),
                });
                FetchOutcome::Failed
            }
        }
    }
}
