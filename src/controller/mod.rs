//! Selection and invalidation commands, plus the read surface a rendering
//! layer consumes.

use std::sync::Arc;

use crate::coordinator::{Coordinator, FetchOutcome};
use crate::domain::{Freshness, TopicEntry};
use crate::store::{CacheEvent, CacheStore};

pub struct Controller {
    store: Arc<CacheStore>,
    coordinator: Arc<Coordinator>,
}

impl Controller {
    pub fn new(store: Arc<CacheStore>, coordinator: Arc<Coordinator>) -> Self {
        Self { store, coordinator }
    }

    /// Make `topic` the active selection, then ensure it is populated.
    ///
    /// Switching to a never-fetched or stale topic triggers a fetch; switching
    /// to a populated one is selection-only.
    pub async fn select_topic(&self, topic: &str) -> FetchOutcome {
        self.store.dispatch(CacheEvent::Select {
            topic: topic.to_string(),
        });
        self.coordinator.ensure_fresh(topic).await
    }

    /// Mark `topic` stale and re-fetch it.
    ///
    /// The invalidation lands synchronously (items cleared, did_invalidate
    /// set) before the re-fetch begins.
    pub async fn force_refresh(&self, topic: &str) -> FetchOutcome {
        self.store.dispatch(CacheEvent::Invalidate {
            topic: topic.to_string(),
        });
        self.coordinator.ensure_fresh(topic).await
    }

    pub fn selected(&self) -> String {
        self.store.selected()
    }

    /// Entry for a topic; absent topics read as the default entry.
    pub fn entry(&self, topic: &str) -> TopicEntry {
        self.store.entry(topic)
    }

    /// The selected topic's entry and its display freshness.
    pub fn selected_entry(&self) -> (String, TopicEntry, Freshness) {
        let topic = self.store.selected();
        let entry = self.store.entry(&topic);
        let freshness = entry.freshness();
        (topic, entry, freshness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::app::Result;
    use crate::gateway::Gateway;
    use crate::normalizer::Normalizer;

    /// Gateway that records fetched topics and the cache state it observed at
    /// call time, so tests can assert on intermediate entries.
    struct RecordingGateway {
        store: Arc<CacheStore>,
        observed: std::sync::Mutex<Vec<(String, TopicEntry)>>,
    }

    impl RecordingGateway {
        fn new(store: Arc<CacheStore>) -> Self {
            Self {
                store,
                observed: std::sync::Mutex::new(Vec::new()),
            }
        }

        fn observed(&self) -> Vec<(String, TopicEntry)> {
            self.observed.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Gateway for RecordingGateway {
        async fn fetch(&self, topic: &str) -> Result<Value> {
            let entry = self.store.entry(topic);
            self.observed
                .lock()
                .unwrap()
                .push((topic.to_string(), entry));
            Ok(json!({
                "data": {
                    "children": [
                        { "data": { "title": "Post 1" } },
                        { "data": { "title": "Post 2" } }
                    ]
                }
            }))
        }
    }

    fn harness() -> (Controller, Arc<RecordingGateway>, Arc<CacheStore>) {
        let store = Arc::new(CacheStore::new("reactjs"));
        let gateway = Arc::new(RecordingGateway::new(store.clone()));
        let coordinator = Arc::new(Coordinator::new(
            store.clone(),
            gateway.clone(),
            Normalizer::new(),
        ));
        let controller = Controller::new(store.clone(), coordinator);
        (controller, gateway, store)
    }

    #[tokio::test]
    async fn test_select_topic_populates_unseen_topic() {
        let (controller, gateway, _store) = harness();

        let outcome = controller.select_topic("reactjs").await;
        assert_eq!(outcome, FetchOutcome::Fetched(2));

        let observed = gateway.observed();
        assert_eq!(observed.len(), 1);
        // The gateway was called with the entry already marked in flight.
        let (topic, at_call_time) = &observed[0];
        assert_eq!(topic, "reactjs");
        assert!(at_call_time.is_fetching);
        assert!(!at_call_time.did_invalidate);
        assert!(at_call_time.items.is_empty());

        let (selected, entry, freshness) = controller.selected_entry();
        assert_eq!(selected, "reactjs");
        assert!(!entry.is_fetching);
        assert_eq!(entry.items[0].title, "Post 1");
        assert_eq!(entry.items[1].title, "Post 2");
        assert!(matches!(freshness, Freshness::Fresh { .. }));
    }

    #[tokio::test]
    async fn test_select_populated_topic_is_selection_only() {
        let (controller, gateway, _store) = harness();

        controller.select_topic("frontend").await;
        let outcome = controller.select_topic("frontend").await;

        assert_eq!(outcome, FetchOutcome::Skipped);
        assert_eq!(gateway.observed().len(), 1);
        assert_eq!(controller.selected(), "frontend");
    }

    #[tokio::test]
    async fn test_force_refresh_invalidates_then_refetches() {
        let (controller, gateway, _store) = harness();

        controller.select_topic("frontend").await;
        let outcome = controller.force_refresh("frontend").await;
        assert_eq!(outcome, FetchOutcome::Fetched(2));

        let observed = gateway.observed();
        assert_eq!(observed.len(), 2);
        // At the second call the invalidation had already cleared the items
        // and the request had flipped the flags back to in-flight.
        let (_, at_refetch) = &observed[1];
        assert!(at_refetch.is_fetching);
        assert!(!at_refetch.did_invalidate);
        assert!(at_refetch.items.is_empty());

        let entry = controller.entry("frontend");
        assert_eq!(entry.items.len(), 2);
        assert!(!entry.did_invalidate);
    }

    #[tokio::test]
    async fn test_unseen_topic_reads_default() {
        let (controller, _gateway, _store) = harness();
        let entry = controller.entry("never-seen");
        assert_eq!(entry, TopicEntry::default());
        assert_eq!(entry.freshness(), Freshness::Never);
    }
}
