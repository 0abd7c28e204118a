//! In-memory cache state and the pure transition functions that drive it.
//!
//! All process-wide state lives in [`CacheState`]: the selected topic and one
//! [`TopicEntry`] per topic ever touched. State changes only by applying a
//! [`CacheEvent`] through the reducer; the [`CacheStore`] handle serializes
//! those applications behind a mutex so no two transitions interleave.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::domain::{PostSummary, TopicEntry};

/// Closed set of lifecycle events a topic's cache entry can receive.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheEvent {
    /// Mark a topic's cached content stale, clearing it for re-fetch.
    Invalidate { topic: String },
    /// A fetch has been dispatched for the topic.
    RequestStarted { topic: String },
    /// A fetch resolved successfully with normalized items.
    ResponseReceived {
        topic: String,
        items: Vec<PostSummary>,
        received_at: DateTime<Utc>,
    },
    /// A fetch failed; clears the in-flight flag, nothing else.
    RequestFailed { topic: String },
    /// Change the selected topic. Touches no entry.
    Select { topic: String },
}

impl CacheEvent {
    /// The topic key this event applies to.
    pub fn topic(&self) -> &str {
        match self {
            CacheEvent::Invalidate { topic }
            | CacheEvent::RequestStarted { topic }
            | CacheEvent::ResponseReceived { topic, .. }
            | CacheEvent::RequestFailed { topic }
            | CacheEvent::Select { topic } => topic,
        }
    }
}

/// Pure per-entry transition: `(entry, event) -> new entry`.
///
/// Total over its input domain; an absent entry is the default entry, and a
/// Select event leaves the entry untouched.
pub fn transition(entry: TopicEntry, event: &CacheEvent) -> TopicEntry {
    match event {
        CacheEvent::Invalidate { .. } => TopicEntry {
            is_fetching: false,
            did_invalidate: true,
            items: Vec::new(),
            last_updated: entry.last_updated,
        },
        CacheEvent::RequestStarted { .. } => TopicEntry {
            is_fetching: true,
            did_invalidate: false,
            items: entry.items,
            last_updated: entry.last_updated,
        },
        CacheEvent::ResponseReceived {
            items, received_at, ..
        } => TopicEntry {
            is_fetching: false,
            did_invalidate: false,
            items: items.clone(),
            // A late response may replace items but never regresses the
            // displayed timestamp.
            last_updated: Some(match entry.last_updated {
                Some(prev) => prev.max(*received_at),
                None => *received_at,
            }),
        },
        CacheEvent::RequestFailed { .. } => TopicEntry {
            is_fetching: false,
            ..entry
        },
        CacheEvent::Select { .. } => entry,
    }
}

/// The entire process-wide state: selection plus per-topic entries.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheState {
    selected: String,
    topics: HashMap<String, TopicEntry>,
}

impl CacheState {
    pub fn new(initial_topic: impl Into<String>) -> Self {
        Self {
            selected: initial_topic.into(),
            topics: HashMap::new(),
        }
    }

    /// Pure reducer: apply one event, producing the next state.
    ///
    /// Only the event's topic key is replaced; every other entry and (except
    /// for Select) the selection are untouched. Keys are created lazily on
    /// first event and never deleted.
    pub fn apply(mut self, event: CacheEvent) -> Self {
        match &event {
            CacheEvent::Select { topic } => {
                self.selected = topic.clone();
            }
            _ => {
                let topic = event.topic().to_string();
                let entry = self.topics.remove(&topic).unwrap_or_default();
                self.topics.insert(topic, transition(entry, &event));
            }
        }
        self
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Entry for a topic, or the default entry if never seen.
    pub fn entry(&self, topic: &str) -> TopicEntry {
        self.topics.get(topic).cloned().unwrap_or_default()
    }

    /// Whether the topic has ever received a lifecycle event.
    pub fn contains(&self, topic: &str) -> bool {
        self.topics.contains_key(topic)
    }
}

/// Shared handle owning the [`CacheState`]; the sole mutation point.
///
/// Dispatches are serialized behind a mutex, so for a single topic events are
/// applied in the order they are emitted. The lock is never held across an
/// await.
pub struct CacheStore {
    inner: Mutex<CacheState>,
}

impl CacheStore {
    pub fn new(initial_topic: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(CacheState::new(initial_topic)),
        }
    }

    pub fn dispatch(&self, event: CacheEvent) {
        let mut state = self.inner.lock().expect("cache state poisoned");
        let next = state.clone().apply(event);
        *state = next;
    }

    /// Atomic fetch decision: if the topic's entry needs a fetch, record
    /// RequestStarted and return true. Decision and transition happen under
    /// one lock, so two racing callers can never both start a fetch.
    pub fn begin_fetch_if_needed(&self, topic: &str) -> bool {
        let mut state = self.inner.lock().expect("cache state poisoned");
        if !state.entry(topic).needs_fetch() {
            return false;
        }
        let next = state.clone().apply(CacheEvent::RequestStarted {
            topic: topic.to_string(),
        });
        *state = next;
        true
    }

    pub fn selected(&self) -> String {
        self.inner
            .lock()
            .expect("cache state poisoned")
            .selected()
            .to_string()
    }

    pub fn entry(&self, topic: &str) -> TopicEntry {
        self.inner.lock().expect("cache state poisoned").entry(topic)
    }

    pub fn snapshot(&self) -> CacheState {
        self.inner.lock().expect("cache state poisoned").clone()
    }
}
