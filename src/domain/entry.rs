use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::PostSummary;

/// Per-topic fetch/staleness/content record.
///
/// `Default` is the never-seen entry: not fetching, not invalidated, no items,
/// no timestamp. Readers treat an absent topic as this default, never as an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicEntry {
    /// True strictly between request-dispatched and response-applied.
    pub is_fetching: bool,
    /// True when the entry is known stale and not yet refreshed.
    pub did_invalidate: bool,
    /// Last successfully fetched content, replaced wholesale on receive.
    pub items: Vec<PostSummary>,
    /// Set only on successful receive; never moves backwards for a topic.
    pub last_updated: Option<DateTime<Utc>>,
}

impl TopicEntry {
    /// Whether a new fetch should be dispatched for this entry.
    ///
    /// Skips while a fetch is in flight; otherwise fetches when the entry is
    /// empty or invalidated.
    pub fn needs_fetch(&self) -> bool {
        if self.is_fetching {
            return false;
        }
        self.items.is_empty() || self.did_invalidate
    }

    pub fn freshness(&self) -> Freshness {
        if self.is_fetching {
            Freshness::Fetching
        } else if self.did_invalidate {
            Freshness::Stale
        } else {
            match self.last_updated {
                Some(at) => Freshness::Fresh { at },
                None => Freshness::Never,
            }
        }
    }
}

/// Display-oriented freshness status derived from an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Never successfully fetched.
    Never,
    /// A fetch is in flight.
    Fetching,
    /// Populated and not invalidated.
    Fresh { at: DateTime<Utc> },
    /// Invalidated, awaiting refresh.
    Stale,
}

impl std::fmt::Display for Freshness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Freshness::Never => write!(f, "never fetched"),
            Freshness::Fetching => write!(f, "fetching..."),
            Freshness::Fresh { at } => write!(f, "updated {}", at.format("%Y-%m-%d %H:%M:%S UTC")),
            Freshness::Stale => write!(f, "stale"),
        }
    }
}
