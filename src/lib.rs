//! # Eddy
//!
//! A per-topic cache of remotely fetched post listings, with staleness
//! tracking and coordinated re-fetching.
//!
//! ## Architecture
//!
//! ```text
//! Controller → Coordinator → Gateway → Normalizer → Store
//! ```
//!
//! - [`controller`]: selection and invalidation commands, read surface
//! - [`coordinator`]: the fetch decision and lifecycle sequencing
//! - [`gateway`]: async HTTP source of raw topic payloads
//! - [`normalizer`]: raw payload to item-list projection
//! - [`store`]: cache state and the pure event reducer
//!
//! A topic's entry moves through a small lifecycle:
//!
//! ```text
//! empty → fetching → populated → invalidated → fetching → ...
//! ```
//!
//! Fetching is entered only from empty or invalidated entries, and at most
//! one fetch is in flight per topic: the in-flight flag is recorded before
//! the gateway call begins, so concurrent refresh attempts are no-ops.

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires together store, gateway, normalizer,
/// coordinator, and controller.
pub mod app;

/// Command-line interface using clap.
///
/// - `select <topic>` - Select a topic, fetching it if needed
/// - `refresh [topic]` - Invalidate and re-fetch
/// - `show` - Print the selected topic's cache
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/eddy/config.toml`: default topic and gateway
/// settings (base URL, timeout, user agent).
pub mod config;

/// Selection/invalidation commands and the read interface.
pub mod controller;

/// Fetch coordination.
///
/// [`Coordinator::ensure_fresh`](coordinator::Coordinator::ensure_fresh)
/// decides whether a topic needs fetching and runs the request/receive
/// lifecycle around the gateway call.
pub mod coordinator;

/// Core domain models.
///
/// - [`TopicEntry`](domain::TopicEntry): per-topic fetch/staleness record
/// - [`PostSummary`](domain::PostSummary): minimal post projection
/// - [`Freshness`](domain::Freshness): display-oriented status
pub mod domain;

/// Remote source gateway.
///
/// - [`Gateway`](gateway::Gateway): async trait for topic fetching
/// - [`HttpGateway`](gateway::HttpGateway): reqwest-based implementation
pub mod gateway;

/// Payload normalization.
///
/// Converts the gateway's raw JSON listing into [`PostSummary`](domain::PostSummary)
/// items; malformed payloads normalize to an empty list.
pub mod normalizer;

/// Cache state, events, and the pure reducer.
///
/// - [`CacheEvent`](store::CacheEvent): closed set of lifecycle events
/// - [`CacheState`](store::CacheState): selection + per-topic entries
/// - [`CacheStore`](store::CacheStore): serialized mutation handle
pub mod store;
