pub mod http;

use async_trait::async_trait;
use serde_json::Value;

use crate::app::Result;

pub use http::HttpGateway;

/// Remote source of per-topic post listings.
///
/// Reports back exactly once per invocation: a raw JSON payload on success,
/// an error otherwise. The payload shape is a contract with the
/// [`Normalizer`](crate::normalizer::Normalizer), which tolerates anything.
#[async_trait]
pub trait Gateway {
    async fn fetch(&self, topic: &str) -> Result<Value>;
}
