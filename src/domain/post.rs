use serde::{Deserialize, Serialize};

/// Minimal projection of a remote post.
///
/// This shape is a contract with the [`Normalizer`](crate::normalizer::Normalizer),
/// not with the gateway: the normalizer decides which payload fields survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub title: String,
    pub author: Option<String>,
    pub permalink: Option<String>,
}

impl PostSummary {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            permalink: None,
        }
    }
}
