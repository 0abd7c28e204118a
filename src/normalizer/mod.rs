use html_escape::decode_html_entities;
use serde_json::Value;

use crate::domain::PostSummary;

/// Shapes a raw gateway payload into the item list the cache stores.
///
/// The expected payload is a JSON document with a nested collection at
/// `data.children`, each child carrying a `data` object with at least a
/// `title`. Pure and total: a payload missing or malforming that collection
/// yields an empty list rather than an error.
#[derive(Clone, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, payload: &Value) -> Vec<PostSummary> {
        let children = match payload
            .get("data")
            .and_then(|d| d.get("children"))
            .and_then(Value::as_array)
        {
            Some(children) => children,
            None => return Vec::new(),
        };

        children
            .iter()
            .filter_map(|child| {
                let data = child.get("data")?;
                let title = data.get("title").and_then(Value::as_str)?;

                Some(PostSummary {
                    title: decode_html_entities(title).to_string(),
                    author: data
                        .get("author")
                        .and_then(Value::as_str)
                        .map(String::from),
                    permalink: data
                        .get("permalink")
                        .and_then(Value::as_str)
                        .map(String::from),
                })
            })
            .collect()
    }
}
