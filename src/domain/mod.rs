pub mod entry;
pub mod post;

pub use entry::{Freshness, TopicEntry};
pub use post::PostSummary;
