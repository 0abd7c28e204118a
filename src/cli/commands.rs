use crate::app::{AppContext, Result};
use crate::coordinator::FetchOutcome;
use crate::domain::TopicEntry;

pub async fn select_topic(ctx: &AppContext, topic: &str) -> Result<()> {
    let outcome = ctx.controller.select_topic(topic).await;

    match outcome {
        FetchOutcome::Fetched(count) => {
            println!("Selected {} ({} posts fetched)", topic, count);
        }
        FetchOutcome::Skipped => {
            println!("Selected {} (cache fresh)", topic);
        }
        FetchOutcome::Failed => {
            println!("Selected {} (fetch failed, showing cached posts)", topic);
        }
    }

    print_entry(&ctx.controller.entry(topic));
    Ok(())
}

pub async fn refresh(ctx: &AppContext, topic: Option<&str>) -> Result<()> {
    let topic = match topic {
        Some(t) => t.to_string(),
        None => ctx.controller.selected(),
    };

    match ctx.controller.force_refresh(&topic).await {
        FetchOutcome::Fetched(count) => {
            println!("Refreshed {} ({} posts)", topic, count);
        }
        FetchOutcome::Skipped => {
            // Only possible if another fetch was already in flight.
            println!("Refresh of {} already in progress", topic);
        }
        FetchOutcome::Failed => {
            println!("Refresh of {} failed; cache is marked stale", topic);
        }
    }

    print_entry(&ctx.controller.entry(&topic));
    Ok(())
}

pub fn show(ctx: &AppContext) -> Result<()> {
    let (topic, entry, freshness) = ctx.controller.selected_entry();
    println!("Topic: {} ({})", topic, freshness);
    print_entry(&entry);
    Ok(())
}

fn print_entry(entry: &TopicEntry) {
    if entry.items.is_empty() {
        println!("  (no posts cached)");
        return;
    }
    for post in &entry.items {
        match &post.author {
            Some(author) => println!("  {} (by {})", post.title, author),
            None => println!("  {}", post.title),
        }
    }
}
