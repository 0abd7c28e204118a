use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use eddy::app::AppContext;
use eddy::cli::{commands, Cli, Commands};
use eddy::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let ctx = AppContext::new(&config)?;

    match cli.command {
        Commands::Select { topic } => {
            commands::select_topic(&ctx, &topic).await?;
        }
        Commands::Refresh { topic } => {
            commands::refresh(&ctx, topic.as_deref()).await?;
        }
        Commands::Show => {
            commands::show(&ctx)?;
        }
    }

    Ok(())
}
