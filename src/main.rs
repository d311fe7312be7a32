use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use freshet::app::AppContext;
use freshet::cli::{commands, Cli, Commands};
use freshet::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(server) = cli.server {
        config.server_url = server;
    }

    let ctx = AppContext::new(&config)?;

    match cli.command {
        Commands::Add { url, title } => {
            commands::add_feed(&ctx, &url, title.as_deref()).await;
        }
        Commands::Remove { feed_id } => {
            commands::remove_feed(&ctx, feed_id).await;
        }
        Commands::Feeds => {
            commands::list_feeds(&ctx).await;
        }
        Commands::Articles { feed, filter } => {
            commands::list_articles(&ctx, feed, filter.into()).await;
        }
        Commands::Refresh { feed_id } => {
            commands::refresh(&ctx, feed_id).await;
        }
        Commands::Toggle { article_id } => {
            commands::toggle_read(&ctx, article_id).await;
        }
        Commands::ReadAll => {
            commands::read_all(&ctx).await;
        }
        Commands::Theme => {
            commands::toggle_theme(&ctx);
        }
    }

    Ok(())
}
