//! Command handlers: the view layer at the CLI boundary.
//!
//! Handlers drive synchronization operations and then print projections
//! read from a fresh snapshot. They never mutate the store directly,
//! and an error recorded in the store is reported on stderr.

use crate::app::AppContext;
use crate::store::ReadFilter;
use crate::sync;

/// Print the store's active error, if any. Returns true when one was
/// reported.
fn report_error(ctx: &AppContext) -> bool {
    match ctx.store.snapshot().error {
        Some(message) => {
            eprintln!("Error: {message}");
            true
        }
        None => false,
    }
}

pub async fn add_feed(ctx: &AppContext, url: &str, title: Option<&str>) {
    sync::add_feed(ctx, url, title).await;
    if report_error(ctx) {
        return;
    }

    let snap = ctx.store.snapshot();
    if let Some(feed) = snap.feeds.last() {
        println!("Subscribed: {}", feed.display_title());
        println!("Fetched {} articles", snap.article_count(feed.id));
    }
}

pub async fn remove_feed(ctx: &AppContext, feed_id: i64) {
    sync::load_feeds(ctx).await;
    let title = ctx
        .store
        .snapshot()
        .feed(feed_id)
        .map(|f| f.display_title().to_string());

    sync::remove_feed(ctx, feed_id).await;
    if report_error(ctx) {
        return;
    }

    match title {
        Some(title) => println!("Removed feed: {title}"),
        None => println!("Removed feed {feed_id}"),
    }
}

pub async fn list_feeds(ctx: &AppContext) {
    sync::load_feeds(ctx).await;
    sync::load_articles(ctx).await;
    if report_error(ctx) {
        return;
    }

    let snap = ctx.store.snapshot();
    if snap.feeds.is_empty() {
        println!("No feeds");
        return;
    }

    for feed in &snap.feeds {
        println!(
            "{:>4}  {} ({} unread of {})\n      {}",
            feed.id,
            feed.display_title(),
            snap.unread_count(feed.id),
            snap.article_count(feed.id),
            feed.url
        );
    }
}

pub async fn list_articles(ctx: &AppContext, feed: Option<i64>, filter: ReadFilter) {
    sync::load_articles(ctx).await;
    if report_error(ctx) {
        return;
    }
    sync::select_feed(ctx, feed);

    let snap = ctx.store.snapshot();
    let visible = snap.visible_articles(filter);
    if visible.is_empty() {
        println!("No articles");
        return;
    }

    for article in visible {
        let read_marker = if article.is_read { " " } else { "●" };
        let date = article
            .published_at()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "          ".to_string());
        println!(
            "{} {:>5} {} {}",
            read_marker,
            article.id,
            date,
            article.display_title()
        );
    }
}

pub async fn refresh(ctx: &AppContext, feed_id: Option<i64>) {
    let before = {
        sync::load_articles(ctx).await;
        if report_error(ctx) {
            return;
        }
        ctx.store.snapshot().articles.len()
    };

    match feed_id {
        Some(id) => sync::refresh_feed(ctx, id).await,
        None => {
            sync::load_feeds(ctx).await;
            if report_error(ctx) {
                return;
            }
            sync::refresh_all(ctx).await;
        }
    }
    let errored = report_error(ctx);
    if errored && feed_id.is_some() {
        return;
    }

    let after = ctx.store.snapshot().articles.len();
    println!("{} new articles", after - before);
    if errored {
        println!("(some feeds failed to refresh)");
    }
}

pub async fn toggle_read(ctx: &AppContext, article_id: i64) {
    sync::load_articles(ctx).await;
    if report_error(ctx) {
        return;
    }

    sync::toggle_read(ctx, article_id).await;
    if report_error(ctx) {
        return;
    }

    let snap = ctx.store.snapshot();
    if let Some(article) = snap.article(article_id) {
        println!(
            "{}: {}",
            if article.is_read { "Read" } else { "Unread" },
            article.display_title()
        );
    }
}

pub async fn read_all(ctx: &AppContext) {
    sync::load_articles(ctx).await;
    if report_error(ctx) {
        return;
    }
    let unread = ctx.store.snapshot().unread_total();

    sync::mark_all_read(ctx).await;
    if report_error(ctx) {
        return;
    }
    println!("Marked {unread} articles read");
}

pub fn toggle_theme(ctx: &AppContext) {
    let dark = sync::toggle_dark_mode(ctx);
    println!("Theme: {}", if dark { "dark" } else { "light" });
}
