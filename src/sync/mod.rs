//! Synchronization operations.
//!
//! Each operation follows the same discipline: raise the loading flag,
//! make a single round trip through the [`Remote`](crate::remote::Remote)
//! boundary, fold the outcome into the store, and drop the loading flag
//! on both paths. Failures are absorbed into the store's error field
//! and never returned to the caller; the message is the server's detail
//! string when one was supplied, otherwise a fixed per-operation
//! fallback.
//!
//! Operations may overlap: their results are serialized into the store
//! one mutation at a time in completion order, and the shared loading
//! flag carries no ordering guarantee across overlapping operations.

use futures::future::join_all;
use url::Url;

use crate::app::error::FreshetError;
use crate::app::AppContext;
use crate::domain::NewFeed;
use crate::store::{Action, StateStore};

const LOAD_FEEDS_FAILED: &str = "Failed to load feeds";
const LOAD_ARTICLES_FAILED: &str = "Failed to load articles";
const ADD_FEED_FAILED: &str = "Failed to add feed";
const REMOVE_FEED_FAILED: &str = "Failed to remove feed";
const REFRESH_FEED_FAILED: &str = "Failed to refresh feed";
const REFRESH_ALL_FAILED: &str = "Failed to refresh feeds";
const UPDATE_ARTICLE_FAILED: &str = "Failed to update article status";

fn fail(store: &StateStore, err: &FreshetError, fallback: &str) {
    tracing::warn!(error = %err, fallback, "operation failed");
    let message = err
        .detail()
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string());
    store.dispatch(Action::SetError(Some(message)));
}

/// Reload the full feed collection from the service.
pub async fn load_feeds(ctx: &AppContext) {
    ctx.store.dispatch(Action::SetLoading(true));
    match ctx.remote.list_feeds().await {
        Ok(feeds) => {
            ctx.store.dispatch(Action::SetFeeds(feeds));
            ctx.store.dispatch(Action::SetError(None));
        }
        Err(e) => fail(&ctx.store, &e, LOAD_FEEDS_FAILED),
    }
    ctx.store.dispatch(Action::SetLoading(false));
}

/// Reload the full article collection from the service.
pub async fn load_articles(ctx: &AppContext) {
    ctx.store.dispatch(Action::SetLoading(true));
    match ctx.remote.list_articles().await {
        Ok(articles) => {
            ctx.store.dispatch(Action::SetArticles(articles));
            ctx.store.dispatch(Action::SetError(None));
        }
        Err(e) => fail(&ctx.store, &e, LOAD_ARTICLES_FAILED),
    }
    ctx.store.dispatch(Action::SetLoading(false));
}

/// Subscribe to a new feed, then best-effort refresh it so its articles
/// show up right away. The secondary refresh failing does not fail the
/// subscription.
pub async fn add_feed(ctx: &AppContext, url: &str, title: Option<&str>) {
    ctx.store.dispatch(Action::SetLoading(true));

    if let Err(e) = Url::parse(url) {
        fail(&ctx.store, &FreshetError::from(e), ADD_FEED_FAILED);
        ctx.store.dispatch(Action::SetLoading(false));
        return;
    }

    let body = NewFeed {
        url: url.to_string(),
        title: title.map(str::to_string),
    };

    match ctx.remote.create_feed(&body).await {
        Ok(feed) => {
            let feed_id = feed.id;
            ctx.store.dispatch(Action::AddFeed(feed));
            ctx.store.dispatch(Action::SetError(None));

            match ctx.remote.refresh_feed(feed_id).await {
                Ok(batch) => ctx.store.dispatch(Action::AddArticles(batch)),
                Err(e) => {
                    tracing::debug!(feed_id, error = %e, "initial refresh of new feed failed")
                }
            }
        }
        Err(e) => fail(&ctx.store, &e, ADD_FEED_FAILED),
    }
    ctx.store.dispatch(Action::SetLoading(false));
}

/// Unsubscribe a feed; on success its articles are removed with it.
pub async fn remove_feed(ctx: &AppContext, feed_id: i64) {
    ctx.store.dispatch(Action::SetLoading(true));
    match ctx.remote.delete_feed(feed_id).await {
        Ok(_) => {
            ctx.store.dispatch(Action::RemoveFeed(feed_id));
            ctx.store.dispatch(Action::SetError(None));
        }
        Err(e) => fail(&ctx.store, &e, REMOVE_FEED_FAILED),
    }
    ctx.store.dispatch(Action::SetLoading(false));
}

/// Ask the service to re-fetch one feed and merge whatever comes back.
pub async fn refresh_feed(ctx: &AppContext, feed_id: i64) {
    ctx.store.dispatch(Action::SetLoading(true));
    match ctx.remote.refresh_feed(feed_id).await {
        Ok(batch) => {
            tracing::debug!(feed_id, count = batch.len(), "refreshed feed");
            ctx.store.dispatch(Action::AddArticles(batch));
            ctx.store.dispatch(Action::SetError(None));
        }
        Err(e) => fail(&ctx.store, &e, REFRESH_FEED_FAILED),
    }
    ctx.store.dispatch(Action::SetLoading(false));
}

/// Refresh every known feed at once.
///
/// All requests fan out concurrently with no throttling and every one
/// is awaited (settle-all): each success merges its batch, and one
/// fixed error is reported after everything settles if any feed failed.
/// Articles from the feeds that succeeded stay merged either way.
pub async fn refresh_all(ctx: &AppContext) {
    ctx.store.dispatch(Action::SetLoading(true));

    let feed_ids: Vec<i64> = ctx.store.snapshot().feeds.iter().map(|f| f.id).collect();

    let results = join_all(feed_ids.into_iter().map(|id| async move {
        (id, ctx.remote.refresh_feed(id).await)
    }))
    .await;

    let mut failed = 0usize;
    for (feed_id, result) in results {
        match result {
            Ok(batch) => {
                tracing::debug!(feed_id, count = batch.len(), "refreshed feed");
                ctx.store.dispatch(Action::AddArticles(batch));
            }
            Err(e) => {
                failed += 1;
                tracing::warn!(feed_id, error = %e, "refresh failed");
            }
        }
    }

    if failed > 0 {
        ctx.store
            .dispatch(Action::SetError(Some(REFRESH_ALL_FAILED.to_string())));
    } else {
        ctx.store.dispatch(Action::SetError(None));
    }
    ctx.store.dispatch(Action::SetLoading(false));
}

/// Flip one article's read state, server first: the store only changes
/// when the service confirms with the updated record.
pub async fn toggle_read(ctx: &AppContext, article_id: i64) {
    ctx.store.dispatch(Action::SetLoading(true));

    let currently_read = match ctx.store.snapshot().article(article_id) {
        Some(article) => article.is_read,
        None => {
            fail(
                &ctx.store,
                &FreshetError::ArticleNotFound(article_id),
                UPDATE_ARTICLE_FAILED,
            );
            ctx.store.dispatch(Action::SetLoading(false));
            return;
        }
    };

    let result = if currently_read {
        ctx.remote.mark_unread(article_id).await
    } else {
        ctx.remote.mark_read(article_id).await
    };

    match result {
        Ok(article) => {
            ctx.store.dispatch(Action::UpdateArticle(article));
            ctx.store.dispatch(Action::SetError(None));
        }
        Err(e) => fail(&ctx.store, &e, UPDATE_ARTICLE_FAILED),
    }
    ctx.store.dispatch(Action::SetLoading(false));
}

/// Mark every currently unread article read, one request at a time.
/// Later articles are still attempted after an earlier failure; a
/// single error is reported at the end if any request failed.
pub async fn mark_all_read(ctx: &AppContext) {
    ctx.store.dispatch(Action::SetLoading(true));

    let unread: Vec<i64> = ctx
        .store
        .snapshot()
        .articles
        .iter()
        .filter(|a| !a.is_read)
        .map(|a| a.id)
        .collect();

    let mut failed = 0usize;
    for article_id in unread {
        match ctx.remote.update_article(article_id, true).await {
            Ok(article) => ctx.store.dispatch(Action::UpdateArticle(article)),
            Err(e) => {
                failed += 1;
                tracing::warn!(article_id, error = %e, "mark-read failed");
            }
        }
    }

    if failed > 0 {
        ctx.store
            .dispatch(Action::SetError(Some(UPDATE_ARTICLE_FAILED.to_string())));
    } else {
        ctx.store.dispatch(Action::SetError(None));
    }
    ctx.store.dispatch(Action::SetLoading(false));
}

/// Narrow the article view to one feed, or clear the filter. A stale id
/// simply yields an empty view.
pub fn select_feed(ctx: &AppContext, feed_id: Option<i64>) {
    ctx.store.dispatch(Action::SetSelectedFeed(feed_id));
}

/// Clear the active error message without touching feed or article data.
pub fn dismiss_error(ctx: &AppContext) {
    ctx.store.dispatch(Action::SetError(None));
}

/// Flip the dark-mode preference and persist it. Returns the new value.
/// A persistence failure keeps the in-memory flag and is only logged.
pub fn toggle_dark_mode(ctx: &AppContext) -> bool {
    ctx.store.dispatch(Action::ToggleDarkMode);
    let dark = ctx.store.snapshot().dark_mode;
    if let Err(e) = ctx.prefs.set_dark_mode(dark) {
        tracing::warn!(error = %e, "failed to persist theme preference");
    }
    dark
}
