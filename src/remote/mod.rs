pub mod http;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{Article, Feed, NewFeed};

pub use http::HttpRemote;

/// Boundary to the remote aggregation service: one method per server
/// capability, each a single request/response round trip.
///
/// No method retries; a rejection carries the server's detail string
/// when one was supplied, and callers fall back to a fixed message
/// otherwise.
#[async_trait]
pub trait Remote {
    async fn list_feeds(&self) -> Result<Vec<Feed>>;
    async fn create_feed(&self, feed: &NewFeed) -> Result<Feed>;
    async fn delete_feed(&self, id: i64) -> Result<Feed>;
    /// Ask the service to re-fetch the feed's source; returns the
    /// articles newly available for that feed.
    async fn refresh_feed(&self, id: i64) -> Result<Vec<Article>>;
    async fn feed_articles(&self, id: i64) -> Result<Vec<Article>>;
    async fn list_articles(&self) -> Result<Vec<Article>>;
    async fn update_article(&self, id: i64, is_read: bool) -> Result<Article>;
    async fn mark_read(&self, id: i64) -> Result<Article>;
    async fn mark_unread(&self, id: i64) -> Result<Article>;
}
