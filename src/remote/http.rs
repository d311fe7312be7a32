use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::app::error::{FreshetError, Result};
use crate::config::Config;
use crate::domain::{Article, Feed, NewFeed, ReadFlag};
use crate::remote::Remote;

/// reqwest-backed implementation of the service boundary.
pub struct HttpRemote {
    client: Client,
    base: Url,
}

impl HttpRemote {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("freshet/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut base = config.server_url.clone();
        // Relative joins below need a directory-style base path.
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base)?;

        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(FreshetError::Api {
                status: status.as_u16(),
                detail: extract_detail(&body),
            });
        }
        Ok(response.json().await?)
    }
}

/// Pull the human-readable `detail` string out of a service error body.
fn extract_detail(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(String::from)
}

#[async_trait]
impl Remote for HttpRemote {
    async fn list_feeds(&self) -> Result<Vec<Feed>> {
        let url = self.endpoint("feeds/")?;
        Self::decode(self.client.get(url).send().await?).await
    }

    async fn create_feed(&self, feed: &NewFeed) -> Result<Feed> {
        let url = self.endpoint("feeds/")?;
        Self::decode(self.client.post(url).json(feed).send().await?).await
    }

    async fn delete_feed(&self, id: i64) -> Result<Feed> {
        let url = self.endpoint(&format!("feeds/{id}"))?;
        Self::decode(self.client.delete(url).send().await?).await
    }

    async fn refresh_feed(&self, id: i64) -> Result<Vec<Article>> {
        let url = self.endpoint(&format!("feeds/{id}/refresh"))?;
        Self::decode(self.client.post(url).send().await?).await
    }

    async fn feed_articles(&self, id: i64) -> Result<Vec<Article>> {
        let url = self.endpoint(&format!("feeds/{id}/items"))?;
        Self::decode(self.client.get(url).send().await?).await
    }

    async fn list_articles(&self) -> Result<Vec<Article>> {
        let url = self.endpoint("items")?;
        Self::decode(self.client.get(url).send().await?).await
    }

    async fn update_article(&self, id: i64, is_read: bool) -> Result<Article> {
        let url = self.endpoint(&format!("items/{id}"))?;
        let body = ReadFlag { is_read };
        Self::decode(self.client.patch(url).json(&body).send().await?).await
    }

    async fn mark_read(&self, id: i64) -> Result<Article> {
        let url = self.endpoint(&format!("items/{id}/mark-read"))?;
        Self::decode(self.client.post(url).send().await?).await
    }

    async fn mark_unread(&self, id: i64) -> Result<Article> {
        let url = self.endpoint(&format!("items/{id}/mark-unread"))?;
        Self::decode(self.client.post(url).send().await?).await
    }
}
