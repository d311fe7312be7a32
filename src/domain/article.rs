use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One syndicated item belonging to exactly one feed.
///
/// Every field except `is_read` is owned by the service and refreshed
/// wholesale; `is_read` is the one piece of state the client mutates
/// through a direct user action, so a stored copy is authoritative for
/// that flag until an explicit update replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub feed_id: i64,
    pub title: String,
    pub link: String,
    pub summary: String,
    /// Publication date exactly as the service relays it from the
    /// upstream feed; may be empty or in any of several formats.
    pub published: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_read: bool,
}

impl Article {
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }

    /// Best-effort parse of the free-form `published` string.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.published)
            .or_else(|_| DateTime::parse_from_rfc2822(&self.published))
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| self.published.parse::<DateTime<Utc>>().ok())
    }
}

/// Body of a `PATCH /items/{id}` request.
#[derive(Debug, Clone, Serialize)]
pub struct ReadFlag {
    pub is_read: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(published: &str) -> Article {
        Article {
            id: 1,
            feed_id: 1,
            title: "A headline".into(),
            link: "https://example.com/a".into(),
            summary: "Summary".into(),
            published: published.into(),
            image_url: None,
            is_read: false,
        }
    }

    #[test]
    fn test_published_at_rfc2822() {
        let a = article("Tue, 10 Jun 2025 04:00:00 GMT");
        assert!(a.published_at().is_some());
    }

    #[test]
    fn test_published_at_rfc3339() {
        let a = article("2025-06-10T04:00:00Z");
        assert!(a.published_at().is_some());
    }

    #[test]
    fn test_published_at_empty() {
        assert!(article("").published_at().is_none());
    }

    #[test]
    fn test_published_at_garbage() {
        assert!(article("yesterday-ish").published_at().is_none());
    }

    #[test]
    fn test_display_title_without_title() {
        let mut a = article("");
        a.title = String::new();
        assert_eq!(a.display_title(), "(Untitled)");
    }

    #[test]
    fn test_deserialize_defaults() {
        let a: Article = serde_json::from_str(
            r#"{"id":7,"feed_id":2,"title":"t","link":"l","summary":"s","published":""}"#,
        )
        .unwrap();
        assert_eq!(a.image_url, None);
        assert!(!a.is_read);
    }
}
