use serde::{Deserialize, Serialize};

/// A subscribed feed as the aggregation service reports it.
///
/// The `id` is assigned by the service on creation and never changes;
/// the client replaces the whole record when the service returns a
/// newer copy rather than mutating individual fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub id: i64,
    pub url: String,
    pub title: String,
}

impl Feed {
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

/// Body of a `POST /feeds/` request.
#[derive(Debug, Clone, Serialize)]
pub struct NewFeed {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
