use std::sync::Mutex;

use crate::domain::{Article, Feed};

/// Read filter for the article projection, mirroring the view's
/// all/unread/read toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadFilter {
    #[default]
    All,
    Unread,
    Read,
}

impl ReadFilter {
    fn matches(self, article: &Article) -> bool {
        match self {
            ReadFilter::All => true,
            ReadFilter::Unread => !article.is_read,
            ReadFilter::Read => article.is_read,
        }
    }
}

/// One complete snapshot of client-side state.
///
/// Feeds and articles keep insertion order. The snapshot is the single
/// owner of both collections; anything derived (filtered lists, counts)
/// is recomputed from a snapshot on read and never cached across a
/// mutation.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub feeds: Vec<Feed>,
    pub articles: Vec<Article>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_feed: Option<i64>,
    pub dark_mode: bool,
}

/// The closed set of state mutations. Every variant is applied as a
/// pure transition by [`AppState::apply`]; none performs I/O.
#[derive(Debug, Clone)]
pub enum Action {
    SetLoading(bool),
    SetError(Option<String>),
    SetFeeds(Vec<Feed>),
    AddFeed(Feed),
    RemoveFeed(i64),
    SetArticles(Vec<Article>),
    AddArticles(Vec<Article>),
    UpdateArticle(Article),
    SetSelectedFeed(Option<i64>),
    ToggleDarkMode,
}

impl AppState {
    /// Pure state transition: consumes the old snapshot, returns the new
    /// one. Callers are responsible for serializing applications; the
    /// transition itself never blocks or touches the outside world.
    pub fn apply(mut self, action: Action) -> AppState {
        match action {
            Action::SetLoading(loading) => {
                self.loading = loading;
            }
            Action::SetError(error) => {
                // A set message also terminates the in-flight indicator,
                // so a settled operation never shows both.
                if error.is_some() {
                    self.loading = false;
                }
                self.error = error;
            }
            Action::SetFeeds(feeds) => {
                self.feeds = feeds;
            }
            Action::AddFeed(feed) => {
                // The service is the uniqueness authority; a duplicate id
                // here is a caller bug. Keep the first copy.
                if self.feeds.iter().any(|f| f.id == feed.id) {
                    tracing::warn!(feed_id = feed.id, "ignoring duplicate feed");
                } else {
                    self.feeds.push(feed);
                }
            }
            Action::RemoveFeed(id) => {
                self.feeds.retain(|f| f.id != id);
                self.articles.retain(|a| a.feed_id != id);
                if self.selected_feed == Some(id) {
                    self.selected_feed = None;
                }
            }
            Action::SetArticles(articles) => {
                self.articles = articles;
            }
            Action::AddArticles(batch) => {
                // Dedup-merge: an id we already hold wins outright, so a
                // refresh can never revert a locally-set read flag. New
                // articles append in batch order.
                for article in batch {
                    if !self.articles.iter().any(|a| a.id == article.id) {
                        self.articles.push(article);
                    }
                }
            }
            Action::UpdateArticle(article) => {
                if let Some(slot) = self.articles.iter_mut().find(|a| a.id == article.id) {
                    *slot = article;
                }
            }
            Action::SetSelectedFeed(id) => {
                self.selected_feed = id;
            }
            Action::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
        }
        self
    }

    /// Articles visible under the current selection and the given read
    /// filter, in stored order.
    pub fn visible_articles(&self, filter: ReadFilter) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| match self.selected_feed {
                Some(feed_id) => a.feed_id == feed_id,
                None => true,
            })
            .filter(|a| filter.matches(a))
            .collect()
    }

    pub fn feed(&self, id: i64) -> Option<&Feed> {
        self.feeds.iter().find(|f| f.id == id)
    }

    pub fn article(&self, id: i64) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn article_count(&self, feed_id: i64) -> usize {
        self.articles.iter().filter(|a| a.feed_id == feed_id).count()
    }

    pub fn unread_count(&self, feed_id: i64) -> usize {
        self.articles
            .iter()
            .filter(|a| a.feed_id == feed_id && !a.is_read)
            .count()
    }

    pub fn unread_total(&self) -> usize {
        self.articles.iter().filter(|a| !a.is_read).count()
    }
}

/// Single-owner handle over the snapshot.
///
/// Mutations go through [`dispatch`](StateStore::dispatch), which holds
/// the lock for the whole transition, so no reader or later mutation
/// ever observes a half-applied snapshot. Results of concurrent
/// operations land here one at a time in completion order.
pub struct StateStore {
    state: Mutex<AppState>,
}

impl StateStore {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: Mutex::new(initial),
        }
    }

    pub fn dispatch(&self, action: Action) {
        let mut guard = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let next = std::mem::take(&mut *guard).apply(action);
        *guard = next;
    }

    pub fn snapshot(&self) -> AppState {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(id: i64) -> Feed {
        Feed {
            id,
            url: format!("https://example.com/{id}.xml"),
            title: format!("Feed {id}"),
        }
    }

    fn article(id: i64, feed_id: i64, is_read: bool) -> Article {
        Article {
            id,
            feed_id,
            title: format!("Article {id}"),
            link: format!("https://example.com/{id}"),
            summary: String::new(),
            published: String::new(),
            image_url: None,
            is_read,
        }
    }

    #[test]
    fn test_feed_ids_stay_unique() {
        let state = AppState::default()
            .apply(Action::AddFeed(feed(1)))
            .apply(Action::AddFeed(feed(2)))
            .apply(Action::AddFeed(feed(1)));
        assert_eq!(state.feeds.len(), 2);
        assert_eq!(state.feeds[0].id, 1);
        assert_eq!(state.feeds[1].id, 2);
    }

    #[test]
    fn test_article_ids_stay_unique() {
        let state = AppState::default()
            .apply(Action::AddArticles(vec![
                article(1, 1, false),
                article(2, 1, false),
            ]))
            .apply(Action::AddArticles(vec![
                article(2, 1, false),
                article(3, 1, false),
            ]));
        let ids: Vec<i64> = state.articles.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_articles_is_idempotent() {
        let batch = vec![article(1, 1, false), article(2, 1, false)];
        let once = AppState::default().apply(Action::AddArticles(batch.clone()));
        let twice = once.clone().apply(Action::AddArticles(batch));
        assert_eq!(once.articles, twice.articles);
    }

    #[test]
    fn test_refresh_never_regresses_read_state() {
        let state = AppState::default()
            .apply(Action::AddArticles(vec![article(5, 1, false)]))
            .apply(Action::UpdateArticle(article(5, 1, true)))
            .apply(Action::AddArticles(vec![article(5, 1, false)]));
        assert!(state.articles[0].is_read);
        assert_eq!(state.articles.len(), 1);
    }

    #[test]
    fn test_remove_feed_cascades_and_clears_selection() {
        let state = AppState::default()
            .apply(Action::AddFeed(feed(1)))
            .apply(Action::AddFeed(feed(2)))
            .apply(Action::AddArticles(vec![
                article(10, 1, false),
                article(11, 2, false),
                article(12, 1, true),
            ]))
            .apply(Action::SetSelectedFeed(Some(1)))
            .apply(Action::RemoveFeed(1));
        assert!(state.feeds.iter().all(|f| f.id != 1));
        assert!(state.articles.iter().all(|a| a.feed_id != 1));
        assert_eq!(state.articles.len(), 1);
        assert_eq!(state.selected_feed, None);
    }

    #[test]
    fn test_remove_last_feed_empties_everything() {
        let state = AppState::default()
            .apply(Action::AddFeed(feed(1)))
            .apply(Action::RemoveFeed(1));
        assert!(state.feeds.is_empty());
        assert!(state.articles.is_empty());
        assert_eq!(state.selected_feed, None);
    }

    #[test]
    fn test_remove_feed_keeps_unrelated_selection() {
        let state = AppState::default()
            .apply(Action::AddFeed(feed(1)))
            .apply(Action::AddFeed(feed(2)))
            .apply(Action::SetSelectedFeed(Some(2)))
            .apply(Action::RemoveFeed(1));
        assert_eq!(state.selected_feed, Some(2));
    }

    #[test]
    fn test_set_error_forces_loading_false() {
        let state = AppState::default()
            .apply(Action::SetLoading(true))
            .apply(Action::SetError(Some("Failed to load feeds".into())));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to load feeds"));
    }

    #[test]
    fn test_clearing_error_leaves_loading_alone() {
        let state = AppState::default()
            .apply(Action::SetLoading(true))
            .apply(Action::SetError(None));
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_update_unknown_article_is_a_noop() {
        let state = AppState::default()
            .apply(Action::AddArticles(vec![article(1, 1, false)]))
            .apply(Action::UpdateArticle(article(99, 1, true)));
        assert_eq!(state.articles.len(), 1);
        assert_eq!(state.articles[0].id, 1);
    }

    #[test]
    fn test_set_feeds_replaces_wholesale() {
        let state = AppState::default()
            .apply(Action::AddFeed(feed(1)))
            .apply(Action::SetFeeds(vec![feed(3), feed(4)]));
        let ids: Vec<i64> = state.feeds.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_stale_selection_yields_empty_view() {
        let state = AppState::default()
            .apply(Action::AddArticles(vec![article(1, 1, false)]))
            .apply(Action::SetSelectedFeed(Some(42)));
        assert!(state.visible_articles(ReadFilter::All).is_empty());
    }

    #[test]
    fn test_visible_articles_filters_selection_and_read_state() {
        let state = AppState::default()
            .apply(Action::AddArticles(vec![
                article(1, 1, false),
                article(2, 1, true),
                article(3, 2, false),
            ]))
            .apply(Action::SetSelectedFeed(Some(1)));
        let unread: Vec<i64> = state
            .visible_articles(ReadFilter::Unread)
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(unread, vec![1]);
        let read: Vec<i64> = state
            .visible_articles(ReadFilter::Read)
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(read, vec![2]);
        assert_eq!(state.visible_articles(ReadFilter::All).len(), 2);
    }

    #[test]
    fn test_counts() {
        let state = AppState::default().apply(Action::AddArticles(vec![
            article(1, 1, false),
            article(2, 1, true),
            article(3, 2, false),
        ]));
        assert_eq!(state.article_count(1), 2);
        assert_eq!(state.unread_count(1), 1);
        assert_eq!(state.unread_total(), 2);
    }

    #[test]
    fn test_toggle_dark_mode_round_trips() {
        let state = AppState::default().apply(Action::ToggleDarkMode);
        assert!(state.dark_mode);
        let state = state.apply(Action::ToggleDarkMode);
        assert!(!state.dark_mode);
    }

    #[test]
    fn test_store_serializes_dispatches() {
        let store = StateStore::default();
        store.dispatch(Action::AddFeed(feed(1)));
        store.dispatch(Action::AddArticles(vec![article(1, 1, false)]));
        let snap = store.snapshot();
        assert_eq!(snap.feeds.len(), 1);
        assert_eq!(snap.articles.len(), 1);
    }
}
