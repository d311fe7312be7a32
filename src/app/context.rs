use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::prefs::Preferences;
use crate::remote::http::HttpRemote;
use crate::remote::Remote;
use crate::store::{AppState, StateStore};

/// Wires together the pieces every operation needs: the canonical state
/// store, the remote service boundary, and the durable preferences.
///
/// Constructed once at process start and passed by reference; nothing
/// reaches the store through ambient globals.
pub struct AppContext {
    pub store: StateStore,
    pub remote: Arc<dyn Remote + Send + Sync>,
    pub prefs: Preferences,
}

impl AppContext {
    pub fn new(config: &Config) -> Result<Self> {
        let remote: Arc<dyn Remote + Send + Sync> = Arc::new(HttpRemote::new(config)?);
        let prefs = Preferences::open()?;
        Ok(Self::with_remote(remote, prefs))
    }

    /// Build a context around an arbitrary remote, seeding the store's
    /// dark-mode flag from the given preferences.
    pub fn with_remote(remote: Arc<dyn Remote + Send + Sync>, prefs: Preferences) -> Self {
        let initial = AppState {
            dark_mode: prefs.dark_mode(),
            ..AppState::default()
        };
        Self {
            store: StateStore::new(initial),
            remote,
            prefs,
        }
    }
}
