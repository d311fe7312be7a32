//! # Freshet
//!
//! A client-side reading application for a remote feed-aggregation
//! service: it tracks subscribed feeds and the articles harvested from
//! them, optimistically mirroring every mutation against the service.
//!
//! ## Architecture
//!
//! ```text
//! CLI → Sync operations → Remote client
//!              ↓
//!         State store → projections → CLI output
//! ```
//!
//! Reads flow one way out of the store; writes flow one way through the
//! synchronization operations and the remote boundary back into the
//! store. The view never touches the store directly.
//!
//! - [`store`]: the single source of truth (snapshot, action set, reducer)
//! - [`sync`]: operations that call the service and fold results into the store
//! - [`remote`]: typed request/response boundary to the service
//! - [`domain`]: `Feed` and `Article` value shapes
//!
//! ## Quick Start
//!
//! ```bash
//! # Subscribe to a feed
//! freshet add https://blog.rust-lang.org/feed.xml
//!
//! # List feeds with unread counts
//! freshet feeds
//!
//! # Refresh everything
//! freshet refresh
//!
//! # Show unread articles
//! freshet articles --filter unread
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together all components:
/// state store, remote client, preferences.
pub mod app;

/// Command-line interface using clap.
///
/// Defines the CLI structure and subcommands:
/// - `add <url>` - Subscribe to a feed
/// - `remove <feed-id>` - Unsubscribe a feed
/// - `feeds` / `articles` - List collections
/// - `refresh [feed-id]` - Refresh one or all feeds
/// - `toggle <article-id>` / `read-all` - Read-state changes
/// - `theme` - Toggle dark mode
pub mod cli;

/// Configuration loaded from `~/.config/freshet/config.toml`:
/// service base URL and request timeout.
pub mod config;

/// Core domain models.
///
/// - [`Feed`](domain::Feed): a subscribed source, identified by the service
/// - [`Article`](domain::Article): one item belonging to exactly one feed
pub mod domain;

/// Durable client-local preferences (the dark-mode flag).
pub mod prefs;

/// Typed boundary to the aggregation service.
///
/// - [`Remote`](remote::Remote): async trait, one method per capability
/// - [`HttpRemote`](remote::HttpRemote): reqwest-based implementation
pub mod remote;

/// The canonical in-memory state.
///
/// - [`AppState`](store::AppState): one snapshot of feeds, articles, flags
/// - [`Action`](store::Action): the closed mutation set
/// - [`StateStore`](store::StateStore): single-owner handle serializing mutations
pub mod store;

/// Synchronization operations: load, add, remove, refresh (one or all),
/// read-state changes. Each absorbs failures into the store's error
/// field rather than propagating them.
pub mod sync;
