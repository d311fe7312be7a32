pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};

use crate::store::ReadFilter;

#[derive(Parser)]
#[command(name = "freshet")]
#[command(about = "A reading client for a remote feed-aggregation service", long_about = None)]
pub struct Cli {
    /// Base URL of the aggregation service (overrides the config file)
    #[arg(short, long, global = true)]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Subscribe to a new feed
    Add {
        /// URL of the feed's source
        url: String,
        /// Display title for the feed
        #[arg(short, long)]
        title: Option<String>,
    },
    /// Unsubscribe a feed (its articles go with it)
    Remove {
        /// Id of the feed to remove
        feed_id: i64,
    },
    /// List subscribed feeds with unread counts
    Feeds,
    /// List articles
    Articles {
        /// Only show articles from this feed
        #[arg(long)]
        feed: Option<i64>,
        /// Which articles to show
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
    },
    /// Refresh one feed, or every feed when no id is given
    Refresh {
        /// Id of the feed to refresh
        feed_id: Option<i64>,
    },
    /// Toggle an article between read and unread
    Toggle {
        /// Id of the article
        article_id: i64,
    },
    /// Mark every unread article read
    ReadAll,
    /// Toggle between light and dark theme
    Theme,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FilterArg {
    All,
    Unread,
    Read,
}

impl From<FilterArg> for ReadFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => ReadFilter::All,
            FilterArg::Unread => ReadFilter::Unread,
            FilterArg::Read => ReadFilter::Read,
        }
    }
}
