pub mod article;
pub mod feed;

pub use article::{Article, ReadFlag};
pub use feed::{Feed, NewFeed};
