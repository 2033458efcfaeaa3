pub mod article;
pub mod client;
pub mod config;
pub mod error;
pub mod http;

pub use article::{Article, ArticleDraft, ArticleStore, ArticleStorer, StoreError};
pub use error::RestError;
