pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::{ArticleStore, ArticleStorer};
pub use types::{Article, ArticleDraft};
