use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::article::{
    error::StoreError,
    types::{Article, ArticleDraft},
};

/// Storage seam used by the request handlers.
///
/// Every call returns a `Result` so a backend with real failure modes can sit
/// behind the same contract. Dropping the returned future is how a caller
/// abandons an in-flight call.
#[async_trait]
pub trait ArticleStorer: Send + Sync {
    async fn create(&self, draft: ArticleDraft) -> Result<Article, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Article, StoreError>;

    async fn list(&self) -> Result<Vec<Article>, StoreError>;
}

/// In-memory article collection guarded by a single reader-writer lock.
///
/// Writers append under the exclusive lock; readers scan under the shared
/// lock and hand back owned clones, so nothing a caller does to a returned
/// article can reach the stored copy.
#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: RwLock<Vec<Article>>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, draft: ArticleDraft) -> Article {
        let ArticleDraft {
            author,
            title,
            summary,
            content,
            tags,
            source,
            ..
        } = draft;
        let id = Uuid::new_v4();

        let article = {
            let mut articles = self.articles.write();
            // Captured under the write lock so timestamps follow insertion order.
            let now = Utc::now();
            let article = Article {
                id,
                author,
                title,
                summary,
                content,
                tags,
                source,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            };
            articles.push(article.clone());
            article
        };

        debug!("Stored article {}", article.id);
        article
    }

    pub fn get(&self, id: Uuid) -> Result<Article, StoreError> {
        self.articles
            .read()
            .iter()
            .find(|article| article.id == id && article.is_live())
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    pub fn list(&self) -> Vec<Article> {
        self.articles
            .read()
            .iter()
            .filter(|article| article.is_live())
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ArticleStorer for ArticleStore {
    async fn create(&self, draft: ArticleDraft) -> Result<Article, StoreError> {
        Ok(ArticleStore::create(self, draft))
    }

    async fn get(&self, id: Uuid) -> Result<Article, StoreError> {
        ArticleStore::get(self, id)
    }

    async fn list(&self) -> Result<Vec<Article>, StoreError> {
        Ok(ArticleStore::list(self))
    }
}
