use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::article::Article;

/// Transport form of an [`Article`]. Timestamps serialize as RFC 3339 in UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub id: Uuid,
    pub author: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub source: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            author: article.author,
            title: article.title,
            summary: article.summary,
            content: article.content,
            source: article.source.into(),
            tags: article.tags,
            created_at: article.created_at,
            updated_at: article.updated_at,
            deleted_at: article.deleted_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}
