use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// A stored news article.
///
/// `id` and the timestamps are owned by the store; callers only ever see
/// copies of what the store holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub author: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub tags: Vec<String>,
    pub source: Url,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Live articles are the only ones visible to lookups and listings.
    pub fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// Validated input for a new article.
///
/// `id` carries whatever identifier the caller sent. The store discards it
/// and mints its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDraft {
    pub id: Option<Uuid>,
    pub author: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub tags: Vec<String>,
    pub source: Url,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(deleted_at: Option<DateTime<Utc>>) -> Article {
        let now = Utc::now();
        Article {
            id: Uuid::new_v4(),
            author: "A".to_string(),
            title: "T".to_string(),
            summary: "S".to_string(),
            content: "C".to_string(),
            tags: vec!["x".to_string()],
            source: Url::parse("https://e.org").unwrap(),
            created_at: now,
            updated_at: now,
            deleted_at,
        }
    }

    #[test]
    fn test_live_until_deleted() {
        assert!(article(None).is_live());
        assert!(!article(Some(Utc::now())).is_live());
    }
}
