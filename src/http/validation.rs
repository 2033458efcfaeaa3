use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::article::ArticleDraft;

/// Wire shape of a create call.
///
/// Every field defaults, whether missing or `null`, so those cases surface as
/// validation errors alongside the other violations instead of as a body
/// rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateArticleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("author cannot be empty")]
    EmptyAuthor,

    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("summary cannot be empty")]
    EmptySummary,

    #[error("content cannot be empty")]
    EmptyContent,

    #[error("at least one tag is required")]
    MissingTags,

    #[error("invalid ID format: '{0}'")]
    InvalidId(String),

    #[error("invalid URL format: '{0}'")]
    InvalidSource(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid request: {}", describe(.0))]
pub struct ValidationErrors(Vec<Violation>);

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl From<Violation> for ValidationErrors {
    fn from(violation: Violation) -> Self {
        Self(vec![violation])
    }
}

pub fn parse_id(raw: &str) -> Result<Uuid, ValidationErrors> {
    Uuid::parse_str(raw.trim()).map_err(|_| Violation::InvalidId(raw.to_string()).into())
}

impl CreateArticleRequest {
    /// Checks every rule and reports all violations together.
    pub fn validate(self) -> Result<ArticleDraft, ValidationErrors> {
        let mut violations = Vec::new();

        let required = [
            (&self.author, Violation::EmptyAuthor),
            (&self.title, Violation::EmptyTitle),
            (&self.summary, Violation::EmptySummary),
            (&self.content, Violation::EmptyContent),
        ];
        for (value, violation) in required {
            if value.trim().is_empty() {
                violations.push(violation);
            }
        }

        if self.tags.is_empty() {
            violations.push(Violation::MissingTags);
        }

        // An empty id is the same as no id.
        let id = match self.id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match Uuid::parse_str(raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    violations.push(Violation::InvalidId(raw.to_string()));
                    None
                }
            },
        };

        let source = match Url::parse(self.source.trim()) {
            Ok(url) => Some(url),
            Err(_) => {
                violations.push(Violation::InvalidSource(self.source.clone()));
                None
            }
        };

        match source {
            Some(source) if violations.is_empty() => Ok(ArticleDraft {
                id,
                author: self.author,
                title: self.title,
                summary: self.summary,
                content: self.content,
                tags: self.tags,
                source,
            }),
            _ => Err(ValidationErrors(violations)),
        }
    }
}

impl TryFrom<CreateArticleRequest> for ArticleDraft {
    type Error = ValidationErrors;

    fn try_from(request: CreateArticleRequest) -> Result<Self, Self::Error> {
        request.validate()
    }
}
