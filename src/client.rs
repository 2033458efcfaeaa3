use reqwest::{Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::http::{
    response::{ArticleResponse, HealthResponse},
    validation::CreateArticleRequest,
};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Error sending request to news server")]
    Request(#[from] reqwest::Error),

    #[error("Invalid server URL")]
    Url(#[from] url::ParseError),

    #[error("Article not found")]
    NotFound,

    #[error("News server responded with {status}: {message}")]
    Status { status: u16, message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Thin HTTP client for the news server.
///
/// The base URL is joined with relative paths, so a base carrying a path
/// prefix needs a trailing slash.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl NewsClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = self.base_url.join("health")?;
        decode(self.http.get(url).send().await?).await
    }

    pub async fn create(
        &self,
        request: &CreateArticleRequest,
    ) -> Result<ArticleResponse, ClientError> {
        let url = self.base_url.join("articles")?;
        debug!("POST {}", url);
        decode(self.http.post(url).json(request).send().await?).await
    }

    pub async fn get(&self, id: Uuid) -> Result<ArticleResponse, ClientError> {
        let url = self.base_url.join(&format!("articles/{id}"))?;
        debug!("GET {}", url);
        decode(self.http.get(url).send().await?).await
    }

    pub async fn list(&self) -> Result<Vec<ArticleResponse>, ClientError> {
        let url = self.base_url.join("articles")?;
        debug!("GET {}", url);
        decode(self.http.get(url).send().await?).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound);
    }

    if !status.is_success() {
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status.canonical_reason().unwrap_or("unknown").to_string(),
        };
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn article_json(id: Uuid, title: &str) -> serde_json::Value {
        json!({
            "id": id.to_string(),
            "author": "A",
            "title": title,
            "summary": "S",
            "content": "C",
            "source": "https://e.org/",
            "tags": ["x"],
            "created_at": "2024-05-01T12:30:00Z",
            "updated_at": "2024-05-01T12:30:00Z",
            "deleted_at": null,
        })
    }

    #[tokio::test]
    async fn test_create_posts_json() {
        let mut server = mockito::Server::new_async().await;
        let id = Uuid::new_v4();

        let mock = server
            .mock("POST", "/articles")
            .match_body(mockito::Matcher::PartialJson(json!({"title": "T"})))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(article_json(id, "T").to_string())
            .create_async()
            .await;

        let client = NewsClient::new(&server.url()).unwrap();
        let request = CreateArticleRequest {
            author: "A".to_string(),
            title: "T".to_string(),
            summary: "S".to_string(),
            content: "C".to_string(),
            tags: vec!["x".to_string()],
            source: "https://e.org".to_string(),
            ..Default::default()
        };

        let created = client.create(&request).await.unwrap();

        assert_eq!(created.id, id);
        assert_eq!(created.title, "T");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_decodes_articles() {
        let mut server = mockito::Server::new_async().await;
        let (first, second) = (Uuid::new_v4(), Uuid::new_v4());

        server
            .mock("GET", "/articles")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!([article_json(first, "one"), article_json(second, "two")]).to_string())
            .create_async()
            .await;

        let client = NewsClient::new(&server.url()).unwrap();
        let ids: Vec<Uuid> = client.list().await.unwrap().iter().map(|a| a.id).collect();

        assert_eq!(ids, vec![first, second]);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut server = mockito::Server::new_async().await;
        let id = Uuid::new_v4();

        server
            .mock("GET", format!("/articles/{id}").as_str())
            .with_status(404)
            .with_body(r#"{"message": "not found"}"#)
            .create_async()
            .await;

        let client = NewsClient::new(&server.url()).unwrap();

        assert!(matches!(client.get(id).await, Err(ClientError::NotFound)));
    }

    #[tokio::test]
    async fn test_error_status_carries_message() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("POST", "/articles")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "invalid request: author cannot be empty"}"#)
            .create_async()
            .await;

        let client = NewsClient::new(&server.url()).unwrap();
        let result = client.create(&CreateArticleRequest::default()).await;

        match result {
            Err(ClientError::Status { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "invalid request: author cannot be empty");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(matches!(
            NewsClient::new("not a url"),
            Err(ClientError::Url(_))
        ));
    }
}
