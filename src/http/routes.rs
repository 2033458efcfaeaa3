use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use derive_more::Constructor;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info};

use crate::{
    article::ArticleStorer,
    error::RestError,
    http::{
        response::{ArticleResponse, HealthResponse},
        validation::{parse_id, CreateArticleRequest},
    },
};

#[derive(Clone, Constructor)]
pub struct AppState {
    store: Arc<dyn ArticleStorer>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/articles", get(list_articles).post(create_article))
        .route("/articles/{id}", get(get_article))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn create_article(
    State(state): State<AppState>,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> Result<impl IntoResponse, RestError> {
    let Json(request) = payload?;
    let draft = request.validate()?;

    let article = state.store.create(draft).await?;
    info!("Created article {} by {}", article.id, article.author);

    Ok((StatusCode::CREATED, Json(ArticleResponse::from(article))))
}

pub async fn get_article(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, RestError> {
    let id = parse_id(&id)?;
    let article = state.store.get(id).await?;

    Ok(Json(ArticleResponse::from(article)))
}

pub async fn list_articles(State(state): State<AppState>) -> Result<impl IntoResponse, RestError> {
    let articles = state.store.list().await?;
    debug!("Listing {} articles", articles.len());

    Ok(Json(
        articles
            .into_iter()
            .map(ArticleResponse::from)
            .collect::<Vec<_>>(),
    ))
}
