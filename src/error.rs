use std::error::Error;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::{article::StoreError, http::validation::ValidationErrors};

#[derive(Debug, Error)]
pub enum RestError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Error encountered reading request body")]
    Body(#[from] JsonRejection),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::Validation(_) => StatusCode::BAD_REQUEST,
            RestError::Body(rejection) => rejection.status(),
            RestError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            RestError::Store(StoreError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        error!("{}: {:?}", self, self.source());

        let status = self.status();
        let payload = match &self {
            RestError::Validation(errors) => {
                json!({"message": self.to_string(), "errors": errors.messages()})
            }
            RestError::Body(rejection) => {
                json!({"message": self.to_string(), "errors": [rejection.body_text()]})
            }
            RestError::Store(_) => json!({"message": self.to_string()}),
        };

        (status, Json(payload)).into_response()
    }
}
