use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Article '{0}' not found")]
    NotFound(Uuid),

    // The in-memory store never produces this; it exists for backends that can fail.
    #[error("Article store failure: {0}")]
    Internal(String),
}
