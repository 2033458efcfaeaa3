// HTTP surface over the article store

pub mod response;
pub mod routes;
pub mod server;
pub mod validation;

pub use routes::{router, AppState};
pub use server::HttpServer;
