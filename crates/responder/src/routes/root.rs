//! Root endpoint.

use axum::Json;
use serde::Serialize;

/// Message returned by `GET /`.
pub const MESSAGE: &str = "hello world I have changed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Payload {
    pub message: &'static str,
}

impl Default for Payload {
    fn default() -> Self {
        Self { message: MESSAGE }
    }
}

/// GET / — returns the fixed payload.
pub async fn get() -> Json<Payload> {
    Json(Payload::default())
}
