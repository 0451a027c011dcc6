//! Shared response envelope types for API handlers.
//!
//! Successful responses use the `{ "status": "success", "message": ... }`
//! envelope. Use [`Envelope`] instead of ad-hoc
//! `serde_json::json!({ "status": ... })` to get compile-time type safety
//! and consistent serialization.

use serde::Serialize;

/// Standard `{ "status": "success", "message": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: &'static str,
    pub message: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(message: T) -> Self {
        Self {
            status: "success",
            message,
        }
    }
}

/// Bare `{ "status": "success" }` body for operations with no payload.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}
