//! Analyzer abstraction for the outbound tone analysis service
//!
//! This module defines the trait the HTTP handlers talk to, keeping them
//! independent of the concrete upstream client.

use crate::models::tone::{AnalyzeRequest, ToneResponse};
use async_trait::async_trait;
use thiserror::Error;

/// Error types for analyzer operations
///
/// Upstream non-success statuses are not errors; they surface as normal
/// `ToneResponse` values carrying that status code.
#[derive(Debug, Error)]
pub enum ToneError {
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

/// Trait for tone analysis services
#[async_trait]
pub trait ToneAnalyzer: Send + Sync {
    /// Perform a single analysis round trip
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<ToneResponse, ToneError>;

    /// Get the service name, for logs and status endpoints
    fn service_name(&self) -> &str;
}
