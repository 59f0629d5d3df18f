//! OpenAPI schema wrappers for error responses.
//!
//! The domain error type stays free of documentation framework concerns;
//! these wrappers describe the shared wire envelope for the generated
//! document.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Inner error object of the shared envelope.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBodySchema {
    /// A message string, or an ordered array of per-field messages for
    /// validation failures.
    #[schema(value_type = Object)]
    pub message: Value,
}

/// Shared error envelope: `{"error":{"message":…}}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorEnvelopeSchema {
    pub error: ErrorBodySchema,
}
