//! API DTOs (Data Transfer Objects)

use serde::Serialize;
use serde_json::Value;

/// GET /moments payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentsView {
    /// Whether the caller holds a valid session (informational only)
    pub is_authenticated: bool,
    /// The stored document, `[]` before the first write
    pub moments: Value,
}
