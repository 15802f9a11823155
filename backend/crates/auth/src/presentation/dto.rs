//! API DTOs (Data Transfer Objects)

use serde::Deserialize;

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Shared login key (absent is treated as a mismatch)
    #[serde(default)]
    pub auth_key: Option<String>,
}

impl LoginRequest {
    /// Parse a login body leniently
    ///
    /// A body that is not a JSON object with `authKey` yields an empty
    /// request, which the use case rejects as an invalid credential.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(req) => req,
            Err(e) => {
                tracing::debug!(error = %e, "Unparseable login body");
                Self::default()
            }
        }
    }
}
