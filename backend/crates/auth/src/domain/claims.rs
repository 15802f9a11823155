//! Session Claims
//!
//! Payload of the signed session token. The blog has a single operator,
//! so the subject and role are fixed.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Subject of every issued session
pub const ADMIN_SUBJECT: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Editor,
}

impl Role {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Role::Editor => "editor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Session token claims
///
/// `iat` and `exp` are Unix timestamps in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub user_id: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    /// Claims for the operator session, issued at `now` and living for `ttl`
    pub fn editor(now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            user_id: ADMIN_SUBJECT.to_string(),
            role: Role::Editor,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// A token is usable strictly before its expiry second
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() < self.exp
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_editor_claims() {
        let claims = SessionClaims::editor(t0(), Duration::days(7));
        assert_eq!(claims.user_id, "admin");
        assert_eq!(claims.role, Role::Editor);
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 3600);
    }

    #[test]
    fn test_validity_boundary() {
        let claims = SessionClaims::editor(t0(), Duration::days(7));
        assert!(claims.is_valid_at(t0()));
        assert!(claims.is_valid_at(t0() + Duration::days(7) - Duration::seconds(1)));
        assert!(!claims.is_valid_at(t0() + Duration::days(7)));
        assert!(!claims.is_valid_at(t0() + Duration::days(8)));
    }

    #[test]
    fn test_serialized_field_names() {
        let claims = SessionClaims::editor(t0(), Duration::days(7));
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["userId"], "admin");
        assert_eq!(json["role"], "editor");
        assert!(json["exp"].is_i64());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Editor.to_string(), "editor");
    }
}
