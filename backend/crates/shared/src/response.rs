//! Response Envelope
//!
//! Every endpoint answers with the same JSON envelope:
//!
//! ```json
//! { "status": 200, "message": "Success", "data": { ... } }
//! ```
//!
//! Errors use the same envelope with `data: null` by default.
//! [`ErrorShape`] selects an alternative `{statusCode, statusMessage}` body
//! for clients that still expect that form; both are rendered by
//! [`error_body`].

use std::borrow::Cow;

use serde::Serialize;
use serde_json::{Value, json};

use crate::error::app_error::AppError;

/// 成功時の既定メッセージ
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Success";

/// レスポンスエンベロープ
///
/// ## Fields
/// * `status` - HTTP ステータスコード（本文にも複製される）
/// * `message` - ユーザー向けメッセージ
/// * `data` - ペイロード（エラー時は `null`）
///
/// ## Examples
/// ```rust
/// use kernel::response::Envelope;
///
/// let body = Envelope::ok(serde_json::json!({ "success": true }));
/// assert_eq!(body.status, 200);
/// assert_eq!(body.message, "Success");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub message: Cow<'static, str>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// 200 OK のエンベロープを作成
    pub fn ok(data: T) -> Self {
        Self::ok_with_message(DEFAULT_SUCCESS_MESSAGE, data)
    }

    /// メッセージ付きの 200 OK エンベロープを作成
    pub fn ok_with_message(message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Self {
            status: 200,
            message: message.into(),
            data: Some(data),
        }
    }
}

/// `{ "success": true }` ペイロード
///
/// 書き込み系エンドポイントの確認応答に使用します。
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Acknowledged {
    pub success: bool,
}

impl Acknowledged {
    pub const fn yes() -> Self {
        Self { success: true }
    }
}

/// エラーレスポンス本文の形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorShape {
    /// `{ status, message, data: null }`
    #[default]
    Envelope,
    /// `{ statusCode, statusMessage }`
    StatusMessage,
}

/// エラー本文を指定形式で生成
///
/// すべてのエラーレスポンスはこの関数を経由します。
pub fn error_body(err: &AppError, shape: ErrorShape) -> Value {
    match shape {
        ErrorShape::Envelope => json!({
            "status": err.status_code(),
            "message": err.message(),
            "data": Value::Null,
        }),
        ErrorShape::StatusMessage => json!({
            "statusCode": err.status_code(),
            "statusMessage": err.message(),
        }),
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
mod axum_impl {
    use axum::Json;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use serde::Serialize;

    use super::{Envelope, ErrorShape, error_body};
    use crate::error::app_error::AppError;

    /// エラーを指定形式の HTTP レスポンスへ変換
    pub fn error_response(err: &AppError, shape: ErrorShape) -> Response {
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(error_body(err, shape))).into_response()
    }

    impl<T: Serialize> IntoResponse for Envelope<T> {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
            (status, Json(self)).into_response()
        }
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            error_response(&self, ErrorShape::default())
        }
    }

    /// ルートに存在しないメソッド用のフォールバックハンドラ
    ///
    /// `MethodRouter::fallback` に渡して使用します。
    pub async fn method_not_allowed(method: axum::http::Method) -> AppError {
        AppError::method_not_allowed(method)
    }
}

#[cfg(feature = "axum")]
pub use axum_impl::{error_response, method_not_allowed};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_ok_serialization() {
        let body = serde_json::to_value(Envelope::ok(Acknowledged::yes())).unwrap();
        assert_eq!(
            body,
            json!({ "status": 200, "message": "Success", "data": { "success": true } })
        );
    }

    #[test]
    fn test_error_body_envelope() {
        let err = AppError::unauthorized("Invalid authentication key");
        let body = error_body(&err, ErrorShape::Envelope);
        assert_eq!(body["status"], 401);
        assert_eq!(body["message"], "Invalid authentication key");
        assert!(body["data"].is_null());
    }

    #[test]
    fn test_error_body_status_message() {
        let err = AppError::internal("upstream exploded");
        let body = error_body(&err, ErrorShape::StatusMessage);
        assert_eq!(
            body,
            json!({ "statusCode": 500, "statusMessage": "upstream exploded" })
        );
    }

    #[test]
    fn test_default_shape_is_envelope() {
        assert_eq!(ErrorShape::default(), ErrorShape::Envelope);
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_error_response_status_and_body() {
        use axum::response::IntoResponse;

        let response = AppError::method_not_allowed("PUT").into_response();
        assert_eq!(response.status().as_u16(), 405);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Method PUT not allowed");
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_method_not_allowed_handler() {
        let err = method_not_allowed(axum::http::Method::DELETE).await;
        assert_eq!(err.status_code(), 405);
        assert_eq!(err.message(), "Method DELETE not allowed");
    }
}
