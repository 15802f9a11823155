//! Error Kind
//!
//! The closed set of failure classes the blog API can answer with.

use serde::Serialize;

/// エラー種別
///
/// API が返しうる失敗の分類です。ステータスコードは本文の `status`
/// フィールドにも複製されます。
///
/// | 種別 | 発生箇所 |
/// |---|---|
/// | `BadRequest` | 不正な JSON 本文での書き込み |
/// | `Unauthorized` | ログインキー不一致・セッション欠落・無効トークン |
/// | `MethodNotAllowed` | ルートが受け付けないメソッド |
/// | `PayloadTooLarge` | 上限を超える書き込み本文 |
/// | `InternalServerError` | ストレージ障害・上流 API 障害 |
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::MethodNotAllowed.status_code(), 405);
/// assert!(ErrorKind::InternalServerError.is_server_error());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    MethodNotAllowed,
    PayloadTooLarge,
    InternalServerError,
}

impl ErrorKind {
    /// HTTP ステータスコード
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::MethodNotAllowed => 405,
            ErrorKind::PayloadTooLarge => 413,
            ErrorKind::InternalServerError => 500,
        }
    }

    /// 理由フレーズ
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::MethodNotAllowed => "Method Not Allowed",
            ErrorKind::PayloadTooLarge => "Payload Too Large",
            ErrorKind::InternalServerError => "Internal Server Error",
        }
    }

    /// 5xx（`error` レベルで記録する対象）
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
