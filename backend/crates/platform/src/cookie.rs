//! Cookie Handling
//!
//! Building `Set-Cookie` values and reading cookies back from requests.

use std::fmt::Write;
use std::time::Duration;

use axum::http::{HeaderMap, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    #[default]
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie attributes
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age_secs: Option<u64>,
}

impl CookieConfig {
    /// Site-wide, HttpOnly, SameSite=Strict cookie living for `max_age`
    pub fn strict_session(name: impl Into<String>, max_age: Duration, secure: bool) -> Self {
        Self {
            name: name.into(),
            secure,
            http_only: true,
            same_site: SameSite::Strict,
            path: "/".to_string(),
            max_age_secs: Some(max_age.as_secs()),
        }
    }

    /// `Set-Cookie` header value carrying `value`
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut cookie = format!("{}={}", self.name, value);

        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        // Writing to a String cannot fail
        let _ = write!(
            cookie,
            "; SameSite={}; Path={}",
            self.same_site.as_str(),
            self.path
        );
        if let Some(max_age) = self.max_age_secs {
            let _ = write!(cookie, "; Max-Age={}", max_age);
        }

        cookie
    }
}

/// Value of cookie `name`, if present and non-empty
///
/// Every `Cookie` header is inspected; HTTP/2 clients may split cookies
/// across several.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value.to_string())
}
