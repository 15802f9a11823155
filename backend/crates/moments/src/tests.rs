//! Router-level tests for the moments crate

#[cfg(test)]
mod endpoint_tests {
    use auth::{AuthAppState, AuthConfig, SessionClaims};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use chrono::{Duration, Utc};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::domain::document::MAX_DOCUMENT_BYTES;
    use crate::domain::store::MOMENTS_KEY;
    use crate::infra::memory::InMemoryDocumentStore;
    use crate::presentation::moments_router;

    struct Harness {
        store: InMemoryDocumentStore,
        auth: AuthAppState,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                store: InMemoryDocumentStore::new(),
                auth: AuthAppState::new(AuthConfig::development("login-key")),
            }
        }

        fn app(&self) -> Router {
            moments_router(self.store.clone(), self.auth.clone())
        }

        fn cookie_issued_at(&self, issued_at: chrono::DateTime<Utc>) -> String {
            let token = self
                .auth
                .codec
                .sign(&SessionClaims::editor(issued_at, Duration::days(7)))
                .unwrap();
            format!("auth_token={token}")
        }

        fn valid_cookie(&self) -> String {
            self.cookie_issued_at(Utc::now())
        }

        async fn get(&self, cookie: Option<&str>) -> Response {
            let mut builder = Request::builder().method("GET").uri("/moments");
            if let Some(cookie) = cookie {
                builder = builder.header(header::COOKIE, cookie);
            }
            self.app()
                .oneshot(builder.body(Body::empty()).unwrap())
                .await
                .unwrap()
        }

        async fn post(&self, cookie: Option<&str>, body: &str) -> Response {
            let mut builder = Request::builder()
                .method("POST")
                .uri("/moments")
                .header(header::CONTENT_TYPE, "application/json");
            if let Some(cookie) = cookie {
                builder = builder.header(header::COOKIE, cookie);
            }
            self.app()
                .oneshot(builder.body(Body::from(body.to_string())).unwrap())
                .await
                .unwrap()
        }
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn sample_document() -> Value {
        json!([
            {
                "name": "ngc",
                "avatar": "/avatar.webp",
                "moment_list": [
                    {
                        "content": "first moment",
                        "date": "2025-03-01 09:30",
                        "tags": ["life"],
                        "image": ["/img/1.webp"],
                        "address": "Tokyo"
                    }
                ]
            }
        ])
    }

    #[tokio::test]
    async fn test_get_without_document_returns_empty_list() {
        let h = Harness::new();
        let response = h.get(None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], 200);
        assert_eq!(body["data"]["isAuthenticated"], false);
        assert_eq!(body["data"]["moments"], json!([]));
    }

    #[tokio::test]
    async fn test_get_reports_session_without_requiring_it() {
        let h = Harness::new();
        let cookie = h.valid_cookie();

        let body = json_body(h.get(Some(&cookie)).await).await;
        assert_eq!(body["data"]["isAuthenticated"], true);

        let body = json_body(h.get(Some("auth_token=forged")).await).await;
        assert_eq!(body["data"]["isAuthenticated"], false);
    }

    #[tokio::test]
    async fn test_post_without_cookie_is_401_and_storage_untouched() {
        let h = Harness::new();
        let response = h.post(None, &sample_document().to_string()).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body["status"], 401);
        assert!(body["data"].is_null());
        assert_eq!(h.store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_post_then_get_round_trip() {
        let h = Harness::new();
        let cookie = h.valid_cookie();

        let response = h.post(Some(&cookie), &sample_document().to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["data"], json!({ "success": true }));
        assert_eq!(h.store.write_count(), 1);

        let stored = h.store.object(MOMENTS_KEY).await.unwrap();
        assert_eq!(stored.content_type, "application/json");

        let body = json_body(h.get(None).await).await;
        assert_eq!(body["data"]["moments"], sample_document());
    }

    #[tokio::test]
    async fn test_post_with_expired_token_is_401_and_storage_untouched() {
        let h = Harness::new();
        let expired = h.cookie_issued_at(Utc::now() - Duration::days(7) - Duration::seconds(1));

        let response = h.post(Some(&expired), "[]").await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(h.store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_post_with_foreign_token_is_401() {
        let h = Harness::new();
        let foreign = auth::JwtCodec::new(b"another-deployment")
            .sign(&SessionClaims::editor(Utc::now(), Duration::days(7)))
            .unwrap();

        let response = h.post(Some(&format!("auth_token={foreign}")), "[]").await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(h.store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_unauthenticated_invalid_body_is_still_401() {
        let h = Harness::new();
        let response = h.post(None, "{not json").await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_authenticated_invalid_body_is_400() {
        let h = Harness::new();
        let cookie = h.valid_cookie();

        let response = h.post(Some(&cookie), "{not json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["status"], 400);
        assert_eq!(h.store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_reads_are_idempotent() {
        let h = Harness::new();
        let cookie = h.valid_cookie();
        h.post(Some(&cookie), &sample_document().to_string()).await;

        let first = json_body(h.get(None).await).await;
        let second = json_body(h.get(None).await).await;
        assert_eq!(first, second);
        assert_eq!(h.store.write_count(), 1);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let h = Harness::new();
        let cookie = h.valid_cookie();

        h.post(Some(&cookie), r#"[{"v":1}]"#).await;
        h.post(Some(&cookie), r#"[{"v":2}]"#).await;

        let body = json_body(h.get(None).await).await;
        assert_eq!(body["data"]["moments"], json!([{ "v": 2 }]));
    }

    #[tokio::test]
    async fn test_corrupt_stored_document_is_500() {
        let h = Harness::new();
        h.store.insert_raw(MOMENTS_KEY, "[{ broken").await;

        let response = h.get(None).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json_body(response).await["data"].is_null());
    }

    #[tokio::test]
    async fn test_storage_failure_is_500() {
        let h = Harness::new();
        h.store.set_failing(true);

        assert_eq!(h.get(None).await.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let cookie = h.valid_cookie();
        assert_eq!(
            h.post(Some(&cookie), "[]").await.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_other_methods_are_405() {
        let h = Harness::new();
        for method in ["PUT", "DELETE", "PATCH"] {
            let response = h
                .app()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri("/moments")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
            let body = json_body(response).await;
            assert_eq!(body["status"], 405);
            assert_eq!(body["message"], format!("Method {method} not allowed"));
        }
        assert_eq!(h.store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_oversized_body_is_413_envelope() {
        let h = Harness::new();
        let cookie = h.valid_cookie();
        let oversized = format!("\"{}\"", "m".repeat(MAX_DOCUMENT_BYTES));

        let response = h.post(Some(&cookie), &oversized).await;
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let body = json_body(response).await;
        assert_eq!(body["status"], 413);
        assert_eq!(
            body["message"],
            format!("Moments document exceeds the {MAX_DOCUMENT_BYTES} byte limit")
        );
        assert!(body["data"].is_null());
        assert_eq!(h.store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_oversized_body_without_session_is_401() {
        let h = Harness::new();
        let oversized = "m".repeat(MAX_DOCUMENT_BYTES + 1);

        let response = h.post(None, &oversized).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(h.store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_head_is_405() {
        let h = Harness::new();
        h.store
            .insert_raw(MOMENTS_KEY, br#"[{"name":"a"}]"#.to_vec())
            .await;

        let response = h
            .app()
            .oneshot(
                Request::builder()
                    .method("HEAD")
                    .uri("/moments")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
