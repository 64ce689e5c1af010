//! Unit tests for Frontend crate
//! Route guard behaviour against a stub Auth Service

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use tower::ServiceExt;

    use crate::application::config::FrontendConfig;
    use crate::domain::{AuthGateway, SessionUser};
    use crate::error::{FrontendError, FrontendResult};
    use crate::presentation::router::frontend_router;

    #[derive(Clone, Copy)]
    enum Mode {
        Valid,
        Invalid,
        Down,
    }

    #[derive(Clone)]
    struct StubGateway {
        mode: Mode,
        verify_calls: Arc<AtomicUsize>,
        logout_calls: Arc<AtomicUsize>,
    }

    impl StubGateway {
        fn new(mode: Mode) -> Self {
            Self {
                mode,
                verify_calls: Arc::new(AtomicUsize::new(0)),
                logout_calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl AuthGateway for StubGateway {
        async fn verify(&self, session_id: &str) -> FrontendResult<Option<SessionUser>> {
            self.verify_calls.fetch_add(1, Ordering::SeqCst);
            match self.mode {
                Mode::Valid if session_id == "good" => Ok(Some(SessionUser {
                    id: "u1".to_string(),
                    email: Some("a@b.com".to_string()),
                    name: Some("Ada".to_string()),
                })),
                Mode::Valid | Mode::Invalid => Ok(None),
                Mode::Down => Err(FrontendError::AuthUnavailable("connection refused".into())),
            }
        }

        async fn logout(&self, _session_id: &str) -> FrontendResult<()> {
            self.logout_calls.fetch_add(1, Ordering::SeqCst);
            match self.mode {
                Mode::Down => Err(FrontendError::AuthTimeout),
                _ => Ok(()),
            }
        }
    }

    fn app(gateway: StubGateway) -> Router {
        frontend_router(
            gateway,
            FrontendConfig {
                auth_public_url: "https://auth.example.com".to_string(),
                ..Default::default()
            },
        )
    }

    fn request(method: &str, uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = cookie {
            builder = builder.header(header::COOKIE, format!("session_id={value}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    fn clears_cookie(response: &Response) -> bool {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .any(|v| v.starts_with("session_id=;") && v.contains("Max-Age=0"))
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_dashboard_without_cookie_redirects_to_login() {
        let gateway = StubGateway::new(Mode::Valid);
        let response = app(gateway.clone())
            .oneshot(request("GET", "/dashboard", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/login");
        assert_eq!(gateway.verify_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_dashboard_with_valid_session() {
        let response = app(StubGateway::new(Mode::Valid))
            .oneshot(request("GET", "/dashboard", Some("good")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Dashboard: Ada"));
    }

    #[tokio::test]
    async fn test_settings_accepts_post() {
        let response = app(StubGateway::new(Mode::Valid))
            .oneshot(request("POST", "/settings", Some("good")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("a@b.com"));
    }

    #[tokio::test]
    async fn test_rejected_session_clears_cookie() {
        let response = app(StubGateway::new(Mode::Invalid))
            .oneshot(request("GET", "/settings", Some("stale")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/login");
        assert!(clears_cookie(&response));
    }

    #[tokio::test]
    async fn test_auth_down_fails_closed() {
        let response = app(StubGateway::new(Mode::Down))
            .oneshot(request("GET", "/dashboard", Some("good")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/login");
        assert!(clears_cookie(&response));
    }

    #[tokio::test]
    async fn test_login_page_links_to_auth_service() {
        let response = app(StubGateway::new(Mode::Valid))
            .oneshot(request("GET", "/login", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            body_text(response)
                .await
                .contains("https://auth.example.com/login/google")
        );
    }

    #[tokio::test]
    async fn test_logged_in_user_skips_login_and_home() {
        for uri in ["/", "/login"] {
            let response = app(StubGateway::new(Mode::Valid))
                .oneshot(request("GET", uri, Some("good")))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::FOUND);
            assert_eq!(location(&response), "/dashboard");
        }
    }

    #[tokio::test]
    async fn test_home_for_anonymous_visitor() {
        let response = app(StubGateway::new(Mode::Invalid))
            .oneshot(request("GET", "/", Some("stale")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_logout_notifies_auth_and_clears_cookie() {
        let gateway = StubGateway::new(Mode::Valid);
        let response = app(gateway.clone())
            .oneshot(request("POST", "/logout", Some("good")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/");
        assert!(clears_cookie(&response));
        assert_eq!(gateway.logout_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_logout_clears_cookie_when_auth_is_down() {
        let response = app(StubGateway::new(Mode::Down))
            .oneshot(request("GET", "/logout", Some("good")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert!(clears_cookie(&response));
    }

    #[tokio::test]
    async fn test_logout_without_cookie_skips_auth() {
        let gateway = StubGateway::new(Mode::Valid);
        let response = app(gateway.clone())
            .oneshot(request("GET", "/logout", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(gateway.logout_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(StubGateway::new(Mode::Down))
            .oneshot(request("GET", "/health", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }
}
