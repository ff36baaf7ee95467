use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Method, Request, Uri};
use axum::response::Json;
use axum::routing::post;
use serde_json::{Value, json};
use tower::ServiceExt;

use super::*;
use crate::config::ServerConfig;
use mantel_client::state::boot::LandingScreen;

/// Spawn a stand-in upstream service on an ephemeral port.
async fn spawn_upstream() -> String {
    let app = Router::new()
        .route("/v1/healthcheck", get(|| async { Json(json!({ "status": "ok" })) }))
        .route(
            "/echo",
            post(|headers: HeaderMap, uri: Uri, body: String| async move {
                let header = |name: &str| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_owned)
                };
                (
                    StatusCode::CREATED,
                    Json(json!({
                        "path": uri.path(),
                        "query": uri.query(),
                        "body": body,
                        "custom": header("x-custom"),
                        "host": header("host"),
                    })),
                )
            }),
        )
        .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "nope") }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn gateway(upstream: String, timeout_secs: u64) -> Router {
    let config = ServerConfig { api_upstream: upstream, proxy_timeout_secs: timeout_secs, ..ServerConfig::default() };
    api_routes(AppState::new(config).unwrap())
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = gateway("http://127.0.0.1:9".to_owned(), 1);
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn healthcheck_is_proxied_with_prefix_stripped() {
    let app = gateway(spawn_upstream().await, 5);
    let response = app
        .oneshot(Request::builder().uri("/api/v1/healthcheck").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn method_query_headers_and_body_are_forwarded() {
    let upstream = spawn_upstream().await;
    let upstream_host = upstream.trim_start_matches("http://").to_owned();
    let app = gateway(upstream, 5);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/echo?a=1&b=two")
        .header("host", "localhost:3000")
        .header("x-custom", "kept")
        .body(Body::from("hello upstream"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["path"], "/echo");
    assert_eq!(body["query"], "a=1&b=two");
    assert_eq!(body["body"], "hello upstream");
    assert_eq!(body["custom"], "kept");
    assert_eq!(body["host"], upstream_host);
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let app = gateway(spawn_upstream().await, 5);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/echo")
        .body(Body::from(vec![b'a'; proxy::MAX_BODY_BYTES + 1]))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("request body exceeds"));
}

#[tokio::test]
async fn upstream_error_status_is_relayed() {
    let app = gateway(spawn_upstream().await, 5);
    let response = app
        .oneshot(Request::builder().uri("/api/missing").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"nope");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = gateway(format!("http://{addr}"), 5);
    let response = app
        .oneshot(Request::builder().uri("/api/v1/healthcheck").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("upstream unreachable"));
}

#[tokio::test]
async fn slow_upstream_is_gateway_timeout() {
    let app = gateway(spawn_upstream().await, 1);
    let response = app
        .oneshot(Request::builder().uri("/api/slow").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn paths_outside_prefix_are_not_proxied() {
    let app = gateway(spawn_upstream().await, 5);
    let response = app
        .oneshot(Request::builder().uri("/apix/v1/healthcheck").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================
// SSR pages
// =============================================================

fn pages(landing: LandingScreen) -> Router {
    let options = LeptosOptions::builder().output_name("mantel").build();
    page_routes(options, BootConfig { landing, ..BootConfig::default() })
}

async fn render(app: Router, path: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn root_renders_authorization_landing() {
    let (status, html) = render(pages(LandingScreen::Authorization), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Sign in or register a new account"));
    assert!(html.contains(r#"data-landing="authorization""#));
    assert!(!html.contains("404 - Page Not Found"));
}

#[tokio::test]
async fn root_renders_splash_landing() {
    let (status, html) = render(pages(LandingScreen::Splash), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Sign Up"));
    assert!(html.contains("button button--outline"));
    assert!(!html.contains(r#"type="button""#));
    assert!(html.contains(r#"data-landing="splash""#));
    assert!(!html.contains("Sign in or register a new account"));
}

#[tokio::test]
async fn undeclared_paths_render_not_found() {
    for path in ["/nonexistent", "/a/b", "/login"] {
        let (status, html) = render(pages(LandingScreen::Authorization), path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert!(html.contains("404 - Page Not Found"), "{path}");
        assert!(!html.contains("Sign in or register a new account"), "{path}");
    }
}
