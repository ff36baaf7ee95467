//! API gateway proxy.
//!
//! DESIGN
//! ======
//! Every request under the configured prefix is forwarded to the upstream
//! service with the prefix stripped (`/api/v1/healthcheck` becomes
//! `{upstream}/v1/healthcheck`). Method, query, headers, and body pass
//! through. Hop-by-hop headers and `Host` are dropped so the upstream sees a
//! request addressed to itself.
//!
//! ERROR HANDLING
//! ==============
//! Upstream failures are answered here as 502/504 with a small JSON body.
//! Upstream error statuses (4xx/5xx) are not failures: they are relayed as-is.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Instant;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use http_body_util::{BodyExt, LengthLimitError, Limited};

use crate::state::AppState;

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

const STRIPPED_HEADERS: [&str; 10] = [
    "connection",
    "content-length",
    "host",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Errors produced while forwarding a request.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("HTTP client build failed: {0}")]
    Client(reqwest::Error),

    #[error("request body unreadable: {0}")]
    Body(String),

    #[error("request body exceeds {MAX_BODY_BYTES} bytes")]
    TooLarge,

    #[error("upstream timed out: {0}")]
    Timeout(reqwest::Error),

    #[error("upstream unreachable: {0}")]
    Upstream(reqwest::Error),
}

impl ProxyError {
    fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout(err) } else { Self::Upstream(err) }
    }

    fn from_body(err: &(dyn std::error::Error + Send + Sync + 'static)) -> Self {
        if err.is::<LengthLimitError>() { Self::TooLarge } else { Self::Body(err.to_string()) }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, status = status.as_u16(), "proxy request failed");
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Map an incoming path onto the upstream URL, or `None` when `path` is not
/// under `prefix`.
pub fn upstream_url(upstream: &str, prefix: &str, path: &str, query: Option<&str>) -> Option<String> {
    let rest = path.strip_prefix(prefix)?;
    if !rest.is_empty() && !rest.starts_with('/') {
        return None;
    }
    let rest = if rest.is_empty() { "/" } else { rest };
    match query {
        Some(q) if !q.is_empty() => Some(format!("{upstream}{rest}?{q}")),
        _ => Some(format!("{upstream}{rest}")),
    }
}

/// Copy `headers` minus the hop-by-hop set.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = headers.clone();
    for name in STRIPPED_HEADERS {
        out.remove(name);
    }
    out
}

/// Forward one request upstream and relay the response.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let Some(url) = upstream_url(
        &state.config.api_upstream,
        &state.config.api_prefix,
        parts.uri.path(),
        parts.uri.query(),
    ) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let bytes = Limited::new(body, MAX_BODY_BYTES)
        .collect()
        .await
        .map_err(|e| ProxyError::from_body(e.as_ref()))?
        .to_bytes();

    let started = Instant::now();
    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forwardable_headers(&parts.headers))
        .body(bytes)
        .send()
        .await
        .map_err(ProxyError::from_send)?;

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let body = upstream.bytes().await.map_err(ProxyError::from_send)?;

    tracing::debug!(
        method = %parts.method,
        %url,
        status = status.as_u16(),
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "proxied request"
    );

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
