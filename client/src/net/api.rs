//! REST helpers for the API gateway.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the gateway is only
//! called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)` for the caller to log; nothing here
//! retries or panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

/// Gateway-relative health-check endpoint, proxied to the upstream `/v1/healthcheck`.
pub const HEALTHCHECK_PATH: &str = "/api/v1/healthcheck";

/// Body the upstream normally answers with. Anything else is logged raw.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct HealthReport {
    status: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn healthcheck_failed_message(status: u16) -> String {
    format!("healthcheck failed: {status}")
}

/// One-line summary of a health-check body for the log.
#[cfg(any(test, feature = "hydrate"))]
fn summarize_health_body(body: &str) -> String {
    match serde_json::from_str::<HealthReport>(body) {
        Ok(report) => format!("status={}", report.status),
        Err(_) => body.trim().to_owned(),
    }
}

/// Ping the gateway health-check.
///
/// # Errors
///
/// Returns an error string if the request fails or the gateway answers with a
/// non-2xx status.
pub async fn healthcheck() -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(HEALTHCHECK_PATH)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(healthcheck_failed_message(resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        Ok(summarize_health_body(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
