//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled HTTP client reused by every proxied
//! request.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::proxy::ProxyError;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are Arc-wrapped or cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state and the upstream HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Client`] if the HTTP client cannot be built.
    pub fn new(config: ServerConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(ProxyError::Client)?;
        Ok(Self { config: Arc::new(config), http })
    }
}
