//! Startup settings chosen by the server and shared with the hydrated app.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders these onto `<html data-landing=... data-healthcheck=...>`
//! and the WASM entry point reads them back (`util::boot`), so SSR and
//! hydration build the same route tree.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

/// Screen rendered at the root path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LandingScreen {
    #[default]
    Authorization,
    Splash,
}

impl LandingScreen {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Authorization => "authorization",
            Self::Splash => "splash",
        }
    }

    /// Parse a config value. Unknown or missing values yield the default.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("splash") => Self::Splash,
            _ => Self::Authorization,
        }
    }
}

/// When the startup health-check is sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HealthCheckPolicy {
    /// One request when the app mounts.
    #[default]
    OncePerMount,
    /// One request on mount and another each time the route path changes.
    PerNavigation,
}

impl HealthCheckPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OncePerMount => "once",
            Self::PerNavigation => "navigation",
        }
    }

    /// Parse a config value. Unknown or missing values yield the default.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("navigation") => Self::PerNavigation,
            _ => Self::OncePerMount,
        }
    }
}

/// Settings the root `App` is built with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BootConfig {
    pub landing: LandingScreen,
    pub healthcheck: HealthCheckPolicy,
}
