//! Reads the server-chosen [`BootConfig`] back from the document.
//!
//! The server writes these attributes on `<html>` in `app::shell`.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

#[cfg(feature = "hydrate")]
use crate::state::boot::{HealthCheckPolicy, LandingScreen};
use crate::state::boot::BootConfig;

pub const LANDING_ATTR: &str = "data-landing";
pub const HEALTHCHECK_ATTR: &str = "data-healthcheck";

/// Boot settings from the `<html>` element, or defaults outside a browser.
pub fn read_from_document() -> BootConfig {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return BootConfig::default();
        };
        BootConfig {
            landing: LandingScreen::parse(el.get_attribute(LANDING_ATTR).as_deref()),
            healthcheck: HealthCheckPolicy::parse(el.get_attribute(HEALTHCHECK_ATTR).as_deref()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        BootConfig::default()
    }
}
