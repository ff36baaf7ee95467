//! Startup health-check wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installed once by the root app inside the router. The outcome only reaches
//! the browser console; nothing feeds back into rendered state, so a request
//! still in flight after unmount touches no component.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::boot::HealthCheckPolicy;
use crate::state::health::HealthCheckGate;

/// Send the gateway health-check according to `policy`.
///
/// Must be called under a `<Router>`.
pub fn install_healthcheck(policy: HealthCheckPolicy) {
    let location = use_location();
    let gate = StoredValue::new(HealthCheckGate::new(policy));

    Effect::new(move || {
        let path = location.pathname.get();
        let mut fire = false;
        gate.update_value(|g| fire = g.admit(&path));
        if fire {
            spawn_healthcheck();
        }
    });
}

fn spawn_healthcheck() {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async {
        match crate::net::api::healthcheck().await {
            Ok(summary) => log::info!("gateway healthcheck ok: {summary}"),
            Err(e) => log::error!("gateway healthcheck failed: {e}"),
        }
    });
}
