//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{authorization::AuthorizationPage, not_found::NotFoundPage, splash::SplashPage};
use crate::state::boot::{BootConfig, HealthCheckPolicy, LandingScreen};
use crate::util::health::install_healthcheck;
use crate::util::viewport::{ViewportProvider, provide_viewport};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `boot` is written onto `<html>` (see `util::boot` for the attribute names)
/// so the WASM entry point can rebuild the same `App`.
pub fn shell(options: LeptosOptions, boot: BootConfig) -> impl IntoView {
    let landing_attr = boot.landing.as_str();
    let healthcheck_attr = boot.healthcheck.as_str();
    view! {
        <!DOCTYPE html>
        <html lang="en" data-landing=landing_attr data-healthcheck=healthcheck_attr>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App boot/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// `viewport` overrides the width source for every screen; the browser window
/// is used when it is absent.
#[component]
pub fn App(
    #[prop(optional)] boot: BootConfig,
    #[prop(optional)] viewport: Option<ViewportProvider>,
) -> impl IntoView {
    provide_meta_context();
    if let Some(provider) = viewport {
        provide_viewport(provider);
    }

    let landing = boot.landing;

    view! {
        <Stylesheet id="leptos" href="/pkg/mantel.css"/>
        <Title text="Mantel"/>

        <Router>
            <HealthCheck policy=boot.healthcheck/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=move || landing_view(landing)/>
            </Routes>
        </Router>
    }
}

fn landing_view(landing: LandingScreen) -> AnyView {
    match landing {
        LandingScreen::Authorization => view! { <AuthorizationPage/> }.into_any(),
        LandingScreen::Splash => view! { <SplashPage/> }.into_any(),
    }
}

/// Fires the gateway health-check for the lifetime of the router.
#[component]
fn HealthCheck(policy: HealthCheckPolicy) -> impl IntoView {
    install_healthcheck(policy);
}
