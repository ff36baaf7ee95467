//! Viewport width source and the shared narrow/wide hook.
//!
//! Screens never read `window.innerWidth` directly. They call
//! [`use_viewport_mode`], which asks the [`ViewportProvider`] in context for
//! widths. Tests and alternate hosts provide `ViewportProvider::Fixed`.
//!
//! TRADE-OFFS
//! ==========
//! SSR has no window, so the first render assumes [`SSR_ASSUMED_WIDTH`]. The
//! real width is observed by a mount effect right after hydration, which keeps
//! the server and client markup identical at hydration time.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::prelude::*;

use crate::state::viewport::{ViewportMode, ViewportTracker};

/// Width assumed while no browser window is available.
pub const SSR_ASSUMED_WIDTH: f64 = 1024.0;

/// Where viewport widths come from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ViewportProvider {
    /// The browser window, with live resize events.
    #[default]
    Window,
    /// A constant width; never emits resize events.
    Fixed(f64),
}

impl ViewportProvider {
    /// Width to render with before mount. Identical on server and client.
    pub fn initial_width(self) -> f64 {
        match self {
            Self::Window => SSR_ASSUMED_WIDTH,
            Self::Fixed(width) => width,
        }
    }

    /// Width right now.
    pub fn width(self) -> f64 {
        match self {
            Self::Window => window_inner_width().unwrap_or(SSR_ASSUMED_WIDTH),
            Self::Fixed(width) => width,
        }
    }

    pub fn is_live(self) -> bool {
        matches!(self, Self::Window)
    }
}

fn window_inner_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Make `provider` the width source for every screen below the caller.
pub fn provide_viewport(provider: ViewportProvider) {
    provide_context(provider);
}

/// The provider in context, or the browser window when none was provided.
pub fn use_viewport_provider() -> ViewportProvider {
    use_context::<ViewportProvider>().unwrap_or_default()
}

/// Narrow/wide mode of the viewport, kept current while the caller is mounted.
///
/// Registers one resize listener per caller and removes it on cleanup.
pub fn use_viewport_mode() -> Signal<ViewportMode> {
    track_viewport(use_viewport_provider()).1
}

/// Tracker seeded from `provider` plus the mode derived from it.
fn track_viewport(provider: ViewportProvider) -> (RwSignal<ViewportTracker>, Signal<ViewportMode>) {
    let tracker = RwSignal::new(ViewportTracker::new(provider.initial_width()));

    // Mount: replace the assumed width with the real one.
    Effect::new(move || observe_width(tracker, provider.width()));

    #[cfg(feature = "hydrate")]
    {
        if provider.is_live() {
            let handle = window_event_listener(leptos::ev::resize, move |_| {
                observe_width(tracker, provider.width());
            });
            on_cleanup(move || handle.remove());
        }
    }

    // Resizes within one mode do not touch the DOM.
    let mode = Memo::new(move |_| tracker.get().mode());
    (tracker, mode.into())
}

/// Feed one width observation into a live tracker.
fn observe_width(tracker: RwSignal<ViewportTracker>, width: f64) {
    tracker.update(|t| {
        t.observe(width);
    });
}
