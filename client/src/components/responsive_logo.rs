//! Logo that swaps to the monogram on narrow viewports.

use leptos::prelude::*;

use crate::util::viewport::use_viewport_mode;

#[component]
pub fn ResponsiveLogo() -> impl IntoView {
    let mode = use_viewport_mode();
    view! {
        <img src=move || mode.get().logo_src() alt="Mantel Logo" class="logo"/>
    }
}
