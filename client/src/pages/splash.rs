//! Splash screen with the sign-up and log-in entry buttons.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::responsive_logo::ResponsiveLogo;

#[component]
pub fn SplashPage() -> impl IntoView {
    view! {
        <div class="splash-page">
            <header class="splash-page__header">
                <ResponsiveLogo/>
                <div class="splash-page__header-buttons">
                    <Button variant=ButtonVariant::Outline>"Sign Up"</Button>
                    <Button variant=ButtonVariant::Primary>"Log In"</Button>
                </div>
            </header>
            <div class="splash-page__body"></div>
        </div>
    }
}
