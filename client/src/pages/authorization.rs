//! Authorization screen: login form with a switch to the register form.

use leptos::prelude::*;

use crate::components::login_form::LoginForm;
use crate::components::register_form::RegisterForm;
use crate::components::responsive_logo::ResponsiveLogo;
use crate::state::auth_form::AuthForm;

#[component]
pub fn AuthorizationPage() -> impl IntoView {
    let form = RwSignal::new(AuthForm::default());
    let on_toggle = move |_| form.update(AuthForm::toggle);

    view! {
        <div class="auth-page">
            <header class="auth-page__header">
                <ResponsiveLogo/>
                <h3>"Sign in or register a new account"</h3>
            </header>
            <div class="auth-page__body">
                // Switching forms remounts them, so typed values do not carry over.
                {move || match form.get() {
                    AuthForm::Login => view! { <LoginForm/> }.into_any(),
                    AuthForm::Register => view! { <RegisterForm/> }.into_any(),
                }}
                <div class="auth-page__toggle">
                    {move || form.get().prompt()}
                    <button type="button" on:click=on_toggle>
                        {move || form.get().toggle_label()}
                    </button>
                </div>
            </div>
        </div>
    }
}
