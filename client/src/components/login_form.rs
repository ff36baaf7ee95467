//! Username + password form.
//!
//! The form only collects values. Submitting prevents the page reload and
//! hands a [`LoginSubmission`] to `on_submit` when the embedding page wires
//! one; the authorization screen currently does not.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use std::fmt;

use leptos::prelude::*;

use crate::components::bound_input::BoundInput;
use crate::state::auth_form::AuthForm;
use crate::state::input::{InputBinding, InputKind, use_input};

/// Fields owned by one mounted login form.
#[derive(Clone, Copy, Debug)]
pub struct LoginFields {
    pub username: InputBinding,
    pub password: InputBinding,
}

impl LoginFields {
    pub fn new() -> Self {
        Self {
            username: use_input(InputKind::Text),
            password: use_input(InputKind::Password),
        }
    }

    /// Current values, read without tracking.
    pub fn submission(&self) -> LoginSubmission {
        LoginSubmission {
            username: self.username.value_untracked(),
            password: self.password.value_untracked(),
        }
    }
}

impl Default for LoginFields {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct LoginSubmission {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginSubmission")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[component]
pub fn LoginForm(#[prop(optional)] on_submit: Option<Callback<LoginSubmission>>) -> impl IntoView {
    let fields = LoginFields::new();

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(on_submit) = &on_submit {
            on_submit.run(fields.submission());
        }
    };

    view! {
        <form class="auth-form" on:submit=handle_submit>
            <BoundInput placeholder="Username" bind=fields.username.bind()/>
            <BoundInput placeholder="Password" bind=fields.password.bind()/>
            <button class="auth-form__submit" type="submit">
                {AuthForm::Login.submit_label()}
            </button>
        </form>
    }
}
