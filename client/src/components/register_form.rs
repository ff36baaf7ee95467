//! Username + email + password form.

#[cfg(test)]
#[path = "register_form_test.rs"]
mod register_form_test;

use std::fmt;

use leptos::prelude::*;

use crate::components::bound_input::BoundInput;
use crate::state::auth_form::AuthForm;
use crate::state::input::{InputBinding, InputKind, use_input};

/// Fields owned by one mounted register form.
#[derive(Clone, Copy, Debug)]
pub struct RegisterFields {
    pub username: InputBinding,
    pub email: InputBinding,
    pub password: InputBinding,
}

impl RegisterFields {
    pub fn new() -> Self {
        Self {
            username: use_input(InputKind::Text),
            email: use_input(InputKind::Email),
            password: use_input(InputKind::Password),
        }
    }

    pub fn submission(&self) -> RegisterSubmission {
        RegisterSubmission {
            username: self.username.value_untracked(),
            email: self.email.value_untracked(),
            password: self.password.value_untracked(),
        }
    }
}

impl Default for RegisterFields {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct RegisterSubmission {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegisterSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterSubmission")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account creation form. Same submit contract as `LoginForm`.
#[component]
pub fn RegisterForm(#[prop(optional)] on_submit: Option<Callback<RegisterSubmission>>) -> impl IntoView {
    let fields = RegisterFields::new();

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(on_submit) = &on_submit {
            on_submit.run(fields.submission());
        }
    };

    view! {
        <form class="auth-form" on:submit=handle_submit>
            <BoundInput placeholder="Username" bind=fields.username.bind()/>
            <BoundInput placeholder="Email" bind=fields.email.bind()/>
            <BoundInput placeholder="Password" bind=fields.password.bind()/>
            <button class="auth-form__submit" type="submit">
                {AuthForm::Register.submit_label()}
            </button>
        </form>
    }
}
