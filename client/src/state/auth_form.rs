//! Which form the authorization screen is showing.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

/// Active form on the authorization screen.
///
/// Everything the screen renders around the form (prompt, toggle label,
/// submit label) derives from this one value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthForm {
    #[default]
    Login,
    Register,
}

impl AuthForm {
    /// The other form. Total: every state has exactly one successor.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    /// Flip in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Text shown next to the toggle button.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account yet?",
            Self::Register => "Already have an account?",
        }
    }

    /// Label of the button that switches to the other form.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Login => "Sign up",
            Self::Register => "Log in",
        }
    }

    /// Label of the form's own submit control.
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Log In",
            Self::Register => "Create Account",
        }
    }
}
