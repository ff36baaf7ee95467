//! Stateless button with a closed set of visual variants.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

pub const BUTTON_BASE_CLASS: &str = "button";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Outline,
}

impl ButtonVariant {
    /// Stylesheet class for this variant.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Primary => "button--primary",
            Self::Secondary => "button--secondary",
            Self::Danger => "button--danger",
            Self::Outline => "button--outline",
        }
    }
}

/// Full class list: base, variant, then the caller's classes.
pub fn button_class(variant: ButtonVariant, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        format!("{BUTTON_BASE_CLASS} {}", variant.class_name())
    } else {
        format!("{BUTTON_BASE_CLASS} {} {extra}", variant.class_name())
    }
}

/// Variant-styled `<button>`.
///
/// Any `attr:*` or `on:*` the caller adds (`attr:aria-label`, `on:click`, ...)
/// lands unchanged on the rendered `<button>`. `type` is only written when
/// `button_type` is given, so the browser default (`submit`) applies otherwise.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] button_type: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=button_class(variant, &class)
            disabled=move || disabled.get().unwrap_or(false)
        >
            {children()}
        </button>
    }
}
