//! Controlled text-field bindings.
//!
//! DESIGN
//! ======
//! A form declares one `InputBinding` per field and hands its `bind()` bundle
//! to `BoundInput`. The bundle carries exactly what an `<input>` needs (value,
//! change handler, kind), so forms never repeat the signal wiring per field.
//!
//! The kind only drives display and masking. Values are stored verbatim: no
//! trimming, validation, or debouncing happens here.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use leptos::prelude::*;

/// Display kind of a text-like field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Email,
}

impl InputKind {
    /// Value for the `<input type=...>` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
        }
    }
}

/// Reactive state of a single controlled field.
#[derive(Clone, Copy, Debug)]
pub struct InputBinding {
    kind: InputKind,
    value: RwSignal<String>,
}

impl InputBinding {
    /// Create an empty binding of the given kind.
    pub fn new(kind: InputKind) -> Self {
        Self { kind, value: RwSignal::new(String::new()) }
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Current value (tracked).
    pub fn value(&self) -> String {
        self.value.get()
    }

    /// Current value without subscribing the caller.
    pub fn value_untracked(&self) -> String {
        self.value.get_untracked()
    }

    /// Replace the value. `BoundInput` calls this with the text of each input event.
    pub fn set(&self, next: String) {
        self.value.set(next);
    }

    /// Reset the value to the empty string.
    pub fn clear(&self) {
        self.value.set(String::new());
    }

    /// Props bundle for a single `<input>`.
    pub fn bind(&self) -> InputBind {
        let binding = *self;
        InputBind {
            kind: self.kind,
            value: self.value.into(),
            on_change: Callback::new(move |next: String| binding.set(next)),
        }
    }
}

/// Everything a text input control needs, ready to apply to one field.
#[derive(Clone)]
pub struct InputBind {
    pub kind: InputKind,
    pub value: Signal<String>,
    pub on_change: Callback<String>,
}

/// Declare a controlled field owned by the calling component.
pub fn use_input(kind: InputKind) -> InputBinding {
    InputBinding::new(kind)
}
