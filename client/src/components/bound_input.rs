//! Text input driven by an [`InputBind`] bundle.

use leptos::prelude::*;

use crate::state::input::InputBind;

/// One controlled `<input>`: type, value, and change handler all come from `bind`.
#[component]
pub fn BoundInput(
    bind: InputBind,
    #[prop(into)] placeholder: String,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let InputBind { kind, value, on_change } = bind;
    view! {
        <input
            class=class.unwrap_or_else(|| "field".to_owned())
            type=kind.as_str()
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_change.run(event_target_value(&ev))
        />
    }
}
