//! Labeled Input Component

use leptos::prelude::*;

/// Text input bound to a string signal
#[component]
pub fn LabeledInput(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    value: RwSignal<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    let label_for = id.clone();

    view! {
        <label class="field" for=label_for>
            <span class="field-label">{label}</span>
            <input
                id=id
                type=input_type
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
