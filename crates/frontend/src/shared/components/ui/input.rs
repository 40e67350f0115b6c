use leptos::prelude::*;

/// Single-line text input bound through `prop:value`
#[component]
pub fn Input(
    /// Field name, also used as the element id
    #[prop(into)]
    name: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <input
            type="text"
            id=name.clone()
            name=name
            class="form-control mb-2"
            prop:value=move || value.get()
            placeholder=input_placeholder
            disabled=move || disabled.get().unwrap_or(false)
            required=required
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    }
}
