use leptos::prelude::*;

/// Bootstrap-style button variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Success,
    Danger,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Success => "btn-success",
            ButtonVariant::Danger => "btn-danger",
        }
    }
}

/// Button component with variants and an optional submit type
#[component]
pub fn Button(
    /// Visual variant, primary by default
    #[prop(optional)]
    variant: ButtonVariant,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Render as `type="submit"` instead of `type="button"`
    #[prop(optional)]
    submit: bool,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = if submit { "submit" } else { "button" };

    view! {
        <button
            type=btn_type
            class=move || format!("btn {} {}", variant.class(), additional_class())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
