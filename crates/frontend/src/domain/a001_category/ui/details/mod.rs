use leptos::prelude::*;

use super::list::state::{CategoryPageState, DraftField};
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::icons::icon;

/// Create/edit form bound to the page draft.
///
/// Native submission is suppressed; `on_submit` decides between create and
/// update.
#[component]
pub fn CategoryForm(
    state: RwSignal<CategoryPageState>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let name = Signal::derive(move || state.with(|s| s.draft.name.clone()));
    let description = Signal::derive(move || state.with(|s| s.draft.description.clone()));
    let submitting = Signal::derive(move || state.with(|s| s.submitting));

    let set_field = move |field: DraftField| {
        Callback::new(move |value: String| state.update(|s| s.update_draft_field(field, value)))
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="mb-3" on:submit=handle_submit>
            <Input
                name="name"
                value=name
                placeholder="Name"
                required=true
                disabled=submitting
                on_input=set_field(DraftField::Name)
            />
            <Textarea
                name="description"
                value=description
                placeholder="Description"
                required=true
                disabled=submitting
                on_input=set_field(DraftField::Description)
            />
            <Button
                submit=true
                disabled=Signal::derive(move || state.with(|s| s.submitting || !s.is_form_valid()))
            >
                {icon("save")}
                " "
                {move || state.with(|s| s.submit_label())}
            </Button>
        </form>
    }
}
