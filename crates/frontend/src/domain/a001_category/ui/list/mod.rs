pub mod state;

use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::details::CategoryForm;
use crate::domain::a001_category::api;
use crate::shared::components::ui::button::ButtonVariant;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use state::{create_state, CategoryPageState, FormMode};

const CONFIRM_DELETE: &str = "Are you sure you want to delete this category?";

fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(CONFIRM_DELETE).ok())
        .unwrap_or(false)
}

/// Fetch the list and apply it under `generation`
async fn load_into(state: RwSignal<CategoryPageState>, generation: u64) {
    match api::fetch_categories().await {
        Ok(items) => {
            log::debug!("loaded {} categories", items.len());
            state.update(|s| {
                s.apply_loaded(generation, items);
            });
        }
        Err(e) => {
            e.log();
            state.update(|s| {
                s.fail_load(generation, &e);
            });
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let state = create_state();
    let submitting = Signal::derive(move || state.with(|s| s.submitting));

    let load_data = move || {
        let mut generation = 0;
        state.update(|s| generation = s.begin_load());
        spawn_local(load_into(state, generation));
    };

    let handle_submit = move |_: ()| {
        let mut request = None;
        state.update(|s| request = s.submit_request());
        let Some(request) = request else {
            return;
        };
        spawn_local(async move {
            match api::submit(&request).await {
                Ok(()) => {
                    let mut generation = 0;
                    state.update(|s| generation = s.submit_succeeded());
                    load_into(state, generation).await;
                    state.update(|s| s.finish_submit_ok());
                }
                Err(e) => {
                    e.log();
                    state.update(|s| s.fail_submit(&e));
                }
            }
        });
    };

    let handle_edit = move |id: CategoryId| {
        state.update(|s| {
            s.begin_edit(&id);
        });
    };

    let handle_delete = move |id: CategoryId| {
        let confirmed = confirm_delete();
        let mut proceed = false;
        state.update(|s| proceed = s.begin_delete(confirmed));
        if !proceed {
            return;
        }
        spawn_local(async move {
            match api::delete_category(&id).await {
                Ok(()) => {
                    let mut generation = 0;
                    state.update(|s| generation = s.delete_succeeded());
                    load_into(state, generation).await;
                }
                Err(e) => {
                    e.log();
                    state.update(|s| s.fail_delete(&e));
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let render_row = move |n: usize, item: Category| {
        let edit_id = item.id.clone();
        let delete_id = item.id.clone();
        view! {
            <tr>
                <td>{n}</td>
                <td>{item.name}</td>
                <td>{item.description}</td>
                <td>
                    <Button
                        class="me-2"
                        disabled=submitting
                        on_click=Callback::new(move |_| handle_edit(edit_id.clone()))
                    >
                        {icon("edit")}
                        " Edit"
                    </Button>
                    <Button
                        variant=ButtonVariant::Danger
                        on_click=Callback::new(move |_| handle_delete(delete_id.clone()))
                    >
                        {icon("delete")}
                        " Delete"
                    </Button>
                </td>
            </tr>
        }
    };

    view! {
        <div class="page category-page">
            <h1>"Category Management"</h1>

            {move || state.with(|s| s.error.clone()).map(|e| view! { <p class="text-danger">{e}</p> })}

            <Button
                variant=ButtonVariant::Success
                class="mb-3"
                disabled=submitting
                on_click=Callback::new(move |_| state.update(|s| s.toggle_form()))
            >
                {move || match state.with(|s| s.form_mode()) {
                    FormMode::Hidden => icon("plus"),
                    FormMode::Create | FormMode::Edit(_) => icon("x"),
                }}
                " "
                {move || state.with(|s| s.toggle_label())}
            </Button>

            <Show when=move || state.with(|s| s.form_mode() != FormMode::Hidden)>
                <CategoryForm state=state on_submit=Callback::new(handle_submit) />
            </Show>

            <table class="table table-bordered">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows: Vec<(usize, Category)> = state
                            .with(|s| s.rows().map(|(n, c)| (n, c.clone())).collect());
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="4" class="text-center text-muted">"No categories"</td>
                                </tr>
                            }
                            .into_any()
                        } else {
                            rows.into_iter()
                                .map(|(n, item)| render_row(n, item))
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
