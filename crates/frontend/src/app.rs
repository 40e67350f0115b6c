use crate::domain::a001_category::ui::list::CategoryList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="container">
            <CategoryList />
        </div>
    }
}
