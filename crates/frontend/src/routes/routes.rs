use crate::domain::table_editor::ui::TableEditorPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Page not found"</h2>
            <p>"Open a project table editor: /project/<ref>/editor"</p>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/project/:ref/editor") view=TableEditorPage />
                <Route path=path!("/project/:ref/editor/:id") view=TableEditorPage />
            </Routes>
        </Router>
    }
}
