use crate::shared::icons::icon;
use leptos::prelude::*;

/// Full-page placeholder for actors without metadata read access
#[component]
pub fn NoPermission(#[prop(into)] resource_text: String) -> impl IntoView {
    view! {
        <div class="no-permission">
            <div class="no-permission__icon">{icon("lock")}</div>
            <h2 class="no-permission__title">"You need additional permissions"</h2>
            <p class="no-permission__text">{resource_text}</p>
        </div>
    }
}
