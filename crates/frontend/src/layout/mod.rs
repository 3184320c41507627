use leptos::prelude::*;

use crate::shared::notifications::NotificationHost;

/// Application shell of the editor.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +-----------+------------------------------+
/// |  Sidebar  |           Content            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <header class="app-header">
                <span class="app-header__title">"Table Editor"</span>
            </header>
            <div class="app-body">
                <aside class="app-sidebar">{left()}</aside>
                <main class="app-main">{center()}</main>
            </div>
            <NotificationHost />
        </div>
    }
}
