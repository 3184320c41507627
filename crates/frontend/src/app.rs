use std::rc::Rc;

use crate::domain::meta::{HttpMetaApi, MetaStore};
use crate::domain::table_editor::MetaApiHandle;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::ApiConfig;
use crate::shared::notifications::NotificationService;
use crate::system::auth::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Metadata cache shared by every editor page
    provide_context(MetaStore::new());
    provide_context(NotificationService::new());
    provide_context(MetaApiHandle::new(Rc::new(HttpMetaApi::new(
        ApiConfig::from_window(),
    ))));

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
