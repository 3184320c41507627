use std::rc::Rc;

use leptos::prelude::*;

use super::deletion::{apply_outcome, DeletionContext, DeletionController};
use super::navigation::{schema_root_path, Navigator};
use super::side_panel::EntityEditor;
use crate::domain::meta::{MetaApi, MetaStore, MetadataLoader};
use crate::shared::notifications::NotificationService;
use crate::shared::query_params::BrowserQueryParams;

/// Metadata API shared through context.
///
/// The API is `!Send`; local storage keeps the handle `Copy` for closures.
#[derive(Clone, Copy)]
pub struct MetaApiHandle(StoredValue<Rc<dyn MetaApi>, LocalStorage>);

impl MetaApiHandle {
    pub fn new(api: Rc<dyn MetaApi>) -> Self {
        Self(StoredValue::new_local(api))
    }

    pub fn get(&self) -> Rc<dyn MetaApi> {
        self.0.get_value()
    }
}

/// Everything the table editor page wires together
#[derive(Clone, Copy)]
pub struct EditorServices {
    pub project_ref: Signal<String>,
    pub store: MetaStore,
    pub editor: EntityEditor,
    pub deletion: DeletionController,
    pub notifications: NotificationService,
    pub query: BrowserQueryParams,
    api: MetaApiHandle,
    navigator: StoredValue<Rc<dyn Navigator>, LocalStorage>,
}

impl EditorServices {
    pub fn new(
        project_ref: Signal<String>,
        store: MetaStore,
        api: MetaApiHandle,
        navigator: Rc<dyn Navigator>,
        notifications: NotificationService,
    ) -> Self {
        Self {
            project_ref,
            store,
            editor: EntityEditor::new(),
            deletion: DeletionController::new(),
            notifications,
            query: BrowserQueryParams::new(),
            api,
            navigator: StoredValue::new_local(navigator),
        }
    }

    pub fn loader(&self) -> MetadataLoader {
        MetadataLoader::new(self.api.get(), self.store)
    }

    pub fn select_schema(&self, schema: &str) {
        let path = schema_root_path(&self.project_ref.get_untracked(), schema);
        self.navigator.with_value(|n| n.navigate(&path));
    }

    /// Confirms the pending deletion in the background
    pub fn confirm_delete(&self) {
        let svc = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let api = svc.api.get();
            let navigator = svc.navigator.get_value();
            let project_ref = svc.project_ref.get_untracked();
            let ctx = DeletionContext {
                project_ref: &project_ref,
                api: api.as_ref(),
                navigator: navigator.as_ref(),
                notifier: &svc.notifications,
                query: &svc.query,
                known_tables: svc.store.tables_where(|_| true),
            };
            if let Some(outcome) = svc.deletion.confirm_delete(&ctx).await {
                apply_outcome(svc.store, &outcome);
            }
        });
    }
}

pub fn use_editor_services() -> EditorServices {
    use_context::<EditorServices>().expect("EditorServices not found in context")
}
