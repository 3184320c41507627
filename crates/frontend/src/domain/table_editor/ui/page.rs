use std::rc::Rc;

use contracts::meta::Table;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_params_map, use_query_map};

use super::confirm_dialogs::{ConfirmDeleteColumnDialog, ConfirmDeleteTableDialog};
use super::grid::GridEditor;
use super::layout::TableEditorLayout;
use super::side_panel_editor::SidePanelEditor;
use crate::domain::meta::MetaStore;
use crate::domain::table_editor::deletion::DeletionTarget;
use crate::domain::table_editor::navigation::{RouterNavigator, DEFAULT_SCHEMA};
use crate::domain::table_editor::services::{EditorServices, MetaApiHandle};
use crate::shared::notifications::NotificationService;

/// Страница редактора таблиц проекта: `/project/:ref/editor[/:id]?schema=`
#[component]
pub fn TableEditorPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let location = use_location();

    let project_ref = Signal::derive(move || params.with(|p| p.get("ref").unwrap_or_default()));
    let selected_schema = Signal::derive(move || {
        query
            .with(|q| q.get("schema"))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SCHEMA.to_string())
    });
    let entity_id = Signal::derive(move || {
        params.with(|p| p.get("id").and_then(|id| id.parse::<i64>().ok()))
    });

    let api = use_context::<MetaApiHandle>().expect("MetaApiHandle not found in context");
    let store = use_context::<MetaStore>().expect("MetaStore not found in context");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not found in context");
    let navigator = Rc::new(RouterNavigator::new(use_navigate()));

    let svc = EditorServices::new(project_ref, store, api, navigator, notifications);
    provide_context(svc);

    // filter/sort params follow the address bar
    Effect::new(move |_| {
        location.search.track();
        svc.query.sync_from_location();
    });

    let on_select_schema = Callback::new(move |schema: String| svc.select_schema(&schema));
    let on_add_table = Callback::new(move |_: ()| svc.editor.add_table());
    let on_edit_table = Callback::new(move |table: Table| svc.editor.edit_table(table));
    let on_delete_table =
        Callback::new(move |table: Table| svc.deletion.request_delete(DeletionTarget::Table(table)));
    let on_duplicate_table = Callback::new(move |table: Table| svc.editor.duplicate_table(table));

    view! {
        <TableEditorLayout
            selected_schema=selected_schema
            entity_id=entity_id
            on_select_schema=on_select_schema
            on_add_table=on_add_table
            on_edit_table=on_edit_table
            on_delete_table=on_delete_table
            on_duplicate_table=on_duplicate_table
        >
            <div class="table-editor">
                <GridEditor entity_id=entity_id />
                <SidePanelEditor />
            </div>
            <ConfirmDeleteColumnDialog />
            <ConfirmDeleteTableDialog />
        </TableEditorLayout>
    }
}
