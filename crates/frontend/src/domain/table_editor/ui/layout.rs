use contracts::meta::Table;
use contracts::system::auth::PermissionAction;
use leptos::prelude::*;
use thaw::*;

use super::no_permission::NoPermission;
use super::side_menu::SideMenu;
use crate::domain::meta::loader::{plan_entity, plan_project, plan_schema, plan_vault};
use crate::domain::meta::LoadRequest;
use crate::domain::table_editor::services::use_editor_services;
use crate::layout::Shell;
use crate::system::auth::{use_check_permissions, GateState};

/// Table editor layout: permission gate, metadata loading and the side menu.
///
/// Each load trigger is its own effect and re-runs only when its inputs change.
#[component]
pub fn TableEditorLayout(
    #[prop(into)] selected_schema: Signal<String>,
    #[prop(into)] entity_id: Signal<Option<i64>>,
    on_select_schema: Callback<String>,
    on_add_table: Callback<()>,
    on_edit_table: Callback<Table>,
    on_delete_table: Callback<Table>,
    on_duplicate_table: Callback<Table>,
    children: ChildrenFn,
) -> impl IntoView {
    let svc = use_editor_services();
    let gate = use_check_permissions(PermissionAction::TenantSqlAdminRead, "tables");
    let loader = StoredValue::new_local(svc.loader());
    let dispatch = move |project_ref: &str, requests: Vec<LoadRequest>| {
        if !requests.is_empty() {
            loader.with_value(|l| l.dispatch(project_ref, requests));
        }
    };

    // project context
    Effect::new(move |_| {
        let project_ref = svc.project_ref.get();
        dispatch(&project_ref, plan_project(gate.get(), &project_ref));
    });

    // selected schema
    Effect::new(move |_| {
        let project_ref = svc.project_ref.get();
        let schema = selected_schema.get();
        dispatch(&project_ref, plan_schema(gate.get(), &project_ref, &schema));
    });

    // entity addressed by the route
    Effect::new(move |_| {
        let project_ref = svc.project_ref.get();
        let id = entity_id.get();
        dispatch(&project_ref, plan_entity(gate.get(), &project_ref, id, &svc.store));
    });

    // vault secrets; tracked so the effect re-runs when extensions arrive
    Effect::new(move |_| {
        let project_ref = svc.project_ref.get();
        let requests = svc
            .store
            .extensions
            .with(|exts| plan_vault(gate.get(), &project_ref, exts));
        dispatch(&project_ref, requests);
    });

    move || match gate.get() {
        GateState::Resolving => view! {
            <div class="table-editor__loading">
                <Spinner />
            </div>
        }
        .into_any(),
        GateState::Denied => view! {
            <Shell
                left=|| ().into_any()
                center=|| view! {
                    <NoPermission resource_text="You need additional permissions to view the table editor" />
                }.into_any()
            />
        }
        .into_any(),
        GateState::Allowed => {
            let children = children.clone();
            view! {
                <Shell
                    left=move || view! {
                        <SideMenu
                            selected_schema=selected_schema
                            on_select_schema=on_select_schema
                            on_add_table=on_add_table
                            on_edit_table=on_edit_table
                            on_delete_table=on_delete_table
                            on_duplicate_table=on_duplicate_table
                        />
                    }.into_any()
                    center=move || children().into_any()
                />
            }
            .into_any()
        }
    }
}
