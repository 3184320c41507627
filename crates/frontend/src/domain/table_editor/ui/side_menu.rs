use contracts::meta::Table;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::table_editor::navigation::entity_path;
use crate::domain::table_editor::services::use_editor_services;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;

/// Schema selector and the entities of the selected schema
#[component]
pub fn SideMenu(
    #[prop(into)] selected_schema: Signal<String>,
    on_select_schema: Callback<String>,
    on_add_table: Callback<()>,
    on_edit_table: Callback<Table>,
    on_delete_table: Callback<Table>,
    on_duplicate_table: Callback<Table>,
) -> impl IntoView {
    let svc = use_editor_services();
    let store = svc.store;
    let project_ref = svc.project_ref;

    let foreign_tables = move || {
        let schema = selected_schema.get();
        store
            .foreign_tables
            .get()
            .into_iter()
            .filter(|f| f.schema == schema)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="side-menu">
            <div class="side-menu__schema">
                <label for="schema-select">"Schema"</label>
                <select
                    id="schema-select"
                    class="side-menu__schema-select"
                    on:change=move |ev| on_select_schema.run(event_target_value(&ev))
                >
                    {move || {
                        let current = selected_schema.get();
                        store.schemas.get().into_iter().map(|schema| {
                            let is_current = schema.name == current;
                            view! {
                                <option value=schema.name.clone() selected=is_current>{schema.name.clone()}</option>
                            }
                        }).collect_view()
                    }}
                </select>
            </div>

            <Button variant="secondary" on_click=Callback::new(move |_| on_add_table.run(()))>
                {icon("plus")}
                " New table"
            </Button>

            <Show when=move || store.schema_tables.is_loading()>
                <div class="side-menu__loading">"Loading tables..."</div>
            </Show>

            {move || store.schema_tables.error().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{format!("Failed to load tables: {}", e)}</span>
                </div>
            })}

            <ul class="side-menu__list">
                {move || store.schema_tables.get().into_iter().map(|table| {
                    let href = entity_path(&project_ref.get(), table.id, &table.schema);
                    let for_edit = table.clone();
                    let for_duplicate = table.clone();
                    let for_delete = table.clone();
                    view! {
                        <li class="side-menu__item">
                            <A href=href attr:class="side-menu__link">
                                {icon("table")}
                                <span>{table.name.clone()}</span>
                            </A>
                            <span class="side-menu__actions">
                                <Button variant="ghost" size="sm" title="Edit table"
                                    on_click=Callback::new(move |_| on_edit_table.run(for_edit.clone()))>
                                    {icon("edit")}
                                </Button>
                                <Button variant="ghost" size="sm" title="Duplicate table"
                                    on_click=Callback::new(move |_| on_duplicate_table.run(for_duplicate.clone()))>
                                    {icon("copy")}
                                </Button>
                                <Button variant="ghost" size="sm" title="Delete table"
                                    on_click=Callback::new(move |_| on_delete_table.run(for_delete.clone()))>
                                    {icon("delete")}
                                </Button>
                            </span>
                        </li>
                    }
                }).collect_view()}

                {move || store.schema_views.get().into_iter().map(|v| {
                    let href = entity_path(&project_ref.get(), v.id, &v.schema);
                    view! {
                        <li class="side-menu__item side-menu__item--view">
                            <A href=href attr:class="side-menu__link">
                                {icon("view")}
                                <span>{v.name.clone()}</span>
                            </A>
                        </li>
                    }
                }).collect_view()}

                {move || foreign_tables().into_iter().map(|f| {
                    let href = entity_path(&project_ref.get(), f.id, &f.schema);
                    view! {
                        <li class="side-menu__item side-menu__item--foreign">
                            <A href=href attr:class="side-menu__link">
                                {icon("foreign-table")}
                                <span>{f.name.clone()}</span>
                            </A>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}
