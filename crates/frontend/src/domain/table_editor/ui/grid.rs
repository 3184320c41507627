use contracts::meta::{is_realtime_enabled, Column, TableLike};
use leptos::prelude::*;
use thaw::*;

use crate::domain::table_editor::deletion::DeletionTarget;
use crate::domain::table_editor::filters::{Filter, Sort, FILTER_PARAM, SORT_PARAM};
use crate::domain::table_editor::services::use_editor_services;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;

/// Column grid of the entity addressed by the route
#[component]
pub fn GridEditor(#[prop(into)] entity_id: Signal<Option<i64>>) -> impl IntoView {
    let svc = use_editor_services();
    let store = svc.store;
    let entity = Memo::new(move |_| entity_id.get().and_then(|id| store.entity(id)));

    let filters = move || {
        svc.query
            .watch(FILTER_PARAM)
            .iter()
            .filter_map(|p| Filter::parse(p))
            .collect::<Vec<_>>()
    };
    let sorts = move || {
        svc.query
            .watch(SORT_PARAM)
            .iter()
            .filter_map(|p| Sort::parse(p))
            .collect::<Vec<_>>()
    };

    move || {
        let Some(id) = entity_id.get() else {
            return view! {
                <div class="grid-editor__empty">"Select a table from the menu to view its data"</div>
            }
            .into_any();
        };
        let Some(entity) = entity.get() else {
            return match store.table.error() {
                Some(e) => view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__text">{format!("Failed to load entity {}: {}", id, e)}</span>
                    </div>
                }
                .into_any(),
                None => view! {
                    <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: 32px;">
                        <Spinner />
                        <span>"Loading..."</span>
                    </Flex>
                }
                .into_any(),
            };
        };

        let editable = entity.is_editable();
        let columns: Vec<Column> = entity.columns().to_vec();
        let title = format!("{}.{}", entity.schema(), entity.name());
        let kind = entity.kind().as_str();
        let entity_ref = entity.id();
        let realtime = move || store.publications.with(|p| is_realtime_enabled(p, entity_ref));
        let read_only_note = match &entity {
            TableLike::Table(_) => None,
            _ => Some(format!("This {} is read only in the grid", kind)),
        };

        view! {
            <div class="grid-editor">
                <div class="header">
                    <div class="header__content">
                        <h1 class="header__title">{title}</h1>
                        <Badge>{kind}</Badge>
                        <Show when=realtime>
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Realtime"</Badge>
                        </Show>
                    </div>
                    <Show when=move || editable>
                        <div class="header__actions">
                            <Button on_click=Callback::new(move |_| svc.editor.add_row())>
                                {icon("plus")}
                                " Insert row"
                            </Button>
                            <Button variant="secondary" on_click=Callback::new(move |_| svc.editor.add_column())>
                                {icon("plus")}
                                " Insert column"
                            </Button>
                        </div>
                    </Show>
                </div>

                {read_only_note.map(|note| view! {
                    <MessageBar intent=MessageBarIntent::Info>
                        <span>{note}</span>
                    </MessageBar>
                })}

                <div class="grid-editor__chips">
                    {move || filters().into_iter().map(|f| view! {
                        <span class="chip">{format!("{} {} {}", f.column, f.operator, f.value)}</span>
                    }).collect_view()}
                    {move || sorts().into_iter().map(|s| view! {
                        <span class="chip">{format!("{} {}", s.column, if s.ascending { "↑" } else { "↓" })}</span>
                    }).collect_view()}
                </div>

                <div class="table">
                    <table class="table__data">
                        <thead class="table__head">
                            <tr>
                                {columns.into_iter().map(|column| {
                                    let for_edit = column.clone();
                                    let for_delete = column.clone();
                                    view! {
                                        <th class="table__header-cell">
                                            <span class="table__header-name">{column.name.clone()}</span>
                                            <span class="table__header-type">{column.format.clone()}</span>
                                            <Show when=move || editable>
                                                {
                                                    let for_edit = for_edit.clone();
                                                    let for_delete = for_delete.clone();
                                                    view! {
                                                        <Button variant="ghost" size="sm" title="Edit column"
                                                            on_click=Callback::new(move |_| svc.editor.edit_column(for_edit.clone()))>
                                                            {icon("edit")}
                                                        </Button>
                                                        <Button variant="ghost" size="sm" title="Delete column"
                                                            on_click=Callback::new(move |_| svc.deletion.request_delete(DeletionTarget::Column(for_delete.clone())))>
                                                            {icon("delete")}
                                                        </Button>
                                                    }
                                                }
                                            </Show>
                                        </th>
                                    }
                                }).collect_view()}
                            </tr>
                        </thead>
                    </table>
                </div>
            </div>
        }
        .into_any()
    }
}
