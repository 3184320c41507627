use leptos::prelude::*;

use crate::domain::table_editor::services::use_editor_services;
use crate::domain::table_editor::side_panel::SidePanel;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;

/// Боковая панель редактирования строки, колонки или таблицы
#[component]
pub fn SidePanelEditor() -> impl IntoView {
    let svc = use_editor_services();
    let editor = svc.editor;
    let panel = Memo::new(move |_| editor.panel());

    view! {
        <Show when=move || panel.with(SidePanel::is_open)>
            <aside class="side-panel">
                <div class="side-panel__header">
                    <h2 class="side-panel__title">{move || panel.with(SidePanel::title)}</h2>
                    <Button variant="ghost" size="sm" title="Close"
                        on_click=Callback::new(move |_| editor.close())>
                        {icon("x")}
                    </Button>
                </div>
                {move || panel.with(|p| panel_hint(p)).map(|hint| view! {
                    <p class="side-panel__hint">{hint}</p>
                })}
                <div class="side-panel__body">
                    {move || match panel.get() {
                        SidePanel::Row { row: Some(row) } => row
                            .values
                            .into_iter()
                            .map(|(key, value)| view! {
                                <div class="side-panel__field">
                                    <span class="side-panel__label">{key}</span>
                                    <span class="side-panel__value">{value.to_string()}</span>
                                </div>
                            })
                            .collect_view()
                            .into_any(),
                        SidePanel::Column { column: Some(column) } => view! {
                            <div class="side-panel__field">
                                <span class="side-panel__label">"Type"</span>
                                <span class="side-panel__value">{column.format}</span>
                            </div>
                            <div class="side-panel__field">
                                <span class="side-panel__label">"Default"</span>
                                <span class="side-panel__value">{column.default_value.unwrap_or_default()}</span>
                            </div>
                        }
                        .into_any(),
                        SidePanel::Table { table: Some(table), .. } => table
                            .columns
                            .into_iter()
                            .map(|c| view! {
                                <div class="side-panel__field">
                                    <span class="side-panel__label">{c.name}</span>
                                    <span class="side-panel__value">{c.format}</span>
                                </div>
                            })
                            .collect_view()
                            .into_any(),
                        _ => ().into_any(),
                    }}
                </div>
                <div class="side-panel__footer">
                    <Button variant="secondary" on_click=Callback::new(move |_| editor.close())>
                        "Cancel"
                    </Button>
                </div>
            </aside>
        </Show>
    }
}

/// Пояснение под заголовком: новая сущность или копия таблицы
fn panel_hint(panel: &SidePanel) -> Option<&'static str> {
    if panel.is_duplicating() {
        Some("A new table will be created with the same columns")
    } else if panel.is_new() {
        Some("Fill in the fields below to create it")
    } else {
        None
    }
}
