use leptos::prelude::*;
use thaw::*;

use crate::domain::table_editor::deletion::{Deletion, DeletionKind, DeletionTarget};
use crate::domain::table_editor::services::use_editor_services;
use crate::shared::components::ui::{Button, Checkbox};

const CASCADE_DOCS_URL: &str = "https://www.postgresql.org/docs/current/ddl-depend.html";

#[component]
pub fn ConfirmDeleteColumnDialog() -> impl IntoView {
    view! { <ConfirmDeleteDialog kind=DeletionKind::Column /> }
}

#[component]
pub fn ConfirmDeleteTableDialog() -> impl IntoView {
    view! { <ConfirmDeleteDialog kind=DeletionKind::Table /> }
}

fn dialog_title(kind: DeletionKind, target: Option<&DeletionTarget>) -> String {
    let name = target.map(DeletionTarget::name).unwrap_or_default();
    match kind {
        DeletionKind::Column => format!("Confirm deletion of column \"{}\"", name),
        DeletionKind::Table => format!("Confirm deletion of table \"{}\"", name),
    }
}

fn dialog_text(kind: DeletionKind, target: Option<&DeletionTarget>) -> String {
    let name = target.map(DeletionTarget::name).unwrap_or_default();
    match kind {
        DeletionKind::Column => format!(
            "Are you sure you want to delete the selected column \"{}\"? This action cannot be undone.",
            name
        ),
        DeletionKind::Table => format!(
            "Are you sure you want to delete the selected table \"{}\"? This action cannot be undone.",
            name
        ),
    }
}

fn cascade_label(kind: DeletionKind) -> &'static str {
    match kind {
        DeletionKind::Column => "Drop column with cascade?",
        DeletionKind::Table => "Drop table with cascade?",
    }
}

/// Диалог подтверждения удаления; открыт, пока удаление ожидает подтверждения или выполняется
#[component]
fn ConfirmDeleteDialog(kind: DeletionKind) -> impl IntoView {
    let svc = use_editor_services();
    let deletion = svc.deletion;
    let state = Memo::new(move |_| deletion.state());
    let open = RwSignal::new(false);

    Effect::new(move |_| {
        open.set(state.with(|s| s.is_open_for(kind)));
    });

    // закрытие диалога снаружи (маска, Esc) отменяет ожидающее удаление
    Effect::new(move |_| {
        if !open.get() && deletion.state_untracked().is_open_for(kind) {
            deletion.cancel_delete();
        }
    });

    let title = move || state.with(|s| dialog_title(kind, s.target()));
    let text = move || state.with(|s| dialog_text(kind, s.target()));
    let cascade = Signal::derive(move || state.with(Deletion::cascade));
    let in_flight = Signal::derive(move || state.with(Deletion::is_in_flight));
    let checkbox_id = match kind {
        DeletionKind::Column => "delete-column-cascade",
        DeletionKind::Table => "delete-table-cascade",
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Medium>
                            <p>{text}</p>
                            <Checkbox
                                id=checkbox_id.to_string()
                                label=cascade_label(kind).to_string()
                                checked=cascade
                                disabled=in_flight
                                on_change=Callback::new(move |_| deletion.toggle_cascade())
                            />
                            <Show when=move || state.with(|s| s.shows_cascade_warning(kind))>
                                <MessageBar intent=MessageBarIntent::Warning>
                                    <span>
                                        "Deleting with cascade will also delete objects that depend on it. "
                                        <a href=CASCADE_DOCS_URL target="_blank" rel="noreferrer">
                                            "About dependency tracking"
                                        </a>
                                    </span>
                                </MessageBar>
                            </Show>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            variant="secondary"
                            disabled=in_flight
                            on_click=Callback::new(move |_| deletion.cancel_delete())
                        >
                            "Cancel"
                        </Button>
                        <Button
                            variant="danger"
                            busy=in_flight
                            on_click=Callback::new(move |_| svc.confirm_delete())
                        >
                            "Delete"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meta::testing::FakeMetaApi;

    #[test]
    fn test_texts_name_the_target() {
        let users = FakeMetaApi::table(1, "public", "users");
        let target = DeletionTarget::Column(FakeMetaApi::column(&users, 2, "email"));
        assert_eq!(
            dialog_title(DeletionKind::Column, Some(&target)),
            "Confirm deletion of column \"email\""
        );
        assert!(dialog_text(DeletionKind::Column, Some(&target)).contains("\"email\""));

        let table = DeletionTarget::Table(FakeMetaApi::table(2, "public", "orders"));
        assert_eq!(
            dialog_title(DeletionKind::Table, Some(&table)),
            "Confirm deletion of table \"orders\""
        );
    }

    #[test]
    fn test_title_without_target() {
        assert_eq!(dialog_title(DeletionKind::Table, None), "Confirm deletion of table \"\"");
    }
}
