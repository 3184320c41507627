//! Column and table deletion: confirmation state and the delete flow.
//!
//! State per pending target: idle → pending → in flight → idle.
//! The flow always ends idle; remote failures become notifications.

use contracts::meta::{Column, Table};
use leptos::prelude::*;

use super::filters::remove_column_references;
use super::navigation::{after_table_deleted, Navigator};
use crate::domain::meta::{ApiError, MetaApi, MetaStore};
use crate::shared::notifications::{NotificationCategory, Notifier};
use crate::shared::query_params::QueryParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionKind {
    Column,
    Table,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeletionTarget {
    Column(Column),
    Table(Table),
}

impl DeletionTarget {
    pub fn kind(&self) -> DeletionKind {
        match self {
            Self::Column(_) => DeletionKind::Column,
            Self::Table(_) => DeletionKind::Table,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Column(c) => &c.name,
            Self::Table(t) => &t.name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Deletion {
    #[default]
    Idle,
    Pending {
        target: DeletionTarget,
        cascade: bool,
    },
    InFlight {
        target: DeletionTarget,
        cascade: bool,
    },
}

impl Deletion {
    /// Enters confirmation with cascade off. Ignored while a delete is in flight.
    pub fn request(&mut self, target: DeletionTarget) -> bool {
        if self.is_in_flight() {
            return false;
        }
        *self = Self::Pending {
            target,
            cascade: false,
        };
        true
    }

    pub fn toggle_cascade(&mut self) {
        if let Self::Pending { cascade, .. } = self {
            *cascade = !*cascade;
        }
    }

    /// In-flight deletes cannot be cancelled
    pub fn cancel(&mut self) {
        if matches!(self, Self::Pending { .. }) {
            *self = Self::Idle;
        }
    }

    /// Pending → in flight; returns what to delete
    pub fn begin(&mut self) -> Option<(DeletionTarget, bool)> {
        let Self::Pending { target, cascade } = self else {
            return None;
        };
        let request = (target.clone(), *cascade);
        *self = Self::InFlight {
            target: request.0.clone(),
            cascade: request.1,
        };
        Some(request)
    }

    pub fn finish(&mut self) {
        *self = Self::Idle;
    }

    pub fn target(&self) -> Option<&DeletionTarget> {
        match self {
            Self::Idle => None,
            Self::Pending { target, .. } | Self::InFlight { target, .. } => Some(target),
        }
    }

    pub fn cascade(&self) -> bool {
        match self {
            Self::Idle => false,
            Self::Pending { cascade, .. } | Self::InFlight { cascade, .. } => *cascade,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }

    /// The confirmation dialog of `kind` is visible
    pub fn is_open_for(&self, kind: DeletionKind) -> bool {
        self.target().map(|t| t.kind()) == Some(kind)
    }

    pub fn shows_cascade_warning(&self, kind: DeletionKind) -> bool {
        self.is_open_for(kind) && self.cascade()
    }
}

/// Collaborators of one delete call
pub struct DeletionContext<'a> {
    pub project_ref: &'a str,
    pub api: &'a dyn MetaApi,
    pub navigator: &'a dyn Navigator,
    pub notifier: &'a dyn Notifier,
    pub query: &'a dyn QueryParams,
    /// Tables of the affected schema as loaded before the call
    pub known_tables: Vec<Table>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeletionOutcome {
    ColumnDeleted {
        column: Column,
        /// Owning table reloaded after the delete
        table: Option<Table>,
    },
    TableDeleted {
        table: Table,
        remaining: Vec<Table>,
    },
    Failed {
        target: DeletionTarget,
        error: ApiError,
    },
}

pub async fn execute(target: DeletionTarget, cascade: bool, ctx: &DeletionContext<'_>) -> DeletionOutcome {
    let result = match &target {
        DeletionTarget::Column(column) => {
            ctx.api
                .delete_column(ctx.project_ref, &column.id, cascade)
                .await
        }
        DeletionTarget::Table(table) => ctx.api.delete_table(ctx.project_ref, table.id, cascade).await,
    };

    if let Err(error) = result {
        log::error!("delete {} \"{}\" failed: {}", kind_label(&target), target.name(), error);
        ctx.notifier.notify(
            NotificationCategory::Error,
            format!("Failed to delete {} \"{}\": {}", kind_label(&target), target.name(), error),
        );
        return DeletionOutcome::Failed { target, error };
    }

    match target {
        DeletionTarget::Column(column) => {
            remove_column_references(ctx.query, &column.name);
            let table = match ctx.api.table(ctx.project_ref, column.table_id).await {
                Ok(table) => Some(table),
                Err(e) => {
                    log::warn!("reload of table {} failed: {}", column.table_id, e);
                    None
                }
            };
            log::info!("deleted column {}.{}", column.table, column.name);
            ctx.notifier.notify(
                NotificationCategory::Success,
                format!("Successfully deleted column \"{}\"", column.name),
            );
            DeletionOutcome::ColumnDeleted { column, table }
        }
        DeletionTarget::Table(table) => {
            let remaining = match ctx.api.tables(ctx.project_ref, &table.schema).await {
                Ok(tables) => tables,
                Err(e) => {
                    log::warn!("reload of schema {} failed: {}", table.schema, e);
                    ctx.known_tables.clone()
                }
            };
            let remaining: Vec<Table> = remaining.into_iter().filter(|t| t.id != table.id).collect();
            ctx.navigator
                .navigate(&after_table_deleted(ctx.project_ref, &table, &remaining));
            log::info!("deleted table {}.{}", table.schema, table.name);
            ctx.notifier.notify(
                NotificationCategory::Success,
                format!("Successfully deleted table \"{}\"", table.name),
            );
            DeletionOutcome::TableDeleted { table, remaining }
        }
    }
}

fn kind_label(target: &DeletionTarget) -> &'static str {
    match target.kind() {
        DeletionKind::Column => "column",
        DeletionKind::Table => "table",
    }
}

/// Writes the reloaded metadata of a finished delete into the store
pub fn apply_outcome(store: MetaStore, outcome: &DeletionOutcome) {
    match outcome {
        DeletionOutcome::ColumnDeleted {
            table: Some(table), ..
        } => store.upsert_table(table.clone()),
        DeletionOutcome::TableDeleted { table, remaining } => {
            store.remove_table(table.id);
            // the selected schema may have changed while the delete was in flight
            if store.tables_where(|t| t.schema != table.schema).is_empty() {
                let ticket = store.schema_tables.begin();
                store.schema_tables.finish(ticket, Ok(remaining.clone()));
            }
        }
        _ => {}
    }
}

/// Reactive holder of the pending deletion
#[derive(Clone, Copy)]
pub struct DeletionController {
    state: RwSignal<Deletion>,
}

impl DeletionController {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(Deletion::Idle),
        }
    }

    pub fn state(&self) -> Deletion {
        self.state.get()
    }

    pub fn state_untracked(&self) -> Deletion {
        self.state.get_untracked()
    }

    pub fn is_open_for(&self, kind: DeletionKind) -> bool {
        self.state.with(|s| s.is_open_for(kind))
    }

    pub fn request_delete(&self, target: DeletionTarget) {
        self.state.update(|s| {
            s.request(target);
        });
    }

    pub fn toggle_cascade(&self) {
        self.state.update(Deletion::toggle_cascade);
    }

    pub fn cancel_delete(&self) {
        self.state.update(Deletion::cancel);
    }

    /// Runs the pending delete to completion. `None` when nothing was pending.
    pub async fn confirm_delete(&self, ctx: &DeletionContext<'_>) -> Option<DeletionOutcome> {
        let mut request = None;
        self.state.update(|s| request = s.begin());
        let (target, cascade) = request?;

        let outcome = execute(target, cascade, ctx).await;
        self.state.update(Deletion::finish);
        Some(outcome)
    }
}

impl Default for DeletionController {
    fn default() -> Self {
        Self::new()
    }
}
