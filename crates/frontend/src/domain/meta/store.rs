use contracts::meta::{
    Extension, ForeignTable, Policy, PostgresType, Publication, Schema, Table, TableLike,
    VaultSecret, View,
};
use leptos::prelude::*;

use super::error::ApiError;

/// Request generation of one collection.
///
/// Each dispatched load takes a ticket; only the response carrying the latest
/// ticket is applied, so a slow response never overwrites a newer one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// Reactive slot for one remotely loaded value
pub struct Loadable<T: Send + Sync + 'static> {
    value: RwSignal<T>,
    error: RwSignal<Option<String>>,
    loading: RwSignal<bool>,
    generation: RwSignal<Generation>,
}

// Signals are `Copy` regardless of `T`; derive would demand `T: Copy`.
impl<T: Send + Sync + 'static> Clone for Loadable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Loadable<T> {}

impl<T: Clone + Default + Send + Sync + 'static> Loadable<T> {
    pub fn new() -> Self {
        Self {
            value: RwSignal::new(T::default()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            generation: RwSignal::new(Generation::default()),
        }
    }

    /// Marks a load as started and returns its ticket
    pub fn begin(&self) -> u64 {
        self.loading.set(true);
        let mut ticket = 0;
        self.generation.update(|g| ticket = g.next());
        ticket
    }

    /// Applies a finished load. Returns `false` when the response is stale.
    pub fn finish(&self, ticket: u64, result: Result<T, ApiError>) -> bool {
        if !self.generation.get_untracked().is_current(ticket) {
            return false;
        }
        match result {
            Ok(value) => {
                self.value.set(value);
                self.error.set(None);
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
        self.loading.set(false);
        true
    }

    pub fn get(&self) -> T {
        self.value.get()
    }

    pub fn get_untracked(&self) -> T {
        self.value.get_untracked()
    }

    /// Tracked borrow; effects reading through it re-run on every reload
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.value.with(f)
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.value.with_untracked(f)
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.value.update(f);
    }

    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    pub fn error_untracked(&self) -> Option<String> {
        self.error.get_untracked()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }
}

impl<T: Clone + Default + Send + Sync + 'static> Default for Loadable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata of the current project, replaced wholesale on every reload
#[derive(Clone, Copy)]
pub struct MetaStore {
    pub schemas: Loadable<Vec<Schema>>,
    pub types: Loadable<Vec<PostgresType>>,
    pub policies: Loadable<Vec<Policy>>,
    pub publications: Loadable<Vec<Publication>>,
    pub extensions: Loadable<Vec<Extension>>,
    /// Views of every schema
    pub views: Loadable<Vec<View>>,
    pub foreign_tables: Loadable<Vec<ForeignTable>>,
    /// Tables of the selected schema, in load order
    pub schema_tables: Loadable<Vec<Table>>,
    /// Views of the selected schema
    pub schema_views: Loadable<Vec<View>>,
    /// Table addressed directly by the route
    pub table: Loadable<Option<Table>>,
    pub vault_secrets: Loadable<Vec<VaultSecret>>,
}

impl MetaStore {
    pub fn new() -> Self {
        Self {
            schemas: Loadable::new(),
            types: Loadable::new(),
            policies: Loadable::new(),
            publications: Loadable::new(),
            extensions: Loadable::new(),
            views: Loadable::new(),
            foreign_tables: Loadable::new(),
            schema_tables: Loadable::new(),
            schema_views: Loadable::new(),
            table: Loadable::new(),
            vault_secrets: Loadable::new(),
        }
    }

    pub fn is_view(&self, id: i64) -> bool {
        self.views.with_untracked(|views| views.iter().any(|v| v.id == id))
            || self
                .schema_views
                .with_untracked(|views| views.iter().any(|v| v.id == id))
    }

    pub fn is_foreign_table(&self, id: i64) -> bool {
        self.foreign_tables
            .with_untracked(|tables| tables.iter().any(|t| t.id == id))
    }

    /// Loaded schema tables matching `predicate`, in load order
    pub fn tables_where(&self, predicate: impl Fn(&Table) -> bool) -> Vec<Table> {
        self.schema_tables.with_untracked(|tables| {
            tables.iter().filter(|t| predicate(t)).cloned().collect()
        })
    }

    /// Resolves an entity id against everything loaded so far (tracked)
    pub fn entity(&self, id: i64) -> Option<TableLike> {
        if let Some(table) = self.table.get().filter(|t| t.id == id) {
            return Some(TableLike::Table(table));
        }
        if let Some(table) = self.schema_tables.get().into_iter().find(|t| t.id == id) {
            return Some(TableLike::Table(table));
        }
        let view = self
            .schema_views
            .get()
            .into_iter()
            .chain(self.views.get())
            .find(|v| v.id == id);
        if let Some(view) = view {
            return Some(TableLike::View(view));
        }
        self.foreign_tables
            .get()
            .into_iter()
            .find(|f| f.id == id)
            .map(TableLike::ForeignTable)
    }

    /// Replaces a reloaded table wherever it is held
    pub fn upsert_table(&self, table: Table) {
        self.schema_tables.update(|tables| {
            if let Some(slot) = tables.iter_mut().find(|t| t.id == table.id) {
                *slot = table.clone();
            }
        });
        self.table.update(|slot| {
            if slot.as_ref().map(|t| t.id) == Some(table.id) {
                *slot = Some(table);
            }
        });
    }

    /// Drops a deleted table from the loaded collections
    pub fn remove_table(&self, id: i64) {
        self.schema_tables.update(|tables| tables.retain(|t| t.id != id));
        self.table.update(|slot| {
            if slot.as_ref().map(|t| t.id) == Some(id) {
                *slot = None;
            }
        });
    }
}

impl Default for MetaStore {
    fn default() -> Self {
        Self::new()
    }
}
