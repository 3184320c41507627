//! Metadata loading triggers of the table editor.
//!
//! Планирование загрузок отделено от исполнения: триггеры возвращают список
//! `LoadRequest`, а `MetadataLoader` запускает их как независимые задачи.

use std::rc::Rc;

use contracts::meta::{extension, Extension, VAULT_EXTENSION};

use super::api::MetaApi;
use super::error::ApiError;
use super::store::{Loadable, MetaStore};
use crate::system::auth::GateState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRequest {
    Schemas,
    Types,
    Policies,
    Publications,
    Extensions,
    Views,
    ForeignTables,
    SchemaTables(String),
    SchemaViews(String),
    TableById(i64),
    VaultSecrets,
}

/// Loads issued whenever a project context is (re-)established
pub fn project_loads() -> Vec<LoadRequest> {
    vec![
        LoadRequest::Schemas,
        LoadRequest::Types,
        LoadRequest::Policies,
        LoadRequest::Publications,
        LoadRequest::Extensions,
        LoadRequest::Views,
        LoadRequest::ForeignTables,
    ]
}

/// Loads issued when the selected schema changes
pub fn schema_loads(schema: &str) -> Vec<LoadRequest> {
    vec![
        LoadRequest::SchemaTables(schema.to_string()),
        LoadRequest::SchemaViews(schema.to_string()),
    ]
}

/// Load for an entity addressed by the route, unless it is a view or a foreign table
pub fn entity_load(id: i64, is_view: bool, is_foreign_table: bool) -> Option<LoadRequest> {
    if is_view || is_foreign_table {
        None
    } else {
        Some(LoadRequest::TableById(id))
    }
}

pub fn vault_load(extensions: &[Extension]) -> Option<LoadRequest> {
    extension::is_installed(extensions, VAULT_EXTENSION).then_some(LoadRequest::VaultSecrets)
}

/// Nothing is loaded unless the gate allows reading metadata
pub fn gated(gate: GateState, requests: Vec<LoadRequest>) -> Vec<LoadRequest> {
    if gate.is_allowed() {
        requests
    } else {
        Vec::new()
    }
}

// ============================================================================
// Триггеры: что загрузить для текущего состояния страницы
// ============================================================================

fn scoped(gate: GateState, project_ref: &str, requests: Vec<LoadRequest>) -> Vec<LoadRequest> {
    if project_ref.is_empty() {
        return Vec::new();
    }
    gated(gate, requests)
}

/// Trigger 1: project context (re-)established
pub fn plan_project(gate: GateState, project_ref: &str) -> Vec<LoadRequest> {
    scoped(gate, project_ref, project_loads())
}

/// Trigger 2: selected schema changed
pub fn plan_schema(gate: GateState, project_ref: &str, schema: &str) -> Vec<LoadRequest> {
    scoped(gate, project_ref, schema_loads(schema))
}

/// Trigger 3: entity addressed by the route changed
pub fn plan_entity(
    gate: GateState,
    project_ref: &str,
    id: Option<i64>,
    store: &MetaStore,
) -> Vec<LoadRequest> {
    let request = id.and_then(|id| entity_load(id, store.is_view(id), store.is_foreign_table(id)));
    scoped(gate, project_ref, request.into_iter().collect())
}

/// Trigger 4: extension list changed
pub fn plan_vault(gate: GateState, project_ref: &str, extensions: &[Extension]) -> Vec<LoadRequest> {
    scoped(gate, project_ref, vault_load(extensions).into_iter().collect())
}

/// Runs planned loads against the API and applies results to the store
#[derive(Clone)]
pub struct MetadataLoader {
    api: Rc<dyn MetaApi>,
    store: MetaStore,
}

impl MetadataLoader {
    pub fn new(api: Rc<dyn MetaApi>, store: MetaStore) -> Self {
        Self { api, store }
    }

    /// Fire-and-forget: every request becomes its own task
    pub fn dispatch(&self, project_ref: &str, requests: Vec<LoadRequest>) {
        for request in requests {
            let loader = self.clone();
            let project_ref = project_ref.to_string();
            wasm_bindgen_futures::spawn_local(async move {
                loader.run(&project_ref, request).await;
            });
        }
    }

    /// Executes one load; returns `false` if the result was dropped as stale
    pub async fn run(&self, project_ref: &str, request: LoadRequest) -> bool {
        log::debug!("meta load {:?} for project {}", request, project_ref);
        let api = self.api.as_ref();
        let store = self.store;
        match &request {
            LoadRequest::Schemas => apply(&request, store.schemas, api.schemas(project_ref)).await,
            LoadRequest::Types => apply(&request, store.types, api.types(project_ref)).await,
            LoadRequest::Policies => {
                apply(&request, store.policies, api.policies(project_ref)).await
            }
            LoadRequest::Publications => {
                apply(&request, store.publications, api.publications(project_ref)).await
            }
            LoadRequest::Extensions => {
                apply(&request, store.extensions, api.extensions(project_ref)).await
            }
            LoadRequest::Views => apply(&request, store.views, api.views(project_ref, None)).await,
            LoadRequest::ForeignTables => {
                apply(&request, store.foreign_tables, api.foreign_tables(project_ref)).await
            }
            LoadRequest::SchemaTables(schema) => {
                apply(&request, store.schema_tables, api.tables(project_ref, schema)).await
            }
            LoadRequest::SchemaViews(schema) => {
                let fut = api.views(project_ref, Some(schema.as_str()));
                apply(&request, store.schema_views, fut).await
            }
            LoadRequest::TableById(id) => {
                let id = *id;
                let fut = async move { api.table(project_ref, id).await.map(Some) };
                apply(&request, store.table, fut).await
            }
            LoadRequest::VaultSecrets => {
                apply(&request, store.vault_secrets, api.vault_secrets(project_ref)).await
            }
        }
    }
}

async fn apply<T, F>(request: &LoadRequest, slot: Loadable<T>, load: F) -> bool
where
    T: Clone + Default + Send + Sync + 'static,
    F: std::future::Future<Output = Result<T, ApiError>>,
{
    let ticket = slot.begin();
    let result = load.await;
    if let Err(e) = &result {
        log::error!("meta load {:?} failed: {}", request, e);
    }
    let applied = slot.finish(ticket, result);
    if !applied {
        log::debug!("meta load {:?} superseded by a newer request", request);
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meta::testing::FakeMetaApi;
    use contracts::meta::View;

    #[test]
    fn test_project_loads_cover_all_collections() {
        let loads = project_loads();
        assert_eq!(loads.len(), 7);
        assert!(loads.contains(&LoadRequest::ForeignTables));
        assert!(!loads.contains(&LoadRequest::VaultSecrets));
    }

    #[test]
    fn test_denied_gate_plans_no_loads() {
        assert!(gated(GateState::Denied, project_loads()).is_empty());
        assert!(gated(GateState::Resolving, schema_loads("public")).is_empty());
        assert_eq!(gated(GateState::Allowed, schema_loads("public")).len(), 2);
    }

    #[test]
    fn test_entity_load_skips_views_and_foreign_tables() {
        assert_eq!(entity_load(5, false, false), Some(LoadRequest::TableById(5)));
        assert_eq!(entity_load(5, true, false), None);
        assert_eq!(entity_load(5, false, true), None);
    }

    #[test]
    fn test_vault_load_requires_installed_extension() {
        let mut vault = Extension {
            name: VAULT_EXTENSION.to_string(),
            schema: Some("vault".to_string()),
            default_version: "0.2.8".to_string(),
            installed_version: None,
        };
        assert_eq!(vault_load(std::slice::from_ref(&vault)), None);
        vault.installed_version = Some("0.2.8".to_string());
        assert_eq!(vault_load(&[vault]), Some(LoadRequest::VaultSecrets));
    }

    fn installed_vault() -> Extension {
        Extension {
            name: VAULT_EXTENSION.to_string(),
            schema: Some("vault".to_string()),
            default_version: "0.2.8".to_string(),
            installed_version: Some("0.2.8".to_string()),
        }
    }

    #[test]
    fn test_denied_gate_plans_nothing_for_any_trigger() {
        let store = MetaStore::new();
        let vault = [installed_vault()];
        for gate in [GateState::Denied, GateState::Resolving] {
            assert!(plan_project(gate, "proj").is_empty());
            assert!(plan_schema(gate, "proj", "public").is_empty());
            assert!(plan_entity(gate, "proj", Some(7), &store).is_empty());
            assert!(plan_vault(gate, "proj", &vault).is_empty());
        }
    }

    #[test]
    fn test_missing_project_ref_plans_nothing() {
        let store = MetaStore::new();
        let allowed = GateState::Allowed;
        assert!(plan_project(allowed, "").is_empty());
        assert!(plan_schema(allowed, "", "public").is_empty());
        assert!(plan_entity(allowed, "", Some(7), &store).is_empty());
        assert!(plan_vault(allowed, "", &[installed_vault()]).is_empty());
    }

    #[test]
    fn test_allowed_gate_plans_each_trigger() {
        let store = MetaStore::new();
        let allowed = GateState::Allowed;
        assert_eq!(plan_project(allowed, "proj").len(), 7);
        assert_eq!(
            plan_schema(allowed, "proj", "audit"),
            vec![
                LoadRequest::SchemaTables("audit".to_string()),
                LoadRequest::SchemaViews("audit".to_string()),
            ]
        );
        assert_eq!(plan_entity(allowed, "proj", Some(7), &store), vec![LoadRequest::TableById(7)]);
        assert!(plan_entity(allowed, "proj", None, &store).is_empty());
    }

    #[test]
    fn test_entity_plan_skips_loaded_views() {
        let store = MetaStore::new();
        let ticket = store.views.begin();
        store.views.finish(
            ticket,
            Ok(vec![View {
                id: 7,
                schema: "public".to_string(),
                name: "active_users".to_string(),
                is_updatable: false,
                comment: None,
                columns: vec![],
            }]),
        );
        assert!(plan_entity(GateState::Allowed, "proj", Some(7), &store).is_empty());
    }

    #[test]
    fn test_vault_plan_follows_extension_list() {
        let allowed = GateState::Allowed;
        let store = MetaStore::new();
        assert!(store.extensions.with_untracked(|exts| plan_vault(allowed, "proj", exts)).is_empty());

        let mut vault = installed_vault();
        vault.installed_version = None;
        let ticket = store.extensions.begin();
        store.extensions.finish(ticket, Ok(vec![vault.clone()]));
        assert!(store.extensions.with_untracked(|exts| plan_vault(allowed, "proj", exts)).is_empty());

        let ticket = store.extensions.begin();
        store.extensions.finish(ticket, Ok(vec![installed_vault()]));
        assert_eq!(
            store.extensions.with(|exts| plan_vault(allowed, "proj", exts)),
            vec![LoadRequest::VaultSecrets]
        );
    }

    #[tokio::test]
    async fn test_run_applies_schema_tables() {
        let api = Rc::new(FakeMetaApi::with_tables(vec![
            FakeMetaApi::table(1, "public", "users"),
            FakeMetaApi::table(2, "public", "orders"),
            FakeMetaApi::table(3, "audit", "events"),
        ]));
        let store = MetaStore::new();
        let loader = MetadataLoader::new(api.clone(), store);

        assert!(loader.run("proj", LoadRequest::SchemaTables("public".to_string())).await);

        let names: Vec<String> = store
            .schema_tables
            .get_untracked()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["users".to_string(), "orders".to_string()]);
        assert_eq!(api.calls(), vec!["tables:public".to_string()]);
    }

    #[tokio::test]
    async fn test_run_table_by_id_failure_is_recorded() {
        let api = Rc::new(FakeMetaApi::default());
        let store = MetaStore::new();
        let loader = MetadataLoader::new(api, store);

        assert!(loader.run("proj", LoadRequest::TableById(99)).await);
        assert_eq!(store.table.get_untracked(), None);
        assert!(store.table.error_untracked().is_some());
    }
}
