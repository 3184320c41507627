//! In-memory `MetaApi` used by unit tests

use std::cell::RefCell;

use async_trait::async_trait;
use contracts::meta::{
    Column, Extension, ForeignTable, Policy, PostgresType, Publication, Schema, Table,
    VaultSecret, View,
};

use super::api::MetaApi;
use super::error::ApiError;

#[derive(Default)]
pub struct FakeMetaApi {
    pub tables: RefCell<Vec<Table>>,
    pub views: RefCell<Vec<View>>,
    pub delete_error: RefCell<Option<ApiError>>,
    calls: RefCell<Vec<String>>,
}

impl FakeMetaApi {
    pub fn with_tables(tables: Vec<Table>) -> Self {
        Self {
            tables: RefCell::new(tables),
            ..Default::default()
        }
    }

    pub fn failing_deletes(self, error: ApiError) -> Self {
        *self.delete_error.borrow_mut() = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn table(id: i64, schema: &str, name: &str) -> Table {
        Table {
            id,
            schema: schema.to_string(),
            name: name.to_string(),
            comment: None,
            rls_enabled: false,
            live_rows_estimate: 0,
            columns: vec![],
            primary_keys: vec![],
        }
    }

    pub fn column(table: &Table, ordinal: i32, name: &str) -> Column {
        Column {
            id: format!("{}.{}", table.id, ordinal),
            table_id: table.id,
            schema: table.schema.clone(),
            table: table.name.clone(),
            name: name.to_string(),
            ordinal_position: ordinal,
            data_type: "text".to_string(),
            format: "text".to_string(),
            is_nullable: true,
            is_identity: false,
            is_unique: false,
            default_value: None,
            comment: None,
        }
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl MetaApi for FakeMetaApi {
    async fn schemas(&self, _project_ref: &str) -> Result<Vec<Schema>, ApiError> {
        self.record("schemas".to_string());
        Ok(vec![])
    }

    async fn types(&self, _project_ref: &str) -> Result<Vec<PostgresType>, ApiError> {
        self.record("types".to_string());
        Ok(vec![])
    }

    async fn policies(&self, _project_ref: &str) -> Result<Vec<Policy>, ApiError> {
        self.record("policies".to_string());
        Ok(vec![])
    }

    async fn publications(&self, _project_ref: &str) -> Result<Vec<Publication>, ApiError> {
        self.record("publications".to_string());
        Ok(vec![])
    }

    async fn extensions(&self, _project_ref: &str) -> Result<Vec<Extension>, ApiError> {
        self.record("extensions".to_string());
        Ok(vec![])
    }

    async fn views(&self, _project_ref: &str, schema: Option<&str>) -> Result<Vec<View>, ApiError> {
        self.record(format!("views:{}", schema.unwrap_or("*")));
        Ok(self
            .views
            .borrow()
            .iter()
            .filter(|v| schema.map_or(true, |s| v.schema == s))
            .cloned()
            .collect())
    }

    async fn foreign_tables(&self, _project_ref: &str) -> Result<Vec<ForeignTable>, ApiError> {
        self.record("foreign_tables".to_string());
        Ok(vec![])
    }

    async fn tables(&self, _project_ref: &str, schema: &str) -> Result<Vec<Table>, ApiError> {
        self.record(format!("tables:{}", schema));
        Ok(self
            .tables
            .borrow()
            .iter()
            .filter(|t| t.schema == schema)
            .cloned()
            .collect())
    }

    async fn table(&self, _project_ref: &str, id: i64) -> Result<Table, ApiError> {
        self.record(format!("table:{}", id));
        self.tables
            .borrow()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| ApiError::Http {
                status: 404,
                message: format!("table {} not found", id),
            })
    }

    async fn vault_secrets(&self, _project_ref: &str) -> Result<Vec<VaultSecret>, ApiError> {
        self.record("vault_secrets".to_string());
        Ok(vec![])
    }

    async fn delete_table(&self, _project_ref: &str, id: i64, cascade: bool) -> Result<(), ApiError> {
        self.record(format!("delete_table:{}:{}", id, cascade));
        if let Some(err) = self.delete_error.borrow().clone() {
            return Err(err);
        }
        self.tables.borrow_mut().retain(|t| t.id != id);
        Ok(())
    }

    async fn delete_column(&self, _project_ref: &str, id: &str, cascade: bool) -> Result<(), ApiError> {
        self.record(format!("delete_column:{}:{}", id, cascade));
        if let Some(err) = self.delete_error.borrow().clone() {
            return Err(err);
        }
        for table in self.tables.borrow_mut().iter_mut() {
            table.columns.retain(|c| c.id != id);
        }
        Ok(())
    }
}
