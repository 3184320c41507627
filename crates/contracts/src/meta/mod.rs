//! Database metadata served by the metadata API
//!
//! Каждая коллекция перезагружается целиком; идентичность сущностей неизменна.

pub mod extension;
pub mod row;
pub mod schema;
pub mod table;
pub mod vault;

pub use extension::{Extension, VAULT_EXTENSION};
pub use row::RowData;
pub use schema::{
    is_realtime_enabled, Policy, PostgresType, Publication, PublicationTable, Schema,
    REALTIME_PUBLICATION,
};
pub use table::{Column, EntityKind, ForeignTable, PrimaryKey, Table, TableLike, View};
pub use vault::VaultSecret;

/// Error body returned by the metadata API on non-2xx responses
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorMessage,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ApiErrorMessage {
    pub message: String,
}
