//! Project database metadata: remote API, reactive store and load triggers

pub mod api;
pub mod error;
pub mod loader;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{HttpMetaApi, MetaApi};
pub use error::ApiError;
pub use loader::{LoadRequest, MetadataLoader};
pub use store::MetaStore;
