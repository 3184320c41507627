use async_trait::async_trait;
use contracts::meta::{
    ApiErrorBody, Extension, ForeignTable, Policy, PostgresType, Publication, Schema, Table,
    VaultSecret, View,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::shared::api_utils::ApiConfig;
use crate::system::auth::storage;

/// Remote metadata store of a project database.
///
/// Every call is scoped to a project ref. Futures are `!Send`: they run on the
/// browser event loop via `spawn_local`.
#[async_trait(?Send)]
pub trait MetaApi {
    async fn schemas(&self, project_ref: &str) -> Result<Vec<Schema>, ApiError>;
    async fn types(&self, project_ref: &str) -> Result<Vec<PostgresType>, ApiError>;
    async fn policies(&self, project_ref: &str) -> Result<Vec<Policy>, ApiError>;
    async fn publications(&self, project_ref: &str) -> Result<Vec<Publication>, ApiError>;
    async fn extensions(&self, project_ref: &str) -> Result<Vec<Extension>, ApiError>;
    /// All views, or only those of `schema`
    async fn views(&self, project_ref: &str, schema: Option<&str>) -> Result<Vec<View>, ApiError>;
    async fn foreign_tables(&self, project_ref: &str) -> Result<Vec<ForeignTable>, ApiError>;
    async fn tables(&self, project_ref: &str, schema: &str) -> Result<Vec<Table>, ApiError>;
    async fn table(&self, project_ref: &str, id: i64) -> Result<Table, ApiError>;
    async fn vault_secrets(&self, project_ref: &str) -> Result<Vec<VaultSecret>, ApiError>;
    async fn delete_table(&self, project_ref: &str, id: i64, cascade: bool) -> Result<(), ApiError>;
    async fn delete_column(&self, project_ref: &str, id: &str, cascade: bool) -> Result<(), ApiError>;
}

/// `MetaApi` over HTTP (`/api/pg-meta/{ref}/...`)
#[derive(Debug, Clone)]
pub struct HttpMetaApi {
    config: ApiConfig,
}

impl HttpMetaApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn url(&self, project_ref: &str, path: &str) -> String {
        self.config.url(&format!(
            "/api/pg-meta/{}{}",
            urlencoding::encode(project_ref),
            path
        ))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let mut request = Request::get(url).header("Accept", "application/json");
        if let Some(token) = storage::get_access_token() {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = ensure_ok(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn delete(&self, url: &str) -> Result<(), ApiError> {
        let mut request = Request::delete(url).header("Accept", "application/json");
        if let Some(token) = storage::get_access_token() {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(response).await.map(|_| ())
    }
}

/// Turns a non-2xx response into `ApiError::Http`, preferring the server's message
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Http {
        status,
        message: error_message(status, &body),
    })
}

fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| format!("HTTP {}", status))
}

#[async_trait(?Send)]
impl MetaApi for HttpMetaApi {
    async fn schemas(&self, project_ref: &str) -> Result<Vec<Schema>, ApiError> {
        self.get_json(&self.url(project_ref, "/schemas")).await
    }

    async fn types(&self, project_ref: &str) -> Result<Vec<PostgresType>, ApiError> {
        self.get_json(&self.url(project_ref, "/types")).await
    }

    async fn policies(&self, project_ref: &str) -> Result<Vec<Policy>, ApiError> {
        self.get_json(&self.url(project_ref, "/policies")).await
    }

    async fn publications(&self, project_ref: &str) -> Result<Vec<Publication>, ApiError> {
        self.get_json(&self.url(project_ref, "/publications")).await
    }

    async fn extensions(&self, project_ref: &str) -> Result<Vec<Extension>, ApiError> {
        self.get_json(&self.url(project_ref, "/extensions")).await
    }

    async fn views(&self, project_ref: &str, schema: Option<&str>) -> Result<Vec<View>, ApiError> {
        let path = match schema {
            Some(schema) => format!("/views?included_schemas={}", urlencoding::encode(schema)),
            None => "/views".to_string(),
        };
        self.get_json(&self.url(project_ref, &path)).await
    }

    async fn foreign_tables(&self, project_ref: &str) -> Result<Vec<ForeignTable>, ApiError> {
        self.get_json(&self.url(project_ref, "/foreign-tables")).await
    }

    async fn tables(&self, project_ref: &str, schema: &str) -> Result<Vec<Table>, ApiError> {
        let path = format!("/tables?included_schemas={}", urlencoding::encode(schema));
        self.get_json(&self.url(project_ref, &path)).await
    }

    async fn table(&self, project_ref: &str, id: i64) -> Result<Table, ApiError> {
        self.get_json(&self.url(project_ref, &format!("/tables/{}", id)))
            .await
    }

    async fn vault_secrets(&self, project_ref: &str) -> Result<Vec<VaultSecret>, ApiError> {
        self.get_json(&self.url(project_ref, "/vault/secrets")).await
    }

    async fn delete_table(&self, project_ref: &str, id: i64, cascade: bool) -> Result<(), ApiError> {
        let path = format!("/tables/{}?cascade={}", id, cascade);
        self.delete(&self.url(project_ref, &path)).await
    }

    async fn delete_column(&self, project_ref: &str, id: &str, cascade: bool) -> Result<(), ApiError> {
        let path = format!(
            "/columns/{}?cascade={}",
            urlencoding::encode(id),
            cascade
        );
        self.delete(&self.url(project_ref, &path)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_server_body() {
        let body = r#"{"error": {"message": "column \"age\" is referenced by view"}}"#;
        assert_eq!(error_message(400, body), "column \"age\" is referenced by view");
        assert_eq!(error_message(502, "<html>Bad Gateway</html>"), "HTTP 502");
    }

    #[test]
    fn test_url_encodes_project_ref() {
        let api = HttpMetaApi::new(ApiConfig {
            protocol: "http:".to_string(),
            hostname: "localhost".to_string(),
            port: 3000,
            base_override: None,
        });
        assert_eq!(
            api.url("abc def", "/schemas"),
            "http://localhost:3000/api/pg-meta/abc%20def/schemas"
        );
    }
}
