use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Secret stored by the vault extension. The decrypted value is never sent to the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultSecret {
    pub id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
