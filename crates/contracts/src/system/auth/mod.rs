use serde::{Deserialize, Serialize};

/// Wildcard resource in a permission grant
pub const ANY_RESOURCE: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionAction {
    /// Read database metadata (schemas, tables, columns)
    TenantSqlAdminRead,
    /// Alter database metadata
    TenantSqlAdminWrite,
    /// Run arbitrary queries
    TenantSqlQuery,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGrant {
    pub action: PermissionAction,
    pub resources: Vec<String>,
}

impl PermissionGrant {
    pub fn allows(&self, action: PermissionAction, resource: &str) -> bool {
        self.action == action
            && self
                .resources
                .iter()
                .any(|r| r == ANY_RESOURCE || r == resource)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub is_admin: bool,
    #[serde(default)]
    pub permissions: Vec<PermissionGrant>,
}

impl UserInfo {
    /// Администратор проходит любую проверку
    pub fn can(&self, action: PermissionAction, resource: &str) -> bool {
        self.is_admin
            || self
                .permissions
                .iter()
                .any(|grant| grant.allows(action, resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool, permissions: Vec<PermissionGrant>) -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            username: "dev".to_string(),
            full_name: None,
            email: None,
            is_admin,
            permissions,
        }
    }

    #[test]
    fn test_admin_can_everything() {
        assert!(user(true, vec![]).can(PermissionAction::TenantSqlAdminWrite, "tables"));
    }

    #[test]
    fn test_grant_matches_action_and_resource() {
        let u = user(
            false,
            vec![PermissionGrant {
                action: PermissionAction::TenantSqlAdminRead,
                resources: vec!["tables".to_string()],
            }],
        );
        assert!(u.can(PermissionAction::TenantSqlAdminRead, "tables"));
        assert!(!u.can(PermissionAction::TenantSqlAdminRead, "functions"));
        assert!(!u.can(PermissionAction::TenantSqlAdminWrite, "tables"));
    }

    #[test]
    fn test_wildcard_resource() {
        let u = user(
            false,
            vec![PermissionGrant {
                action: PermissionAction::TenantSqlAdminRead,
                resources: vec![ANY_RESOURCE.to_string()],
            }],
        );
        assert!(u.can(PermissionAction::TenantSqlAdminRead, "views"));
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&PermissionAction::TenantSqlAdminRead).unwrap();
        assert_eq!(json, "\"TENANT_SQL_ADMIN_READ\"");
    }
}
