//! Permission checks against the grants of the signed-in user

use contracts::system::auth::{PermissionAction, UserInfo};
use leptos::prelude::*;

use super::context::{use_auth, AuthState};

pub trait PermissionChecker {
    fn can(&self, action: PermissionAction, resource: &str) -> bool;
}

impl PermissionChecker for UserInfo {
    fn can(&self, action: PermissionAction, resource: &str) -> bool {
        UserInfo::can(self, action, resource)
    }
}

/// Outcome of a render-time permission gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Profile not loaded yet; render a placeholder and load nothing
    Resolving,
    Denied,
    Allowed,
}

impl GateState {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

pub fn gate<C: PermissionChecker>(
    resolved: bool,
    checker: Option<&C>,
    action: PermissionAction,
    resource: &str,
) -> GateState {
    if !resolved {
        return GateState::Resolving;
    }
    match checker {
        Some(checker) if checker.can(action, resource) => GateState::Allowed,
        _ => GateState::Denied,
    }
}

pub fn gate_state(auth: &AuthState, action: PermissionAction, resource: &str) -> GateState {
    gate(auth.resolved, auth.user_info.as_ref(), action, resource)
}

/// Reactive gate for `action` on `resource`
pub fn use_check_permissions(action: PermissionAction, resource: &'static str) -> Signal<GateState> {
    let auth = use_auth();
    Signal::derive(move || auth.with(|state| gate_state(state, action, resource)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::PermissionGrant;

    fn state(resolved: bool, grants: Option<Vec<PermissionGrant>>) -> AuthState {
        AuthState {
            user_info: grants.map(|permissions| UserInfo {
                id: "u1".to_string(),
                username: "dev".to_string(),
                full_name: None,
                email: None,
                is_admin: false,
                permissions,
            }),
            resolved,
        }
    }

    fn read_tables() -> PermissionGrant {
        PermissionGrant {
            action: PermissionAction::TenantSqlAdminRead,
            resources: vec!["tables".to_string()],
        }
    }

    #[test]
    fn test_unresolved_session_is_resolving() {
        let s = state(false, Some(vec![read_tables()]));
        assert_eq!(
            gate_state(&s, PermissionAction::TenantSqlAdminRead, "tables"),
            GateState::Resolving
        );
    }

    #[test]
    fn test_anonymous_is_denied() {
        let s = state(true, None);
        assert_eq!(
            gate_state(&s, PermissionAction::TenantSqlAdminRead, "tables"),
            GateState::Denied
        );
    }

    struct DenyAll;

    impl PermissionChecker for DenyAll {
        fn can(&self, _action: PermissionAction, _resource: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_custom_checker() {
        assert_eq!(
            gate(true, Some(&DenyAll), PermissionAction::TenantSqlAdminRead, "tables"),
            GateState::Denied
        );
    }

    #[test]
    fn test_grant_allows() {
        let s = state(true, Some(vec![read_tables()]));
        assert!(gate_state(&s, PermissionAction::TenantSqlAdminRead, "tables").is_allowed());
        assert_eq!(
            gate_state(&s, PermissionAction::TenantSqlAdminWrite, "tables"),
            GateState::Denied
        );
    }
}
