pub mod api;
pub mod context;
pub mod permissions;
pub mod storage;

pub use context::{use_auth, AuthProvider, AuthState};
pub use permissions::{use_check_permissions, GateState, PermissionChecker};
