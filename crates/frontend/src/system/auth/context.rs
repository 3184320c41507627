use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user_info: Option<UserInfo>,
    /// `false` until the profile request has finished (or was skipped)
    pub resolved: bool,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore the session from localStorage once on mount
    spawn_local(async move {
        let user_info = match storage::get_access_token() {
            Some(token) => match api::get_current_user(&token).await {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("session restore failed: {}", e);
                    storage::clear_access_token();
                    None
                }
            },
            None => None,
        };
        set_auth_state.set(AuthState {
            user_info,
            resolved: true,
        });
    });

    provide_context(auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> ReadSignal<AuthState> {
    use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree")
}
