use contracts::system::auth::UserProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::identity;
use crate::shared::config::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Waiting for the identity provider to report the session
    #[default]
    Loading,
    SignedIn,
    SignedOut,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub user: Option<UserProfile>,
}

impl AuthState {
    fn from_provider() -> Self {
        match identity::current_user() {
            Some(user) => Self {
                status: AuthStatus::SignedIn,
                user: Some(user),
            },
            None => Self {
                status: AuthStatus::SignedOut,
                user: None,
            },
        }
    }

    /// State used when sign-in is disabled by configuration
    fn anonymous() -> Self {
        Self {
            status: AuthStatus::SignedIn,
            user: None,
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    if config().auth_disabled {
        log::warn!("sign-in disabled by AUTH_DISABLED");
        set_auth_state.set(AuthState::anonymous());
    } else {
        // Ask the provider for the session once on mount
        Effect::new(move |_| {
            spawn_local(async move {
                match identity::load().await {
                    Ok(()) => {
                        set_auth_state.set(AuthState::from_provider());
                        let subscribed = identity::on_change(move || {
                            let _ = set_auth_state.try_set(AuthState::from_provider());
                        });
                        if let Err(e) = subscribed {
                            log::warn!("session changes will not be tracked: {}", e);
                        }
                    }
                    Err(e) => {
                        log::error!("identity provider unavailable: {}", e);
                        set_auth_state.set(AuthState {
                            status: AuthStatus::SignedOut,
                            user: None,
                        });
                    }
                }
            });
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform sign-out through the provider
pub async fn do_sign_out(set_auth_state: WriteSignal<AuthState>) {
    if config().auth_disabled {
        return;
    }
    match identity::sign_out().await {
        Ok(()) => set_auth_state.set(AuthState {
            status: AuthStatus::SignedOut,
            user: None,
        }),
        Err(e) => log::error!("sign-out failed: {}", e),
    }
}
