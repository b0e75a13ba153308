use leptos::prelude::*;
use thaw::Spinner;

use super::context::{use_auth, AuthStatus};

/// Component that requires a signed-in user.
/// Shows a spinner while the session is resolved and `fallback` when signed out.
#[component]
pub fn RequireAuth(#[prop(into)] fallback: ViewFn, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    // Profile updates must not rebuild the children
    let status = Memo::new(move |_| auth_state.with(|state| state.status));

    move || match status.get() {
        AuthStatus::Loading => view! {
            <div class="app-loading">
                <Spinner />
            </div>
        }
        .into_any(),
        AuthStatus::SignedIn => children().into_any(),
        AuthStatus::SignedOut => fallback.run(),
    }
}
