//! TopHeader component - application top bar.
//!
//! Contains the application title, the signed-in user and the sign-out action.

use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_sign_out, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let auth_disabled = config().auth_disabled;

    let sign_out = move |_| {
        spawn_local(async move {
            do_sign_out(set_auth_state).await;
        });
    };

    let display_name = move || {
        auth_state
            .with(|state| state.user.as_ref().and_then(|u| u.display_name.clone()))
            .unwrap_or_else(|| "Guest".to_string())
    };

    let avatar = move || {
        auth_state.with(|state| state.user.clone()).map(|user| match user.image_url.clone() {
            Some(url) => view! {
                <img class="top-header__avatar" src=url alt="User profile" width="28" height="28" />
            }
            .into_any(),
            None => view! {
                <span class="top-header__avatar top-header__avatar--initial">{user.initial()}</span>
            }
            .into_any(),
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("document")}
                <span class="top-header__title">"PDF RAG"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {avatar}
                    <span>{display_name}</span>
                </div>

                <Show when=move || !auth_disabled>
                    <button class="top-header__icon-btn" on:click=sign_out title="Sign out">
                        {icon("log-out")}
                    </button>
                </Show>
            </div>
        </div>
    }
}
