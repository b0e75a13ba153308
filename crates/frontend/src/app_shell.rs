//! Application Shell - root components of the application
//!
//! Contains:
//! - `AppShell` - auth gate (shows `LandingPage` or `Workspace`)
//! - `Workspace` - signed-in layout with the upload and chat panes

use crate::domain::a001_document_upload::ui::tracker::UploadTracker;
use crate::domain::a002_document_chat::ui::session::ChatSession;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::landing::LandingPage;
use leptos::prelude::*;

#[component]
fn Workspace() -> impl IntoView {
    view! {
        <Shell
            upload=|| view! { <UploadTracker /> }.into_any()
            chat=|| view! { <ChatSession /> }.into_any()
        />
    }
}

/// Application shell - auth gate component.
///
/// Shows the landing page until the identity provider reports a session.
#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <RequireAuth fallback=|| view! { <LandingPage /> }>
            <Workspace />
        </RequireAuth>
    }
}
