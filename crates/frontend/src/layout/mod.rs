pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Signed-in workspace shell.
///
/// ```text
/// +------------------------------------------+
/// |               TopHeader                  |
/// +------------------------------------------+
/// |   Upload pane   |       Chat pane        |
/// +------------------------------------------+
/// ```
///
/// Below the tablet breakpoint the panes stack vertically (see `style/app.css`).
#[component]
pub fn Shell<U, C>(upload: U, chat: C) -> impl IntoView
where
    U: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <aside class="app-upload">
                    {upload()}
                </aside>

                <main class="app-chat">
                    {chat()}
                </main>
            </div>
        </div>
    }
}
