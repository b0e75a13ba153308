//! Document Chat - View Component

use super::citation_list::CitationList;
use super::view_model::{is_send_key, ChatSessionVm};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::domain::common::AggregateId;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatSession() -> impl IntoView {
    let vm = ChatSessionVm::new();
    let (auth_state, _) = use_auth();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    on_cleanup(move || {
        log!("ChatSession unmounted, aborting any pending question");
        vm.cancel();
    });

    // Scroll to bottom helper
    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    // Keep the newest entry (or the loading indicator) in view
    Effect::new(move |_| {
        vm.session.with(|session| session.messages().len());
        vm.is_sending();
        scroll_to_bottom();
    });

    let user_avatar = move || {
        auth_state.with(|state| state.user.clone()).map(|user| match user.image_url.clone() {
            Some(url) => view! {
                <img class="chat-avatar" src=url alt="User profile" width="32" height="32" />
            }
            .into_any(),
            None => view! {
                <div class="chat-avatar chat-avatar--initial">{user.initial()}</div>
            }
            .into_any(),
        })
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__header">
                <h2>"Ask your documents"</h2>
                <span class="chat-panel__count">
                    {move || format!("Messages: {}", vm.session.with(|s| s.messages().len()))}
                </span>
            </div>

            // Messages area
            <div node_ref=messages_container_ref class="chat-panel__messages">
                <Show when=move || {
                    vm.session.with(|s| s.messages().is_empty()) && !vm.is_sending()
                }>
                    <div class="chat-empty">
                        {icon("message")}
                        <p>"Upload your PDFs, then ask a question about them."</p>
                    </div>
                </Show>

                <For
                    each=move || vm.session.with(|s| s.messages().to_vec())
                    key=|msg| msg.id
                    let:msg
                >
                    {{
                        let is_user = msg.is_user();
                        let sources = msg.sources.clone();
                        let (row_class, bubble_class) = if is_user {
                            ("chat-row chat-row--user", "chat-bubble chat-bubble--user")
                        } else {
                            ("chat-row", "chat-bubble chat-bubble--assistant")
                        };
                        view! {
                            <div class=row_class data-message-id=msg.id.as_string()>
                                {(!is_user)
                                    .then(|| {
                                        view! {
                                            <div class="chat-avatar chat-avatar--bot">{icon("bot")}</div>
                                        }
                                    })}
                                <div class=bubble_class>
                                    <div class="chat-bubble__content">{msg.content.clone()}</div>
                                    {sources.map(|sources| view! { <CitationList sources=sources /> })}
                                    <div class="chat-bubble__time">{msg.timestamp.clone()}</div>
                                </div>
                                {is_user.then(|| user_avatar)}
                            </div>
                        }
                    }}
                </For>

                // Loading indicator, after the last message
                <Show when=move || vm.is_sending()>
                    <div class="chat-row">
                        <div class="chat-avatar chat-avatar--bot">{icon("bot")}</div>
                        <div class="chat-bubble chat-bubble--assistant chat-bubble--loading">
                            <Spinner />
                            <span>"Thinking…"</span>
                        </div>
                    </div>
                </Show>
            </div>

            // Input area
            <div class="chat-panel__input">
                <div style="flex: 1;">
                    <Textarea
                        value=vm.draft
                        placeholder="Type your message here (Enter to send, Shift+Enter for a new line)"
                        attr:style="width: 100%; min-height: 48px; max-height: 200px; resize: vertical;"
                        disabled=Signal::derive(move || vm.is_sending())
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if is_send_key(&ev.key(), ev.shift_key(), ev.is_composing()) {
                                ev.prevent_default();
                                vm.send();
                            }
                        }
                    />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !vm.can_send())
                    on_click=move |_| vm.send()
                >
                    {icon("send")}
                    {move || if vm.is_sending() { " Sending..." } else { " Send" }}
                </Button>
            </div>
        </div>
    }
}
