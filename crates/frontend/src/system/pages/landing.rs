use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::system::auth::identity;

/// Feature card shown under the hero section
fn feature_card(icon_name: &'static str, accent: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="landing-feature">
            <div class=format!("landing-feature__icon landing-feature__icon--{}", accent)>
                {icon(icon_name)}
            </div>
            <h3>{title}</h3>
            <p>{text}</p>
        </div>
    }
}

/// Page for signed-out visitors
#[component]
pub fn LandingPage() -> impl IntoView {
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let sign_up = move |_| {
        set_error_message.set(None);
        spawn_local(async move {
            if let Err(e) = identity::open_sign_up().await {
                log::error!("sign-up failed: {}", e);
                set_error_message.set(Some("Sign-up is unavailable right now.".to_string()));
            }
        });
    };

    let sign_in = move |_| {
        set_error_message.set(None);
        spawn_local(async move {
            if let Err(e) = identity::open_sign_in().await {
                log::error!("sign-in failed: {}", e);
                set_error_message.set(Some("Sign-in is unavailable right now.".to_string()));
            }
        });
    };

    view! {
        <div class="landing">
            <div class="landing__hero">
                <h1>"PDF RAG"</h1>
                <p class="landing__tagline">"Intelligent Document Analysis"</p>
                <p class="landing__description">
                    "Upload your PDF documents and ask questions in natural language. "
                    "Answers are grounded in your files and cite the pages they come from."
                </p>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <div class="landing__actions">
                    <button class="btn-primary" on:click=sign_up>
                        "Get Started Free"
                    </button>
                    <button class="btn-secondary" on:click=sign_in>
                        "Sign In"
                    </button>
                </div>
            </div>

            <div class="landing__features">
                {feature_card(
                    "document",
                    "purple",
                    "Upload PDFs",
                    "Upload your PDF documents and let the assistant index them for querying.",
                )}
                {feature_card(
                    "message",
                    "green",
                    "Natural Language Queries",
                    "Ask questions in plain English and get answers drawn from your documents.",
                )}
                {feature_card(
                    "zap",
                    "orange",
                    "Instant Insights",
                    "Get contextual answers together with the sources that back them.",
                )}
            </div>

            <footer class="landing__footer">
                <p>"PDF RAG. Intelligent document analysis for everyone."</p>
            </footer>
        </div>
    }
}
