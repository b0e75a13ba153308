use crate::shared::icons::icon;
use leptos::prelude::*;

/// Sources backing an assistant answer, in the order the backend sent them
#[component]
#[allow(non_snake_case)]
pub fn CitationList(sources: Vec<String>) -> impl IntoView {
    let count = sources.len();

    view! {
        <div class="citations">
            <div class="citations__title">
                {icon("document")}
                {format!(" Sources ({})", count)}
            </div>
            <ol class="citations__list">
                {sources
                    .into_iter()
                    .map(|source| view! { <li class="citations__item">{source}</li> })
                    .collect_view()}
            </ol>
        </div>
    }
}
