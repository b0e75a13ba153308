//! Document Upload - View Component

use super::view_model::UploadTrackerVm;
use crate::shared::date_utils::local_time_with_seconds;
use crate::shared::icons::icon;
use contracts::domain::a001_document_upload::aggregate::{UploadStatus, PDF_MIME_TYPE};
use contracts::domain::common::AggregateId;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

#[component]
#[allow(non_snake_case)]
pub fn UploadTracker() -> impl IntoView {
    let vm = UploadTrackerVm::new();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    on_cleanup(move || {
        log!("UploadTracker unmounted, aborting running uploads");
        vm.cancel_all();
    });

    let open_picker = move || {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    let on_files_selected = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(files) = input.files() {
            for index in 0..files.length() {
                if let Some(file) = files.get(index) {
                    vm.submit(file);
                }
            }
        }
        // Allow the same file to be picked again
        input.set_value("");
    };

    let summary = move || {
        vm.tracker.with(|tracker| {
            let mut parts = Vec::new();
            let uploading = tracker.count(UploadStatus::Uploading);
            let succeeded = tracker.count(UploadStatus::Succeeded);
            let failed = tracker.count(UploadStatus::Failed);
            if uploading > 0 {
                parts.push(format!("{} uploading", uploading));
            }
            if succeeded > 0 {
                parts.push(format!("{} uploaded", succeeded));
            }
            if failed > 0 {
                parts.push(format!("{} failed", failed));
            }
            parts.join(" • ")
        })
    };

    view! {
        <div class="upload-panel">
            <input
                type="file"
                accept=PDF_MIME_TYPE
                multiple=true
                style="display: none;"
                node_ref=file_input_ref
                on:change=on_files_selected
            />

            <div
                class="upload-panel__dropzone"
                role="button"
                tabindex="0"
                on:click=move |_| open_picker()
            >
                {icon("upload")}
                <h3>"Upload PDF Files"</h3>
                <span class="upload-panel__hint">"Select one or more documents"</span>
            </div>

            <Show when=move || !vm.tracker.with(|tracker| tracker.is_empty())>
                <div class="upload-panel__summary">{summary}</div>
            </Show>

            <ul class="upload-list">
                <For
                    each=move || vm.tracker.with(|tracker| tracker.records().to_vec())
                    key=|record| record.id
                    let:record
                >
                    {{
                        let id = record.id;
                        let started = local_time_with_seconds(&record.upload_started_at);
                        let status = move || {
                            vm.tracker
                                .with(|tracker| tracker.get(id).map(|r| r.status))
                                .unwrap_or(UploadStatus::Uploading)
                        };
                        view! {
                            <li
                                class=move || match status() {
                                    UploadStatus::Failed => "upload-item upload-item--failed",
                                    _ => "upload-item",
                                }
                                data-upload-id=id.as_string()
                                data-status=move || status().as_str()
                            >
                                <span class="upload-item__icon">{icon("document")}</span>
                                <div class="upload-item__body">
                                    <span class="upload-item__name" title=record.file_name.clone()>
                                        {record.file_name.clone()}
                                    </span>
                                    <span class="upload-item__meta">
                                        {started}
                                        " • "
                                        {move || match status() {
                                            UploadStatus::Uploading => "Uploading…",
                                            UploadStatus::Succeeded => "Uploaded",
                                            UploadStatus::Failed => "Upload failed",
                                        }}
                                    </span>
                                </div>
                                <span class="upload-item__status">
                                    {move || match status() {
                                        UploadStatus::Uploading => view! { <Spinner /> }.into_any(),
                                        UploadStatus::Succeeded => icon("check"),
                                        UploadStatus::Failed => icon("alert"),
                                    }}
                                </span>
                                <Show when=move || status() == UploadStatus::Failed>
                                    <button
                                        class="upload-item__action"
                                        title="Pick the file again"
                                        on:click=move |_| {
                                            if vm.retry(id) {
                                                open_picker();
                                            }
                                        }
                                    >
                                        {icon("retry")}
                                    </button>
                                </Show>
                                <button
                                    class="upload-item__action"
                                    title="Dismiss"
                                    on:click=move |_| vm.remove(id)
                                >
                                    {icon("close")}
                                </button>
                            </li>
                        }
                    }}
                </For>
            </ul>
        </div>
    }
}
