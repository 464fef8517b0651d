//! Resume upload widget with drag & drop support.
//!
//! Accepts a file from the native picker or a drop onto the wrapper.
//! Multi-file drops are reduced to their first item. Rejected files
//! clear the input's selection and raise an error banner; accepted
//! files render their name and size with a success visual state.

use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement, MouseEvent};

use crate::types::{Alert, AlertKind, SelectedFile};
use crate::utils::format_file_size;
use crate::validation::validate_resume_file;
use crate::components::alerts::show_alert;

#[component]
pub fn UploadSection(
    /// The hidden file input; owned by the form so it can check
    /// presence at submit time.
    input_ref: NodeRef<html::Input>,
    selected: ReadSignal<Option<SelectedFile>>,
    set_selected: WriteSignal<Option<SelectedFile>>,
    set_alerts: WriteSignal<Vec<Alert>>,
) -> impl IntoView {
    let (drag_active, set_drag_active) = create_signal(false);

    // Shared between the picker and drop paths.
    let take_file = move |file: web_sys::File| {
        match validate_resume_file(&file.name(), &file.type_(), file.size()) {
            Ok(()) => {
                log::info!(
                    "📎 Selected resume: {} ({})",
                    file.name(),
                    format_file_size(file.size())
                );
                set_selected.set(Some(SelectedFile {
                    name: file.name(),
                    size_bytes: file.size(),
                    mime: file.type_(),
                }));
            }
            Err(rejection) => {
                log::warn!("🚫 Rejected {}: {}", file.name(), rejection);
                if let Some(input) = input_ref.get() {
                    input.set_value("");
                }
                set_selected.set(None);
                show_alert(set_alerts, rejection.message(), AlertKind::Error);
            }
        }
    };

    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            take_file(file);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);

        let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
            return;
        };
        if files.length() == 0 {
            return;
        }
        // Hand the dropped selection to the real input so the native
        // submission carries it.
        if let Some(input) = input_ref.get() {
            input.set_files(Some(&files));
        }
        if let Some(file) = files.get(0) {
            take_file(file);
        }
    };

    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div
            class="file-upload-wrapper"
            class:dragover=move || drag_active.get()
            class=("has-file", move || selected.get().is_some())
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:click=open_picker
        >
            <div class="file-upload-info">
                {move || match selected.get() {
                    Some(file) => view! {
                        <p class="file-name">{file.name.clone()}</p>
                        <small class="file-size">"Size: " {file.size_display()}</small>
                    }
                    .into_view(),
                    None => view! {
                        <p>"Drag and drop your resume here"</p>
                        <small>"or click to browse (PDF or DOCX, up to 16 MB)"</small>
                    }
                    .into_view(),
                }}
            </div>
            <input
                type="file"
                id="resume"
                name="resume"
                accept=".pdf,.doc,.docx"
                style="display:none"
                node_ref=input_ref
                on:change=on_change
                on:click=move |ev: MouseEvent| ev.stop_propagation()
            />
        </div>
    }
}
