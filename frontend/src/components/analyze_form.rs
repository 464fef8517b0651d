//! The analysis form and its submission gate.
//!
//! Validation runs in order (title, description, resume) and stops at
//! the first failure: default is prevented, a banner names the problem
//! and the offending field is focused. When everything passes the
//! browser submits the form natively; this component only flips into
//! its in-flight state (overlay, narrator, disabled submit) and the
//! server's response navigates away.

use leptos::*;
use web_sys::SubmitEvent;

use crate::config::{ANALYZE_ENDPOINT, DESCRIPTION_HINT_DEBOUNCE_MS, MIN_DESCRIPTION_CHARS};
use crate::types::{Alert, AlertKind, FormField, SelectedFile, SubmitState};
use crate::utils::debounce;
use crate::validation::validate_submission;
use crate::components::alerts::show_alert;
use crate::components::progress::{start_narration, NarrationHandle, ProgressOverlay};
use crate::components::upload::UploadSection;

#[component]
pub fn AnalyzeForm(set_alerts: WriteSignal<Vec<Alert>>) -> impl IntoView {
    let (submit_state, set_submit_state) = create_signal(SubmitState::Idle);
    let (status, set_status) = create_signal("Preparing your analysis...".to_string());
    let (selected, set_selected) = create_signal(None::<SelectedFile>);
    let (length_hint, set_length_hint) = create_signal(String::new());

    let title_ref = create_node_ref::<html::Input>();
    let description_ref = create_node_ref::<html::Textarea>();
    let file_ref = create_node_ref::<html::Input>();

    // The narrator outlives the submit handler; cleanup stops it if the
    // component unmounts before the navigation lands.
    let narrator = store_value(None::<NarrationHandle>);
    on_cleanup(move || {
        narrator.with_value(|handle| {
            if let Some(handle) = handle {
                handle.stop();
            }
        });
    });

    let mut refresh_hint = debounce(DESCRIPTION_HINT_DEBOUNCE_MS, move || {
        let count = description_ref
            .get_untracked()
            .map(|area| area.value().trim().chars().count())
            .unwrap_or(0);
        let hint = if count < MIN_DESCRIPTION_CHARS {
            format!("{} more characters needed", MIN_DESCRIPTION_CHARS - count)
        } else {
            format!("{count} characters")
        };
        set_length_hint.set(hint);
    });

    let on_submit = move |ev: SubmitEvent| {
        let title = title_ref.get().map(|input| input.value()).unwrap_or_default();
        let description = description_ref
            .get()
            .map(|area| area.value())
            .unwrap_or_default();
        let has_file = file_ref
            .get()
            .and_then(|input| input.files())
            .map(|files| files.length() > 0)
            .unwrap_or(false);

        match validate_submission(&title, &description, has_file) {
            Err(field) => {
                ev.prevent_default();
                log::warn!("⛔ Submission blocked: {}", field.message());
                show_alert(set_alerts, field.message(), AlertKind::Error);
                match field {
                    FormField::JobTitle => {
                        if let Some(input) = title_ref.get() {
                            let _ = input.focus();
                        }
                    }
                    FormField::JobDescription => {
                        if let Some(area) = description_ref.get() {
                            let _ = area.focus();
                        }
                    }
                    // The file input is hidden; nothing sensible to focus.
                    FormField::Resume => {}
                }
            }
            Ok(()) => {
                // Default is NOT prevented: the form posts natively and
                // the server's response replaces the page.
                log::info!("📤 Form valid, submitting \"{}\" for analysis", title.trim());
                set_submit_state.set(SubmitState::Submitting);
                narrator.set_value(Some(start_narration(set_status)));
            }
        }
    };

    view! {
        <form
            id="analyzeForm"
            class="analyze-form"
            action=ANALYZE_ENDPOINT
            method="post"
            enctype="multipart/form-data"
            on:submit=on_submit
        >
            <div class="form-group">
                <label for="job_title">"Job Title"</label>
                <input
                    type="text"
                    id="job_title"
                    name="job_title"
                    class="form-control"
                    placeholder="e.g. Senior Software Engineer"
                    node_ref=title_ref
                />
            </div>

            <div class="form-group">
                <label for="job_description">"Job Description"</label>
                <textarea
                    id="job_description"
                    name="job_description"
                    class="form-control"
                    rows="8"
                    placeholder="Paste the full job description here..."
                    node_ref=description_ref
                    on:input=move |_| refresh_hint()
                ></textarea>
                <small class="form-hint">{move || length_hint.get()}</small>
            </div>

            <div class="form-group">
                <label for="resume">"Resume"</label>
                <UploadSection
                    input_ref=file_ref
                    selected=selected
                    set_selected=set_selected
                    set_alerts=set_alerts
                />
            </div>

            <button
                type="submit"
                id="submitBtn"
                class="btn btn-primary"
                disabled=move || submit_state.get() == SubmitState::Submitting
            >
                {move || match submit_state.get() {
                    SubmitState::Idle => "Analyze Resume",
                    SubmitState::Submitting => "Analyzing...",
                }}
            </button>
        </form>

        <Show
            when=move || submit_state.get() == SubmitState::Submitting
            fallback=|| view! {}
        >
            <ProgressOverlay status=status/>
        </Show>
    }
}
