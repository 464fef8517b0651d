//! Footer component.

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Copyright © 2026 Resume Analyzer"</div>
            <div class="footer-note">
                "Your resume is processed for this analysis only and never shared."
            </div>
        </footer>
    }
}
