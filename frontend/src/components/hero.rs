//! Hero section component.

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"See how well your resume matches the job"</h1>
            <p class="subtitle">
                "Upload your resume and paste the job description. "
                "You get a match score, skill gaps and concrete recommendations."
            </p>
            // The metric-value class is what the page-load animation
            // targets; the text is the tween's end state.
            <div class="hero-stats">
                <div class="stat">
                    <span class="metric-value">"98.4%"</span>
                    <span class="stat-label">"parse accuracy"</span>
                </div>
                <div class="stat">
                    <span class="metric-value">"52.0"</span>
                    <span class="stat-label">"skill categories"</span>
                </div>
                <div class="stat">
                    <span class="metric-value">"4.9"</span>
                    <span class="stat-label">"average rating"</span>
                </div>
            </div>
        </div>
    }
}
