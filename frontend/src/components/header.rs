//! Navigation header.

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">{APP_NAME}</a>
            </div>
            <nav class="header-right">
                <a href="/" class="nav-link active">"Analyze"</a>
                <a href="/history" class="nav-link">"History"</a>
            </nav>
        </header>
    }
}
