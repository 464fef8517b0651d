//! Resume Analyzer - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the resume analyzer's submission form.
//! It validates the upload widget and the form fields client-side,
//! narrates progress while a submission is in flight, animates the
//! metric numbers on page load and stacks dismissible alert banners.
//! The form itself posts natively to the server, which renders the
//! results page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── AlertHost (stacked banners, first child of <main>)     │
//! │  ├── Hero (title + animated stats strip)                    │
//! │  └── AnalyzeForm                                            │
//! │      ├── UploadSection (drag & drop resume)                 │
//! │      └── ProgressOverlay (while submitting)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Fixed limits and timings
//! - [`types`] - Common types (Alert, SelectedFile, SubmitState, ...)
//! - [`validation`] - Pure validation of files and form fields
//! - [`utils`] - Size formatting, easing, number tween, debounce
//! - [`components`] - UI components

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod types;
pub mod utils;
pub mod validation;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Alerts
    Alert, AlertKind,
    // Upload
    FileRejection, SelectedFile,
    // Form
    FormField, SubmitState,
};

// Validation
pub use validation::{has_allowed_type, validate_resume_file, validate_submission};

// Utilities (the reusable surface: alerts live in components::alerts)
pub use utils::{animate_number, debounce, ease_out_cubic, format_file_size};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Resume Analyzer - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=config::APP_NAME/>
        <Router>
            <Routes>
                <Route path="/" view=MainContent/>
            </Routes>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the page
    let (alerts, set_alerts) = create_signal(Vec::<Alert>::new());

    // Kick off the metric tween once the freshly mounted DOM is in
    // place; a page without metric values is a no-op.
    create_effect(move |_| {
        utils::request_animation_frame(animate_metric_values);
    });

    view! {
        <Header/>

        <main class="container">
            <AlertHost alerts=alerts set_alerts=set_alerts/>

            <Hero/>

            <AnalyzeForm set_alerts=set_alerts/>
        </main>

        <Footer/>
    }
}
