//! UI Components for the resume analyzer form page.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar
//! - [`Hero`] - Title, description and the animated stats strip
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`AnalyzeForm`] - The submission form and its validation gate
//! - [`UploadSection`] - Resume upload with drag & drop
//! - [`ProgressOverlay`] - In-flight overlay fed by the narrator
//! - [`AlertHost`] - Stacked dismissible banners
//! - `metrics` - Page-load number animation over `.metric-value`

mod alerts;
mod analyze_form;
mod footer;
mod header;
mod hero;
mod metrics;
mod progress;
mod upload;

pub use alerts::*;
pub use analyze_form::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use metrics::*;
pub use progress::*;
pub use upload::*;
