//! Application configuration.
//!
//! Fixed constants for the resume analyzer frontend. The form itself
//! carries no runtime configuration; these values mirror the limits
//! the server enforces.

/// Endpoint the analysis form posts to.
///
/// The server renders the results page in response, so a full
/// navigation follows a successful submission.
pub const ANALYZE_ENDPOINT: &str = "/analyze";

/// Maximum resume size in bytes (16 MiB).
///
/// Matches the server's `MAX_CONTENT_LENGTH`; anything larger would be
/// rejected there anyway, so we refuse it before upload.
pub const MAX_RESUME_SIZE: usize = 16 * 1024 * 1024;

/// MIME types accepted for a resume.
pub const ALLOWED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Extension fallback for the type check.
///
/// Browsers sometimes report an empty or unreliable MIME type for
/// dropped files, so the filename extension is checked as well
/// (case-insensitive).
pub const ALLOWED_EXTENSIONS: [&str; 3] = [".pdf", ".docx", ".doc"];

/// Minimum job description length (characters, after trim).
pub const MIN_DESCRIPTION_CHARS: usize = 50;

/// Status phrases revealed while a submission is in flight.
///
/// Purely decorative pacing; not tied to actual server progress.
pub const PROGRESS_PHRASES: [&str; 6] = [
    "Extracting text from resume...",
    "Analyzing skills and keywords...",
    "Comparing with job requirements...",
    "Calculating match scores...",
    "Generating recommendations...",
    "Finalizing analysis...",
];

/// Delay between progress phrases (milliseconds).
pub const PROGRESS_STEP_MS: u32 = 2_000;

/// Duration of the metric number tween (milliseconds).
pub const NUMBER_TWEEN_MS: f64 = 1_000.0;

/// How long an alert banner stays up before auto-dismissing (milliseconds).
pub const ALERT_TTL_MS: u32 = 5_000;

/// Debounce applied to the description length hint (milliseconds).
pub const DESCRIPTION_HINT_DEBOUNCE_MS: u32 = 300;

/// Application name shown in the page title and header.
pub const APP_NAME: &str = "Resume Analyzer";
