//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Alert Types** - Transient notification banners
//! - **Upload Types** - Selected file state and rejection reasons
//! - **Form Types** - Submission state machine and field errors

use std::fmt;

// =============================================================================
// Alert Types
// =============================================================================

/// Severity of an alert banner.
///
/// `Error` gets danger styling; everything else is informational.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    /// Validation or input error (danger styling).
    Error,
    /// Neutral notification.
    Info,
}

impl AlertKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Error => "alert-danger",
            AlertKind::Info => "alert-info",
        }
    }
}

/// A single banner shown at the top of the main content region.
///
/// Banners stack in DOM order; each one auto-dismisses independently.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    /// Unique id, used as the list key and for targeted dismissal.
    pub id: u32,
    /// Severity (drives styling).
    pub kind: AlertKind,
    /// Message text.
    pub message: String,
}

// =============================================================================
// Upload Types
// =============================================================================

/// The resume file currently held by the upload widget.
///
/// Page-local only; discarded on navigation.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    /// Filename as reported by the browser.
    pub name: String,
    /// Size in bytes (`Blob.size` is a float in the DOM).
    pub size_bytes: f64,
    /// Reported MIME type; may be empty for dropped files.
    pub mime: String,
}

impl SelectedFile {
    /// Size formatted for the accepted-file display (MB, 2 decimals).
    pub fn size_display(&self) -> String {
        format!("{:.2} MB", self.size_bytes / 1024.0 / 1024.0)
    }
}

/// Why a selected file was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileRejection {
    /// Neither the MIME type nor the extension is an accepted format.
    UnsupportedType,
    /// File exceeds [`crate::config::MAX_RESUME_SIZE`].
    TooLarge,
}

impl FileRejection {
    /// User-facing banner message.
    pub fn message(&self) -> &'static str {
        match self {
            FileRejection::UnsupportedType => "Please upload only PDF or DOCX files.",
            FileRejection::TooLarge => "File size must be less than 16MB.",
        }
    }
}

impl fmt::Display for FileRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRejection::UnsupportedType => write!(f, "unsupported file type"),
            FileRejection::TooLarge => write!(f, "file exceeds the 16 MiB limit"),
        }
    }
}

impl std::error::Error for FileRejection {}

// =============================================================================
// Form Types
// =============================================================================

/// The form field that failed validation.
///
/// Checks run in declaration order and stop at the first failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    JobTitle,
    JobDescription,
    Resume,
}

impl FormField {
    /// User-facing banner message for a failed check.
    pub fn message(&self) -> &'static str {
        match self {
            FormField::JobTitle => "Please enter a job title.",
            FormField::JobDescription => {
                "Please enter a detailed job description (at least 50 characters)."
            }
            FormField::Resume => "Please upload your resume.",
        }
    }
}

/// Submission state of the analysis form.
///
/// `Submitting` is terminal for the page's lifetime: the native form
/// submission is in flight and only a full navigation leaves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_display_uses_two_decimals() {
        let file = SelectedFile {
            name: "resume.pdf".to_string(),
            size_bytes: 2.5 * 1024.0 * 1024.0,
            mime: "application/pdf".to_string(),
        };
        assert_eq!(file.size_display(), "2.50 MB");
    }

    #[test]
    fn error_kind_maps_to_danger_class() {
        assert_eq!(AlertKind::Error.css_class(), "alert-danger");
        assert_eq!(AlertKind::Info.css_class(), "alert-info");
    }
}
