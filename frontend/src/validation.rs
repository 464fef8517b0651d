//! Input validation for the upload widget and the analysis form.
//!
//! Pure functions over plain values; the components feed them DOM
//! state and turn the verdicts into banners and focus changes.

use crate::config::{ALLOWED_EXTENSIONS, ALLOWED_MIME_TYPES, MAX_RESUME_SIZE, MIN_DESCRIPTION_CHARS};
use crate::types::{FileRejection, FormField};

/// Whether a file looks like an accepted resume format.
///
/// The MIME type is authoritative when present; the extension check is
/// a fallback because dropped files sometimes carry an empty or
/// unreliable type.
pub fn has_allowed_type(name: &str, mime: &str) -> bool {
    if ALLOWED_MIME_TYPES.contains(&mime) {
        return true;
    }
    let lower = name.to_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Validate a selected resume file.
///
/// Type is checked before size, so an oversized `.txt` reports the
/// format problem first.
pub fn validate_resume_file(name: &str, mime: &str, size_bytes: f64) -> Result<(), FileRejection> {
    if !has_allowed_type(name, mime) {
        return Err(FileRejection::UnsupportedType);
    }
    if size_bytes > MAX_RESUME_SIZE as f64 {
        return Err(FileRejection::TooLarge);
    }
    Ok(())
}

/// Validate the analysis form, stopping at the first failing field.
///
/// Order matters: title, then description, then resume presence. The
/// returned field is the one the caller should focus and name in the
/// error banner.
pub fn validate_submission(title: &str, description: &str, has_file: bool) -> Result<(), FormField> {
    if title.trim().is_empty() {
        return Err(FormField::JobTitle);
    }
    if description.trim().chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(FormField::JobDescription);
    }
    if !has_file {
        return Err(FormField::Resume);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: f64 = 1024.0 * 1024.0;

    #[test]
    fn accepts_pdf_by_mime() {
        assert!(validate_resume_file("cv", "application/pdf", MIB).is_ok());
    }

    #[test]
    fn accepts_uppercase_extension_with_empty_mime() {
        // Dropped files often report no MIME type at all.
        assert!(validate_resume_file("resume.PDF", "", MIB).is_ok());
    }

    #[test]
    fn accepts_docx_and_doc_extensions() {
        assert!(validate_resume_file("resume.docx", "", MIB).is_ok());
        assert!(validate_resume_file("resume.doc", "", MIB).is_ok());
    }

    #[test]
    fn rejects_disallowed_type() {
        assert_eq!(
            validate_resume_file("notes.txt", "text/plain", 1.0),
            Err(FileRejection::UnsupportedType)
        );
    }

    #[test]
    fn rejects_oversized_even_with_valid_type() {
        assert_eq!(
            validate_resume_file("resume.pdf", "application/pdf", 16.0 * MIB + 1.0),
            Err(FileRejection::TooLarge)
        );
    }

    #[test]
    fn accepts_exactly_sixteen_mib() {
        assert!(validate_resume_file("resume.pdf", "application/pdf", 16.0 * MIB).is_ok());
    }

    #[test]
    fn blocked_at_title_before_other_failures() {
        // Everything is wrong here; the title check fires first.
        assert_eq!(
            validate_submission("", "short", false),
            Err(FormField::JobTitle)
        );
    }

    #[test]
    fn whitespace_only_title_is_empty() {
        assert_eq!(
            validate_submission("   ", &"a".repeat(60), true),
            Err(FormField::JobTitle)
        );
    }

    #[test]
    fn description_boundary_at_fifty_chars() {
        assert!(validate_submission("Engineer", &"a".repeat(50), true).is_ok());
        assert_eq!(
            validate_submission("Engineer", &"a".repeat(49), true),
            Err(FormField::JobDescription)
        );
    }

    #[test]
    fn description_is_trimmed_before_counting() {
        let padded = format!("   {}   ", "a".repeat(49));
        assert_eq!(
            validate_submission("Engineer", &padded, true),
            Err(FormField::JobDescription)
        );
    }

    #[test]
    fn missing_resume_checked_last() {
        assert_eq!(
            validate_submission("Engineer", &"a".repeat(50), false),
            Err(FormField::Resume)
        );
    }
}
