//! Output filename normalization and path construction.
//!
//! The generator always writes a PDF, so the launcher enforces a `.pdf`
//! suffix (exact, case-sensitive) on whatever the user typed and joins the
//! result onto the configured output directory.

use std::path::{Path, PathBuf};

/// Literal suffix enforced on every output filename.
pub const PDF_SUFFIX: &str = ".pdf";

/// Substitute `default` when the user entered nothing (empty or whitespace-only).
pub fn apply_default(input: &str, default: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Append `.pdf` unless the name already ends with it. Idempotent; the match
/// is case-sensitive, so `report.PDF` still gets `.pdf` appended.
pub fn ensure_pdf_suffix(name: &str) -> String {
    if name.ends_with(PDF_SUFFIX) {
        name.to_string()
    } else {
        format!("{}{}", name, PDF_SUFFIX)
    }
}

/// Join the output directory and a normalized filename.
pub fn output_path(dir: &Path, filename: &str) -> PathBuf {
    dir.join(filename)
}
