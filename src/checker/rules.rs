//! Fixed marker lists and the pure `check` over a page's text.

/// Pages inspected by default, in report order.
pub const TARGET_FILES: [&str; 3] = ["index.html", "signin.html", "signup.html"];

pub const DOCTYPE_MARKER: &str = "<!DOCTYPE html>";
pub const DOCTYPE_MARKER_LOWER: &str = "<!doctype html>";

/// Tags searched for verbatim (case-sensitive) after the doctype.
pub const REQUIRED_TAGS: [&str; 7] = [
    "<html", "</html>", "<head", "</head>", "<body", "</body>", "<title",
];

/// Exact-case marker first, then the lowercased text.
pub fn has_doctype(text: &str) -> bool {
    text.contains(DOCTYPE_MARKER) || text.to_lowercase().contains(DOCTYPE_MARKER_LOWER)
}

/// Run every presence check against `text` and collect the failures in check order.
///
/// An empty list means the page passed.
pub fn check(text: &str) -> Vec<String> {
    let mut issues = Vec::new();
    if !has_doctype(text) {
        issues.push(format!("Missing {DOCTYPE_MARKER}"));
    }
    for tag in REQUIRED_TAGS {
        if !text.contains(tag) {
            issues.push(format!("Missing {tag} tag"));
        }
    }
    issues
}
