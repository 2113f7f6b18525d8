//! Filesystem/URL-safe identifier generation.
//!
//! Record filenames and ids are built from human-entered text (company
//! names, job titles, seeker names), so everything funnels through
//! [`slugify`] before touching the filesystem.

/// Turn an arbitrary string into a lowercase, hyphen-separated slug.
///
/// Keeps ASCII alphanumerics and `_`; runs of whitespace and hyphens
/// collapse to a single `-`; every other character is stripped. The
/// result never has a leading or trailing hyphen. If nothing survives,
/// `fallback` is returned instead, so the function is total and the
/// output is always a non-empty, filesystem-safe string.
///
/// # Example
///
/// ```
/// use jobdeck_core::slugify;
///
/// assert_eq!(slugify("Acme Corp.", "company"), "acme-corp");
/// assert_eq!(slugify("  --  ", "job"), "job");
/// ```
pub fn slugify(input: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_sep = false;

    for c in input.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_sep = true;
        }
        // anything else is dropped without acting as a separator
    }

    if out.is_empty() {
        fallback.to_string()
    } else {
        out
    }
}

/// Truncate a slug to at most `max` characters.
///
/// Slugs are pure ASCII, so byte truncation is safe. A trailing hyphen
/// left by the cut is trimmed.
pub fn truncate_slug(slug: &str, max: usize) -> String {
    let mut s: String = slug.chars().take(max).collect();
    while s.ends_with('-') {
        s.pop();
    }
    s
}
