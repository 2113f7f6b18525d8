//! Issue-body parsing.
//!
//! Submitted issue bodies arrive in one of two dialects, both flat and
//! line-oriented:
//!
//! - **Heading-delimited** (issue forms): `### Label` lines, each
//!   followed by the field value up to the next heading.
//! - **Bold-label** (free-text templates, seekers only): `**Label:**
//!   value` lines, the value running until the next bold-label line.
//!
//! Parsing never fails. Missing sections are simply absent from the
//! mapping, and a heading with no body yields an empty-string value;
//! callers apply defaults.

use std::collections::HashMap;

/// Mapping from section label to trimmed field value.
pub type FieldMap = HashMap<String, String>;

/// Parse a heading-delimited issue-form body.
pub fn parse_form_body(body: &str) -> FieldMap {
    let mut fields = FieldMap::new();
    heading_sections(body, &mut fields);
    fields
}

/// Parse a seeker profile body: heading sections first, then a
/// bold-label pass that only fills labels the heading pass left absent
/// or empty.
pub fn parse_profile_body(body: &str) -> FieldMap {
    let mut fields = FieldMap::new();
    heading_sections(body, &mut fields);
    bold_labels(body, &mut fields);
    fields
}

/// Heading dialect: split on lines beginning `### `.
fn heading_sections(body: &str, fields: &mut FieldMap) {
    for section in body.split("\n### ").filter(|s| !s.is_empty()) {
        let (label_line, rest) = match section.find('\n') {
            Some(idx) => (&section[..idx], &section[idx..]),
            None => (section, ""),
        };

        let label = clean_label(label_line);
        if label.is_empty() {
            continue;
        }

        // Value runs to the next blank-line-then-heading boundary.
        let value = rest
            .trim_start_matches('\n')
            .split("\n\n###")
            .next()
            .unwrap_or("")
            .trim();

        fields.insert(label, value.to_string());
    }
}

/// Strip heading markers and a trailing `(Optional)` suffix from a label line.
fn clean_label(line: &str) -> String {
    let label = line.trim();
    let label = label
        .strip_suffix("(Optional)")
        .map(str::trim_end)
        .unwrap_or(label);
    label.trim_start_matches('#').trim().to_string()
}

/// Bold dialect: `**Label:** value`, the value continuing over
/// subsequent lines until a line that starts a new bold label. Only
/// fills in labels not already populated by the heading pass.
fn bold_labels(body: &str, fields: &mut FieldMap) {
    let mut current: Option<(String, String)> = None;

    for line in body.lines() {
        if let Some(rest) = bold_label_start(line) {
            flush(&mut current, fields);
            if let Some(idx) = rest.find(":**") {
                let label = rest[..idx].trim().to_string();
                let value = rest[idx + 3..].trim().to_string();
                if !label.is_empty() {
                    current = Some((label, value));
                }
            }
        } else if let Some((_, value)) = current.as_mut() {
            value.push('\n');
            value.push_str(line);
        }
    }

    flush(&mut current, fields);
}

/// Detect a line opening a bold label, tolerating indentation and a
/// list marker before the `**` (`- **Name:** Jane`).
fn bold_label_start(line: &str) -> Option<&str> {
    let rest = line.trim_start();
    let rest = rest
        .strip_prefix("- ")
        .or_else(|| rest.strip_prefix("* "))
        .unwrap_or(rest)
        .trim_start();
    rest.strip_prefix("**")
}

fn flush(current: &mut Option<(String, String)>, fields: &mut FieldMap) {
    if let Some((label, value)) = current.take() {
        let existing_empty = fields.get(&label).map_or(true, String::is_empty);
        if existing_empty {
            fields.insert(label, value.trim().to_string());
        }
    }
}
