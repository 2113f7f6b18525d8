//! Field-alias resolution.
//!
//! The same logical field can appear under different section headings
//! depending on which submission template was used ("Company Name" vs
//! "Company"), so record builders resolve each field through a priority
//! list of acceptable labels.

use crate::form::FieldMap;

/// Resolve a field from `fields`, trying each label in order.
///
/// Returns the first alias whose trimmed value is non-empty; a label
/// that is present but blank falls through to the next alias. When no
/// alias yields a value, `default` is returned unchanged (the empty
/// string is a legitimate default).
pub fn pick(fields: &FieldMap, labels: &[&str], default: &str) -> String {
    for label in labels {
        if let Some(value) = fields.get(*label) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    default.to_string()
}
