//! Frontmatter rendering and parsing.
//!
//! Header values are single-line only: the renderer backslash-escapes
//! backslashes and double quotes and flattens embedded newlines to
//! spaces. Multi-line content belongs in the body. The parser is the
//! catalog builder's reader for the same format and additionally
//! tolerates unquoted values in hand-written record files.
//!
//! This is a flat, single-pass scanner over fixed delimiters, not a YAML
//! parser; the input source is a fixed set of templates this tool itself
//! writes.

use std::collections::HashMap;

/// Header delimiter line.
const DELIMITER: &str = "---";

/// A parsed record file: header field map plus free-text body.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Header key/value pairs. Values are unescaped.
    pub fields: HashMap<String, String>,
    /// Markdown body, trimmed of surrounding whitespace.
    pub body: String,
}

impl Document {
    /// Look up a header field, treating empty values as absent.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Look up a header field, falling back to `default` when missing or empty.
    pub fn field_or(&self, key: &str, default: &str) -> String {
        self.field(key).unwrap_or(default).to_string()
    }
}

/// Render a header field map and body into record-file text.
///
/// Field order in the output follows iteration order of `fields`, so
/// callers pass an ordered sequence.
pub fn render<'a, I>(fields: I, body: &str) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut lines = vec![DELIMITER.to_string()];
    for (key, value) in fields {
        lines.push(format!("{}: \"{}\"", key, escape(value)));
    }
    lines.push(DELIMITER.to_string());
    lines.push(String::new());
    lines.push(body.to_string());
    lines.join("\n")
}

/// Parse record-file text into a [`Document`].
///
/// Never fails: content without a leading `---` line (or with an
/// unclosed header) is returned as an all-body document with no fields.
pub fn parse(content: &str) -> Document {
    let mut lines = content.lines();

    match lines.next() {
        Some(first) if first.trim_end() == DELIMITER => {}
        _ => {
            return Document {
                fields: HashMap::new(),
                body: content.trim().to_string(),
            }
        }
    }

    let mut fields = HashMap::new();
    let mut closed = false;
    for line in lines.by_ref() {
        if line.trim_end() == DELIMITER {
            closed = true;
            break;
        }
        if let Some((key, value)) = parse_header_line(line) {
            fields.insert(key, value);
        }
    }

    if !closed {
        // Unclosed header: treat the whole file as body.
        return Document {
            fields: HashMap::new(),
            body: content.trim().to_string(),
        };
    }

    let body: Vec<&str> = lines.collect();
    Document {
        fields,
        body: body.join("\n").trim().to_string(),
    }
}

/// Parse one `key: "value"` header line. Lines without a colon are skipped.
fn parse_header_line(line: &str) -> Option<(String, String)> {
    let idx = line.find(':')?;
    let key = line[..idx].trim();
    if key.is_empty() {
        return None;
    }

    let raw = line[idx + 1..].trim();
    let value = if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        unescape(&raw[1..raw.len() - 1])
    } else {
        // Hand-written records may use bare or single-quoted scalars.
        raw.trim_matches('\'').to_string()
    };

    Some((key.to_string(), value))
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push(' '),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
