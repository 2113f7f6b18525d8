//! JSON-LD `JobPosting` extraction from static HTML.
//!
//! Many career pages embed a schema.org `JobPosting` object in a
//! `<script type="application/ld+json">` block. This is far more
//! reliable than text heuristics, so [`static_page`](crate::static_page)
//! tries it first.

use std::sync::OnceLock;

use jobdeck_ingest::JobSubmission;
use regex::Regex;
use serde_json::Value;
use url::Url;

use crate::html::{html_to_text, unescape_entities, MAX_TEXT_CHARS};
use crate::org_from_host;

fn ld_script_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?is)<script[^>]*application/ld\+json[^>]*>(.*?)</script>"#)
            .expect("valid regex")
    })
}

/// Extract a job submission from the first `JobPosting` JSON-LD block in
/// `html`, if any.
pub fn extract(html: &str, url: &Url) -> Option<JobSubmission> {
    for captures in ld_script_re().captures_iter(html) {
        let raw = captures.get(1)?.as_str().trim();
        let parsed: Value = match serde_json::from_str(raw) {
            Ok(parsed) => parsed,
            Err(_) => continue,
        };
        for candidate in candidates(&parsed) {
            if is_job_posting(candidate) {
                return Some(from_posting(candidate, url));
            }
        }
    }
    None
}

/// A block may hold the posting directly, as an array, or under `@graph`.
fn candidates(parsed: &Value) -> Vec<&Value> {
    match parsed {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) => match parsed["@graph"].as_array() {
            Some(graph) => graph.iter().collect(),
            None => vec![parsed],
        },
        _ => Vec::new(),
    }
}

fn is_job_posting(value: &Value) -> bool {
    match &value["@type"] {
        Value::String(ty) => ty.eq_ignore_ascii_case("jobposting"),
        Value::Array(types) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|ty| ty.eq_ignore_ascii_case("jobposting")),
        _ => false,
    }
}

fn from_posting(posting: &Value, url: &Url) -> JobSubmission {
    let title = non_empty(&posting["title"])
        .or_else(|| non_empty(&posting["name"]))
        .unwrap_or_else(|| "Job Listing".to_string());

    let organization_name = match &posting["hiringOrganization"] {
        Value::String(name) if !name.trim().is_empty() => name.trim().to_string(),
        org @ Value::Object(_) => {
            non_empty(&org["name"]).unwrap_or_else(|| org_from_host(url))
        }
        _ => org_from_host(url),
    };

    let description = posting["description"]
        .as_str()
        .map(|d| html_to_text(&unescape_entities(d), MAX_TEXT_CHARS))
        .unwrap_or_default();

    JobSubmission {
        title,
        organization_name,
        location: location_of(posting),
        job_type: non_empty(&posting["employmentType"])
            .map(|t| t.to_lowercase())
            .unwrap_or_else(|| "full-time".to_string()),
        salary_range: salary_of(&posting["baseSalary"]).unwrap_or_default(),
        description,
        website: url.to_string(),
        ..Default::default()
    }
}

/// `jobLocation` is an object or an array of objects; the address inside
/// is either a plain string or a `PostalAddress` with separate parts.
fn location_of(posting: &Value) -> String {
    let loc = match &posting["jobLocation"] {
        Value::Array(locs) => match locs.first() {
            Some(first) => first,
            None => return String::new(),
        },
        loc @ Value::Object(_) => loc,
        _ => return String::new(),
    };

    match &loc["address"] {
        Value::String(addr) => addr.trim().to_string(),
        addr @ Value::Object(_) => {
            let parts: Vec<String> = ["addressLocality", "addressRegion", "addressCountry"]
                .iter()
                .filter_map(|key| non_empty(&addr[*key]))
                .collect();
            if parts.is_empty() {
                non_empty(&loc["name"]).unwrap_or_default()
            } else {
                parts.join(", ")
            }
        }
        _ => non_empty(&loc["name"]).unwrap_or_default(),
    }
}

fn salary_of(base_salary: &Value) -> Option<String> {
    let value = &base_salary["value"];
    let currency = base_salary["currency"].as_str().unwrap_or("").trim();

    let min = number_or_string(&value["minValue"]);
    let max = number_or_string(&value["maxValue"]);
    let single = number_or_string(value).or_else(|| number_or_string(&value["value"]));

    let amount = match (min, max) {
        (Some(min), Some(max)) => format!("{min}-{max}"),
        (Some(min), None) => min,
        (None, Some(max)) => max,
        (None, None) => single?,
    };

    if currency.is_empty() {
        Some(amount)
    } else {
        Some(format!("{currency} {amount}"))
    }
}

fn number_or_string(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn non_empty(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
