//! Static-HTML scraping: JSON-LD first, then text heuristics.

use jobdeck_core::Result;
use jobdeck_ingest::JobSubmission;
use tracing::{debug, warn};
use url::Url;

use crate::fetcher::{Fetcher, DEFAULT_TIMEOUT};
use crate::html::{first_h1, html_to_text, main_text, meta_property, title_tag, MAX_TEXT_CHARS};
use crate::{jsonld, org_from_host};

/// Pages whose stripped text is shorter than this are treated as
/// JS-rendered shells and left to the Jina fallback.
const MIN_TEXT_CHARS: usize = 400;

/// Scrape an arbitrary posting page from its static HTML.
///
/// Returns `Ok(None)` when the page cannot be fetched or carries too
/// little static text to be worth extracting.
pub fn scrape(fetcher: &dyn Fetcher, url: &Url) -> Result<Option<JobSubmission>> {
    let html = match fetcher.get(url.as_str(), &[], DEFAULT_TIMEOUT) {
        Ok(html) => html,
        Err(e) => {
            warn!(%url, error = %e, "static fetch failed");
            return Ok(None);
        }
    };

    let text = html_to_text(&html, MAX_TEXT_CHARS);
    if text.chars().count() < MIN_TEXT_CHARS {
        debug!(%url, chars = text.chars().count(), "page too thin, likely JS-rendered");
        return Ok(None);
    }

    if let Some(sub) = jsonld::extract(&html, url) {
        if !sub.description.is_empty() || sub.title != "Job Listing" {
            return Ok(Some(sub));
        }
    }

    let title = meta_property(&html, "og:title")
        .or_else(|| title_tag(&html))
        .or_else(|| first_h1(&html))
        .unwrap_or_else(|| "Job Listing".to_string());
    let organization_name =
        meta_property(&html, "og:site_name").unwrap_or_else(|| org_from_host(url));

    Ok(Some(JobSubmission {
        title,
        organization_name,
        job_type: "full-time".to_string(),
        description: main_text(&html, MAX_TEXT_CHARS),
        website: url.to_string(),
        ..Default::default()
    }))
}
