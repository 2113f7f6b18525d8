//! Regex-based HTML text extraction.
//!
//! The posting pages this tool reads are trusted, narrow input; a full
//! DOM parser would be disproportionate. Tag stripping plus a small
//! entity table covers what the description fields need.

use std::sync::OnceLock;

use regex::Regex;

/// Cap applied to extracted description text.
pub const MAX_TEXT_CHARS: usize = 15_000;

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("valid regex"))
}

fn script_blocks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"(?is)<(script|style|noscript)\b[^>]*>.*?</(script|style|noscript)>")
}

fn chrome_blocks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"(?is)<(nav|header|footer)\b[^>]*>.*?</(nav|header|footer)>")
}

fn break_tags() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(
        &RE,
        r"(?i)</(p|div|li|ul|ol|h[1-6]|tr|table|section|article|blockquote)>|<br\s*/?>",
    )
}

fn any_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"<[^>]+>")
}

/// A content region must strip to at least this many characters to be
/// trusted over the whole-page dump.
const MIN_REGION_CHARS: usize = 300;

/// Markup regions that usually hold the posting itself, most specific
/// first. Non-greedy matches can stop at a nested closing tag; the
/// length gate in [`main_text`] discards those.
fn content_regions() -> &'static Vec<Regex> {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        [
            r#"(?is)<(?:div|section)\b[^>]*(?:class|id)\s*=\s*["'][^"']*(?:job-desc|job_desc|posting-content|job-post)[^"']*["'][^>]*>(.*?)</(?:div|section)>"#,
            r#"(?is)<div\b[^>]*role\s*=\s*["']main["'][^>]*>(.*?)</div>"#,
            r#"(?is)<main\b[^>]*>(.*?)</main>"#,
            r#"(?is)<article\b[^>]*>(.*?)</article>"#,
        ]
        .iter()
        .map(|p| Regex::new(p).expect("valid regex"))
        .collect()
    })
}

/// Strip tags and return plain text, one line per block element,
/// clipped to `max_chars`.
pub fn html_to_text(html: &str, max_chars: usize) -> String {
    if html.is_empty() {
        return String::new();
    }

    let text = script_blocks().replace_all(html, "");
    let text = break_tags().replace_all(&text, "\n");
    let text = any_tag().replace_all(&text, "");
    let text = unescape_entities(&text);

    let joined = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    clip(&joined, max_chars)
}

/// Extract the posting text from a full page.
///
/// Tries the content regions (description containers, `role="main"`,
/// `<main>`, `<article>`) first and uses the first one that yields
/// enough text; otherwise falls back to the whole page with
/// nav/header/footer blocks removed.
pub fn main_text(html: &str, max_chars: usize) -> String {
    for re in content_regions() {
        if let Some(caps) = re.captures(html) {
            let text = html_to_text(&caps[1], max_chars);
            if text.chars().count() >= MIN_REGION_CHARS {
                return text;
            }
        }
    }

    let stripped = chrome_blocks().replace_all(html, "");
    html_to_text(&stripped, max_chars)
}

/// Decode the handful of entities that matter for description text.
pub fn unescape_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Extract the `content` attribute of a `<meta property="...">` tag.
pub fn meta_property(html: &str, property: &str) -> Option<String> {
    // Attribute order varies between sites; try both.
    let patterns = [
        format!(
            r#"(?is)<meta\b[^>]*property\s*=\s*["']{0}["'][^>]*content\s*=\s*["']([^"']*)["']"#,
            regex::escape(property)
        ),
        format!(
            r#"(?is)<meta\b[^>]*content\s*=\s*["']([^"']*)["'][^>]*property\s*=\s*["']{0}["']"#,
            regex::escape(property)
        ),
    ];

    for pattern in &patterns {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(caps) = re.captures(html) {
                let value = unescape_entities(caps[1].trim());
                if !value.is_empty() {
                    return Some(value);
                }
            }
        }
    }
    None
}

/// Extract the `<title>` text.
pub fn title_tag(html: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = regex(&RE, r"(?is)<title[^>]*>(.*?)</title>");
    re.captures(html)
        .map(|caps| unescape_entities(caps[1].trim()))
        .filter(|t| !t.is_empty())
}

/// Extract the first `<h1>` text.
pub fn first_h1(html: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = regex(&RE, r"(?is)<h1[^>]*>(.*?)</h1>");
    re.captures(html)
        .map(|caps| html_to_text(&caps[1], 200))
        .filter(|t| !t.is_empty())
}

fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text_blocks_become_lines() {
        let html = "<div><p>First paragraph.</p><p>Second &amp; last.</p></div>";
        assert_eq!(html_to_text(html, 1000), "First paragraph.\nSecond & last.");
    }

    #[test]
    fn test_script_and_style_dropped() {
        let html = "<p>Keep</p><script>var x = 1;</script><style>p{}</style>";
        assert_eq!(html_to_text(html, 1000), "Keep");
    }

    #[test]
    fn test_clip_to_max_chars() {
        let html = format!("<p>{}</p>", "a".repeat(50));
        assert_eq!(html_to_text(&html, 10).len(), 10);
    }

    #[test]
    fn test_main_text_drops_chrome() {
        let html = "<nav>Menu</nav><p>Job content</p><footer>Legal</footer>";
        assert_eq!(main_text(html, 1000), "Job content");
    }

    #[test]
    fn test_main_text_prefers_description_container() {
        let posting = "We are hiring a platform engineer. ".repeat(12);
        let html = format!(
            r#"<body>
                <div class="sidebar"><p>Open roles: 14. Offices: Oslo, Lisbon, Remote.</p></div>
                <div class="job-description"><p>{posting}</p></div>
                <footer>Legal</footer>
            </body>"#,
        );

        let text = main_text(&html, 15_000);
        assert!(text.contains("We are hiring a platform engineer."));
        assert!(!text.contains("Open roles: 14."));
    }

    #[test]
    fn test_main_text_prefers_main_element() {
        let posting = "Ship the data pipeline end to end. ".repeat(12);
        let html = format!(
            "<header>Logo and menu</header><main><p>{posting}</p></main><footer>Legal</footer>",
        );

        let text = main_text(&html, 15_000);
        assert!(text.contains("Ship the data pipeline"));
        assert!(!text.contains("Logo and menu"));
    }

    #[test]
    fn test_main_text_falls_back_when_region_too_thin() {
        let body = "The full body carries the posting text. ".repeat(12);
        let html = format!("<main><p>Stub.</p></main><p>{body}</p>");

        let text = main_text(&html, 15_000);
        assert!(text.contains("The full body carries the posting text."));
    }

    #[test]
    fn test_meta_property_both_attribute_orders() {
        let a = r#"<meta property="og:title" content="Engineer at Acme">"#;
        let b = r#"<meta content="Engineer at Acme" property="og:title">"#;
        assert_eq!(meta_property(a, "og:title").unwrap(), "Engineer at Acme");
        assert_eq!(meta_property(b, "og:title").unwrap(), "Engineer at Acme");
        assert_eq!(meta_property(a, "og:site_name"), None);
    }

    #[test]
    fn test_title_and_h1() {
        let html = "<html><title>Acme Careers</title><body><h1>Senior <em>Rust</em> Engineer</h1></body></html>";
        assert_eq!(title_tag(html).unwrap(), "Acme Careers");
        assert_eq!(first_h1(html).unwrap(), "Senior Rust Engineer");
    }

    #[test]
    fn test_entities() {
        assert_eq!(unescape_entities("Fish &amp; Chips&nbsp;&#39;24"), "Fish & Chips '24");
    }
}
