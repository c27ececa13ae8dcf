// src/extractor.rs - pattern matching over fetched pages
use once_cell::sync::Lazy;
use phonenumber::{country, Mode};
use regex::Regex;
use scraper::{Html, Node, Selector};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

static EMAIL_IN_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

// Loose candidate pattern; real rejection happens in the numbering-plan parse.
static PHONE_CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Platform {
    Facebook,
    Twitter,
    Instagram,
    LinkedIn,
    GitHub,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter",
            Platform::Instagram => "Instagram",
            Platform::LinkedIn => "LinkedIn",
            Platform::GitHub => "GitHub",
        };
        write!(f, "{}", name)
    }
}

static SOCIAL_PATTERNS: Lazy<Vec<(Platform, Regex)>> = Lazy::new(|| {
    vec![
        (
            Platform::Facebook,
            Regex::new(r"(?i)facebook\.com/[A-Za-z0-9._-]+").unwrap(),
        ),
        (
            Platform::Twitter,
            Regex::new(r"(?i)(?:twitter\.com|x\.com)/[A-Za-z0-9_]+").unwrap(),
        ),
        (
            Platform::Instagram,
            Regex::new(r"(?i)instagram\.com/[A-Za-z0-9._]+").unwrap(),
        ),
        (
            Platform::LinkedIn,
            Regex::new(r"(?i)linkedin\.com/(?:in|company)/[A-Za-z0-9_%-]+").unwrap(),
        ),
        (
            Platform::GitHub,
            Regex::new(r"(?i)github\.com/[A-Za-z0-9-]+").unwrap(),
        ),
    ]
});

/// Text content of the document with script/style/noscript subtrees removed,
/// text nodes joined by single spaces. Matching against this instead of raw
/// HTML avoids false positives inside embedded code.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut chunks = Vec::new();
    let mut stack = vec![document.tree.root()];

    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    chunks.push(trimmed.to_string());
                }
            }
            Node::Element(element)
                if matches!(element.name(), "script" | "style" | "noscript") =>
            {
                continue;
            }
            _ => {}
        }
        // Depth-first, left to right: push children reversed.
        let children: Vec<_> = node.children().collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }

    chunks.join(" ")
}

/// No secondary validation beyond the pattern itself; results are lowercased
/// so the session-level set dedups case variants.
pub fn extract_emails(text: &str) -> BTreeSet<String> {
    EMAIL_IN_TEXT
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Candidates that fail the numbering-plan parse are silently dropped;
/// accepted ones are normalized to the international display format.
pub fn extract_phones(text: &str, region: Option<country::Id>) -> BTreeSet<String> {
    PHONE_CANDIDATE
        .find_iter(text)
        .filter_map(|m| phonenumber::parse(region, m.as_str()).ok())
        .map(|number| number.format().mode(Mode::International).to_string())
        .collect()
}

/// Scans anchor hrefs in the raw HTML for known profile URL shapes, grouped
/// by platform. Platforms without matches are omitted from the map.
pub fn extract_social_links(html: &str) -> BTreeMap<Platform, BTreeSet<String>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").unwrap();
    let mut links: BTreeMap<Platform, BTreeSet<String>> = BTreeMap::new();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        for (platform, pattern) in SOCIAL_PATTERNS.iter() {
            if pattern.is_match(href) {
                links.entry(*platform).or_default().insert(href.to_string());
                break;
            }
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_text_drops_script_and_style() {
        let html = r#"<html><head><style>.a { color: red }</style></head>
            <body><p>Call   us</p><script>var phone = "555-123-4567";</script>
            <div>today</div></body></html>"#;
        let text = visible_text(html);
        assert_eq!(text, "Call   us today");
        assert!(!text.contains("555-123-4567"));
    }

    #[test]
    fn visible_text_of_garbage_is_total() {
        assert_eq!(visible_text(""), "");
        // Unclosed tags still yield whatever text the parser recovers.
        let text = visible_text("<p>hello <b>world");
        assert!(text.contains("hello"));
        assert!(text.contains("world"));
    }

    #[test]
    fn extracts_and_lowercases_emails() {
        let emails = extract_emails("Reach John.Doe@Example.COM or jane@corp.io today");
        assert_eq!(emails.len(), 2);
        assert!(emails.contains("john.doe@example.com"));
        assert!(emails.contains("jane@corp.io"));
    }

    #[test]
    fn email_extraction_is_idempotent() {
        let first = extract_emails("a@b.com x@y.org a@b.com");
        let joined = first.iter().cloned().collect::<Vec<_>>().join(" ");
        let second = extract_emails(&joined);
        assert_eq!(first, second);
    }

    #[test]
    fn phone_extraction_normalizes_and_ignores_emails() {
        let phones = extract_phones(
            "Call 555-123-4567 or email x@y.com",
            Some(country::US),
        );
        assert_eq!(phones.len(), 1);
        assert!(phones.contains("+1 555-123-4567"));
    }

    #[test]
    fn phone_extraction_drops_unparseable_candidates() {
        // National format with no region to interpret it under.
        let phones = extract_phones("Call 555-123-4567", None);
        assert!(phones.is_empty());
    }

    #[test]
    fn phone_extraction_dedups_format_variants() {
        let phones = extract_phones(
            "(650) 253-0000, 650-253-0000, 650.253.0000",
            Some(country::US),
        );
        assert_eq!(phones.len(), 1);
    }

    #[test]
    fn social_links_grouped_by_platform() {
        let html = r#"<body>
            <a href="https://facebook.com/johndoe">fb</a>
            <a href="https://www.linkedin.com/in/john-doe">li</a>
            <a href="/local/page">ignore</a>
        </body>"#;
        let links = extract_social_links(html);
        assert_eq!(links.len(), 2);
        assert!(links[&Platform::Facebook].contains("https://facebook.com/johndoe"));
        assert!(links[&Platform::LinkedIn].contains("https://www.linkedin.com/in/john-doe"));
        assert!(!links.contains_key(&Platform::Instagram));
    }

    #[test]
    fn social_links_on_malformed_html_is_empty() {
        assert!(extract_social_links("not html at all").is_empty());
    }
}
