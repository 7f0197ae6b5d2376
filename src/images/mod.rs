//! Image inventory for a rebuilt content document.

use std::collections::HashSet;

use kuchiki::{ElementData, NodeDataRef, NodeRef};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::document::Document;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Resolved address; unique within one result.
    pub src: String,
    pub alt: String,
    pub title: String,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub caption: String,
}

/// Collect every `<img>` in document order, skipping images without an
/// address and repeats of an address already seen.
pub fn extract_images(content: &Document) -> Vec<ImageRecord> {
    let Ok(images) = content.node().select("img") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for img in images {
        let Some(src) = image_address(&img, content.url()) else {
            skipped += 1;
            continue;
        };
        if !seen.insert(src.clone()) {
            skipped += 1;
            continue;
        }

        let attributes = img.attributes.borrow();
        records.push(ImageRecord {
            src,
            alt: attributes.get("alt").unwrap_or_default().to_string(),
            title: attributes.get("title").unwrap_or_default().to_string(),
            width: attributes.get("width").and_then(parse_dimension),
            height: attributes.get("height").and_then(parse_dimension),
            caption: find_caption(img.as_node()),
        });
    }

    debug!(images = records.len(), skipped, "harvested images");
    records
}

/// The active source when one can be resolved, else the declared `src`.
fn image_address(img: &NodeDataRef<ElementData>, base: Option<&Url>) -> Option<String> {
    current_source(img, base)
        .or_else(|| {
            img.attributes
                .borrow()
                .get("src")
                .map(str::to_string)
        })
        .filter(|src| !src.is_empty())
}

/// Nothing is resolved in a document without an address, so the active
/// source only exists when `base` is known.
fn current_source(img: &NodeDataRef<ElementData>, base: Option<&Url>) -> Option<String> {
    let base = base?;
    let attributes = img.attributes.borrow();
    let candidate = attributes
        .get("srcset")
        .and_then(first_srcset_candidate)
        .or_else(|| attributes.get("src").map(str::trim))
        .filter(|candidate| !candidate.is_empty())?;

    base.join(candidate).ok().map(|url| url.to_string())
}

/// URL of the first `srcset` candidate. Commas inside the URL are kept;
/// only trailing commas are stripped.
fn first_srcset_candidate(srcset: &str) -> Option<&str> {
    let rest = srcset.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == ',');
    let end = rest
        .find(|c: char| c.is_ascii_whitespace())
        .unwrap_or(rest.len());
    let url = rest[..end].trim_end_matches(',');

    (!url.is_empty()).then_some(url)
}

/// Walk up from `img` to the first `<figure>` and return its trimmed
/// `<figcaption>` text. The first figure ends the walk even when it has no
/// caption.
pub fn find_caption(img: &NodeRef) -> String {
    for node in img.inclusive_ancestors() {
        let Some(element) = node.as_element() else {
            continue;
        };
        if &*element.name.local != "figure" {
            continue;
        }

        return node
            .select_first("figcaption")
            .map(|caption| caption.text_contents().trim().to_string())
            .unwrap_or_default();
    }

    String::new()
}

/// Integer-prefix parsing of a width/height attribute: optional leading
/// whitespace and sign, then base-10 digits. Zero, overflow and values
/// without digits give `None`.
pub fn parse_dimension(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    let parsed = if negative { -magnitude } else { magnitude };

    (parsed != 0).then_some(parsed)
}
