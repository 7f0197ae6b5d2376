use std::fs;
use url::Url;

use super::*;
use crate::reader::{Reader, TextDirection};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/article/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

fn options(url: &str) -> ExtractOptions {
    ExtractOptions::new().with(OPTION_URL, url)
}

#[test]
fn test_extract_article() {
    let reader = Reader::new(ReadabilityExtractor);
    let result = reader
        .extract_from_html(&fixture("article.html"), &options("https://example.com/article"))
        .unwrap()
        .expect("article should be extracted");

    let article = &result.article;
    assert!(article.title.contains("Sample Article"));
    assert_eq!(article.site_name.as_deref(), Some("News Site"));
    assert_eq!(article.byline.as_deref(), Some("Alex Writer"));
    assert_eq!(article.excerpt, "Why the harbour lights matter to the town.");
    assert_eq!(article.lang.as_deref(), Some("en"));
    assert_eq!(article.dir, TextDirection::Ltr);
    assert_eq!(article.length, article.text_content.chars().count());
    assert!(article.text_content.contains("first paragraph"));
    assert!(article.text_content.contains("second paragraph"));
    assert!(!article.content.contains("<script"));
    assert!(!article.content.contains("<style"));
    assert!(article.content.contains("https://example.com/related"));

    let lead = result.lead_image.as_ref().expect("lead image");
    assert_eq!(lead.src, "https://example.com/images/sample.jpg");
    assert_eq!(lead.alt, "Harbour at dusk");
    assert_eq!(result.images.first(), Some(lead));
}

#[test]
fn test_document_url_is_used_without_option() {
    let reader = Reader::new(ReadabilityExtractor);
    let document = reader
        .parse_html(&fixture("article.html"))
        .unwrap()
        .with_url(Url::parse("https://example.com/article").unwrap());

    let result = reader
        .extract_from_document(&document, &ExtractOptions::default())
        .unwrap()
        .unwrap();
    assert!(result.article.content.contains("https://example.com/images/sample.jpg"));
}

#[test]
fn test_reject_boilerplate_page() {
    let reader = Reader::new(ReadabilityExtractor);
    let result = reader
        .extract_from_html(&fixture("empty.html"), &options("https://example.com/empty"))
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn test_char_threshold_option() {
    let html = format!(
        "<!DOCTYPE html><html><head><title>Valid Article</title></head><body><article><h1>Valid Article</h1><p>{}</p></article></body></html>",
        "This is a valid article with enough content to pass the minimum requirements for extraction. ".repeat(20)
    );
    let reader = Reader::new(ReadabilityExtractor);

    let result = reader
        .extract_from_html(&html, &options("https://example.com/valid"))
        .unwrap()
        .unwrap();
    assert_eq!(result.article.title, "Valid Article");
    assert!(result.article.length > DEFAULT_CHAR_THRESHOLD);
    assert!(result.images.is_empty());
    assert!(result.lead_image.is_none());

    let strict = options("https://example.com/valid").with(OPTION_CHAR_THRESHOLD, 1_000_000);
    assert!(reader.extract_from_html(&html, &strict).unwrap().is_none());
}

#[test]
fn test_malformed_html() {
    let html = "<html><head><title>Broken</title><body><p>Unclosed tags<div>More content";
    let reader = Reader::new(ReadabilityExtractor);

    // Too short to keep, but must not error
    let result = reader.extract_from_html(html, &ExtractOptions::default());
    assert_eq!(result, Ok(None));
}

#[test]
fn test_settings_defaults() {
    let settings = Settings::from_options(&ExtractOptions::default(), None);
    assert_eq!(settings.base_url.as_str(), BLANK_URL);
    assert!(settings.sanitize);
    assert_eq!(settings.reject.min_length, DEFAULT_CHAR_THRESHOLD);
    assert!(settings.reject.check_boilerplate);
}

#[test]
fn test_settings_option_url_beats_document_url() {
    let document_url = Url::parse("https://doc.example.com/").unwrap();
    let settings = Settings::from_options(&options("https://opt.example.com/a"), Some(&document_url));
    assert_eq!(settings.base_url.as_str(), "https://opt.example.com/a");

    let settings = Settings::from_options(&ExtractOptions::default(), Some(&document_url));
    assert_eq!(settings.base_url, document_url);
}

#[test]
fn test_settings_overrides() {
    let options = options("not a url")
        .with(OPTION_CHAR_THRESHOLD, 10)
        .with(OPTION_SANITIZE, false)
        .with(OPTION_REJECT_BOILERPLATE, false);
    let settings = Settings::from_options(&options, None);
    assert_eq!(settings.base_url.as_str(), BLANK_URL);
    assert!(!settings.sanitize);
    assert_eq!(settings.reject.min_length, 10);
    assert!(!settings.reject.check_boilerplate);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(
            html in ".*",
            url in "https://[a-z]+\\.com/.*"
        ) {
            let reader = Reader::new(ReadabilityExtractor);
            let _ = reader.extract_from_html(&html, &options(&url));
        }

        #[test]
        fn test_images_are_unique(
            srcs in proptest::collection::vec("[a-c]\\.png", 0..8),
        ) {
            let body: String = srcs.iter().map(|src| format!("<img src=\"{src}\">")).collect();
            let html = format!("<html><body>{body}</body></html>");
            let reader = Reader::new(|_doc: Document, _options: &ExtractOptions| {
                Some(ExtractionResult { content: body.clone(), ..Default::default() })
            });
            let result = reader.extract_from_html(&html, &ExtractOptions::default()).unwrap().unwrap();

            let mut seen = std::collections::HashSet::new();
            prop_assert!(result.images.iter().all(|image| seen.insert(image.src.clone())));
            prop_assert_eq!(result.lead_image.as_ref(), result.images.first());
        }
    }
}
