use mockall::mock;

use readview::document::{ContentRebuilder, DocumentProvider, isolate};
use readview::{
    ArticleExtractor, Document, ExtractOptions, ExtractionResult, Reader, ReaderError,
    TextDirection,
};

mock! {
    Extractor {}

    impl ArticleExtractor for Extractor {
        fn parse(&self, document: Document, options: &ExtractOptions) -> Option<ExtractionResult>;
    }
}

const ARTICLE_BODY: &str = r#"<article><img src="a.jpg" width="10"><figure><img src="b.jpg"><figcaption>Caption B</figcaption></figure></article>"#;

/// Hands back the isolated document's body verbatim as the article markup.
fn body_echo(document: Document, _options: &ExtractOptions) -> Option<ExtractionResult> {
    let content = document.body_html();
    Some(ExtractionResult {
        title: "Echo".to_string(),
        byline: Some("Reporter".to_string()),
        dir: TextDirection::Ltr,
        site_name: None,
        length: content.len(),
        excerpt: String::new(),
        text_content: String::new(),
        content,
        lang: None,
    })
}

fn page() -> Document {
    Document::parse(&format!("<html><head><title>Page</title></head><body>{ARTICLE_BODY}</body></html>"))
}

#[test]
fn test_end_to_end_with_echo_extractor() {
    let reader = Reader::new(body_echo);
    let result = reader
        .extract_from_document(&page(), &ExtractOptions::default())
        .unwrap()
        .unwrap();

    assert_eq!(result.images.len(), 2);
    assert_eq!(result.images[0].src, "a.jpg");
    assert_eq!(result.images[0].width, Some(10));
    assert_eq!(result.images[0].caption, "");
    assert_eq!(result.images[1].src, "b.jpg");
    assert_eq!(result.images[1].caption, "Caption B");
    assert_eq!(result.lead_image.as_ref(), Some(&result.images[0]));

    // extraction fields pass through untouched
    assert_eq!(result.article.title, "Echo");
    assert_eq!(result.article.byline.as_deref(), Some("Reporter"));
    assert_eq!(result.article.content, ARTICLE_BODY);
}

#[test]
fn test_end_to_end_from_html() {
    let html = format!("<!doctype html><html><body>{ARTICLE_BODY}</body></html>");
    let result = Reader::new(body_echo)
        .extract_from_html(&html, &ExtractOptions::default())
        .unwrap()
        .unwrap();
    assert_eq!(result.images.len(), 2);
    assert_eq!(result.images[1].caption, "Caption B");
}

#[test]
fn test_source_document_survives_destructive_extractor() {
    let doc = page();
    let before = doc.to_html();

    let reader = Reader::new(|document: Document, _options: &ExtractOptions| {
        for img in document
            .node()
            .select("img")
            .unwrap()
            .collect::<Vec<_>>()
        {
            img.as_node().detach();
        }
        body_echo(document, &ExtractOptions::default())
    });

    let result = reader
        .extract_from_document(&doc, &ExtractOptions::default())
        .unwrap()
        .unwrap();
    assert!(result.images.is_empty());
    assert!(result.lead_image.is_none());
    assert_eq!(doc.to_html(), before);
}

#[test]
fn test_unextractable_page_is_none() {
    let mut extractor = MockExtractor::new();
    extractor.expect_parse().times(1).returning(|_, _| None);

    let result = Reader::new(extractor).extract_from_document(&page(), &ExtractOptions::default());
    assert_eq!(result, Ok(None));
}

#[test]
fn test_non_document_is_invalid_input() {
    let mut extractor = MockExtractor::new();
    extractor.expect_parse().never();

    let image = page()
        .node()
        .select_first("img")
        .unwrap()
        .as_node()
        .clone();
    let result = Reader::new(extractor)
        .extract_from_document(&Document::from_node(image), &ExtractOptions::default());
    assert!(matches!(result, Err(ReaderError::InvalidInput(_))));
}

#[test]
fn test_repeated_calls_are_independent() {
    let reader = Reader::new(body_echo);
    let doc = page();

    let first = reader.extract_from_document(&doc, &ExtractOptions::default()).unwrap();
    let second = reader.extract_from_document(&doc, &ExtractOptions::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_injected_provider_is_used() {
    struct Marked;

    impl DocumentProvider for Marked {
        fn name(&self) -> &'static str {
            "marked"
        }

        fn create_document(&self, _reference: &Document) -> Option<Document> {
            Some(Document::parse(r#"<html><body class="marked"></body></html>"#))
        }
    }

    // Only the injected provider and no reference provider in front of it
    let rebuilder = ContentRebuilder::new(vec![Box::new(Marked)]);
    let content = rebuilder
        .build_content_document(&page(), "<img src=\"x.png\">")
        .unwrap();
    assert!(content.to_html().contains(r#"class="marked""#));
    assert_eq!(content.body_html(), "<img src=\"x.png\">");

    let reader = Reader::new(body_echo).with_rebuilder(ContentRebuilder::with_ambient(Marked));
    let result = reader
        .extract_from_document(&page(), &ExtractOptions::default())
        .unwrap()
        .unwrap();
    assert_eq!(result.images.len(), 2);
}

#[test]
fn test_isolate_is_public_and_deep() {
    let doc = page();
    let copy = isolate(&doc).unwrap();
    assert_eq!(copy.to_html(), doc.to_html());
    assert!(copy.root_element().unwrap() != doc.root_element().unwrap());
}

#[test]
fn test_result_json_shape() {
    let result = Reader::new(body_echo)
        .extract_from_document(&page(), &ExtractOptions::default())
        .unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["title"], "Echo");
    assert_eq!(value["dir"], "ltr");
    assert_eq!(value["images"][1]["caption"], "Caption B");
    assert_eq!(value["leadImage"]["src"], "a.jpg");

    let none = Reader::new(|_: Document, _: &ExtractOptions| None::<ExtractionResult>)
        .extract_from_document(&page(), &ExtractOptions::default())
        .unwrap();
    assert_eq!(serde_json::to_value(&none).unwrap(), serde_json::Value::Null);
}
