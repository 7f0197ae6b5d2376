//! Rebuilding a small working document around extracted markup.
//!
//! Blank documents come from an ordered chain of [`DocumentProvider`]s; the
//! first provider that returns one wins.

use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink;
use tracing::{debug, warn};

use crate::document::{Document, html_name};
use crate::reader::errors::ReaderError;

const BLANK_SKELETON: &str = "<!doctype html><html><body></body></html>";

/// A way of obtaining an empty HTML document.
pub trait DocumentProvider {
    fn name(&self) -> &'static str;

    /// Return a blank document, or `None` if this provider cannot build one
    /// for `reference`.
    fn create_document(&self, reference: &Document) -> Option<Document>;
}

/// Builds the blank document node by node, the way the reference document's
/// own implementation would. Declines when the reference is not a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceProvider;

impl DocumentProvider for ReferenceProvider {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn create_document(&self, reference: &Document) -> Option<Document> {
        reference.node().as_document()?;

        let document = NodeRef::new_document();
        let html = NodeRef::new_element(html_name("html"), None);
        html.append(NodeRef::new_element(html_name("head"), None));
        html.append(NodeRef::new_element(html_name("body"), None));
        document.append(NodeRef::new_doctype("html", "", ""));
        document.append(html);

        Some(Document::from_node(document))
    }
}

/// Parses a minimal `<!doctype html>` skeleton.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkeletonParser;

impl DocumentProvider for SkeletonParser {
    fn name(&self) -> &'static str {
        "skeleton-parser"
    }

    fn create_document(&self, _reference: &Document) -> Option<Document> {
        Some(Document::from_node(kuchiki::parse_html().one(BLANK_SKELETON)))
    }
}

pub struct ContentRebuilder {
    providers: Vec<Box<dyn DocumentProvider>>,
}

impl ContentRebuilder {
    pub fn new(providers: Vec<Box<dyn DocumentProvider>>) -> Self {
        Self { providers }
    }

    /// Default chain with `provider` slotted between the reference provider
    /// and the skeleton parser.
    pub fn with_ambient(provider: impl DocumentProvider + 'static) -> Self {
        Self::new(vec![
            Box::new(ReferenceProvider),
            Box::new(provider),
            Box::new(SkeletonParser),
        ])
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|provider| provider.name()).collect()
    }

    /// Build a fresh document whose body holds `markup`.
    ///
    /// `markup` is inserted as-is; sanitizing it is the caller's concern.
    /// The new document inherits the URL of `reference`, which is otherwise
    /// left untouched.
    pub fn build_content_document(
        &self,
        reference: &Document,
        markup: &str,
    ) -> Result<Document, ReaderError> {
        for provider in &self.providers {
            let Some(mut document) = provider.create_document(reference) else {
                continue;
            };

            let Some(body) = document.body() else {
                warn!(provider = provider.name(), "provider returned a document without a body");
                continue;
            };

            replace_children(&body, markup);
            document.set_url(reference.url().cloned());
            debug!(provider = provider.name(), markup_len = markup.len(), "built content document");
            return Ok(document);
        }

        Err(ReaderError::environment_unsupported(
            "no document provider could create an HTML document",
        ))
    }
}

impl Default for ContentRebuilder {
    fn default() -> Self {
        Self::new(vec![Box::new(ReferenceProvider), Box::new(SkeletonParser)])
    }
}

fn replace_children(body: &NodeRef, markup: &str) {
    for child in body.children().collect::<Vec<_>>() {
        child.detach();
    }

    if markup.is_empty() {
        return;
    }

    let fragment = kuchiki::parse_fragment(html_name("body"), Vec::new()).one(markup);
    // html5ever roots fragments in a synthetic <html> element
    let Some(container) = fragment.first_child() else {
        return;
    };
    for child in container.children().collect::<Vec<_>>() {
        body.append(child);
    }
}
