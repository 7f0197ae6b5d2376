//! Mutable HTML documents and the operations the reading pipeline runs on them.
//!
//! A [`Document`] wraps a kuchiki node tree together with the address the
//! document was loaded from, if any. Cloning the wrapper would only share the
//! underlying `Rc` nodes, so copies go through [`isolate`] instead.

pub mod isolate;
pub mod rebuild;

pub use isolate::isolate;
pub use rebuild::{ContentRebuilder, DocumentProvider, ReferenceProvider, SkeletonParser};

use html5ever::{LocalName, Namespace, QualName};
use kuchiki::NodeRef;
use kuchiki::iter::NodeIterator;
use kuchiki::traits::TendrilSink;
use url::Url;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

#[derive(Debug)]
pub struct Document {
    node: NodeRef,
    url: Option<Url>,
}

impl Document {
    /// Wrap an existing node. No validation happens here; [`isolate`] rejects
    /// nodes that are not documents with a root element.
    pub fn from_node(node: NodeRef) -> Self {
        Self { node, url: None }
    }

    /// Parse a full HTML document with html5ever.
    pub fn parse(html: &str) -> Self {
        Self::from_node(kuchiki::parse_html().one(html))
    }

    pub fn with_url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    pub fn set_url(&mut self, url: Option<Url>) {
        self.url = url;
    }

    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    pub fn node(&self) -> &NodeRef {
        &self.node
    }

    pub fn root_element(&self) -> Option<NodeRef> {
        self.node.as_document()?;
        self.node
            .children()
            .elements()
            .next()
            .map(|element| element.as_node().clone())
    }

    pub fn body(&self) -> Option<NodeRef> {
        self.node
            .select_first("body")
            .ok()
            .map(|body| body.as_node().clone())
    }

    /// Serialized children of `<body>`, empty when there is no body.
    pub fn body_html(&self) -> String {
        self.body()
            .map(|body| body.children().map(|child| child.to_string()).collect())
            .unwrap_or_default()
    }

    pub fn to_html(&self) -> String {
        self.node.to_string()
    }
}

/// Capability to turn markup text into a [`Document`].
pub trait MarkupParser {
    fn parse(&self, markup: &str) -> Document;
}

/// The html5ever parser kuchiki ships with.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html5everParser;

impl MarkupParser for Html5everParser {
    fn parse(&self, markup: &str) -> Document {
        Document::parse(markup)
    }
}

pub(crate) fn html_name(local: &str) -> QualName {
    QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(local))
}
