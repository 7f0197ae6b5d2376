pub mod errors;
pub mod extractor;
pub mod model;

pub use errors::ReaderError;
pub use extractor::ArticleExtractor;
pub use model::{ExtractOptions, ExtractionResult, ReadingResult, TextDirection};

use tracing::{debug, info, instrument};

use crate::document::{self, ContentRebuilder, Document, Html5everParser, MarkupParser};
use crate::images;

/// Runs an [`ArticleExtractor`] on a private copy of a page and inventories
/// the images of whatever it extracts.
///
/// A `Reader` holds no per-call state; every call builds and drops its own
/// documents.
pub struct Reader<E> {
    extractor: E,
    rebuilder: ContentRebuilder,
    parser: Option<Box<dyn MarkupParser>>,
}

impl<E: ArticleExtractor> Reader<E> {
    pub fn new(extractor: E) -> Self {
        Self {
            extractor,
            rebuilder: ContentRebuilder::default(),
            parser: Some(Box::new(Html5everParser)),
        }
    }

    pub fn with_rebuilder(mut self, rebuilder: ContentRebuilder) -> Self {
        self.rebuilder = rebuilder;
        self
    }

    pub fn with_parser(mut self, parser: impl MarkupParser + 'static) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// Drop the markup parser; [`Reader::extract_from_html`] then fails with
    /// [`ReaderError::EnvironmentUnsupported`].
    pub fn without_parser(mut self) -> Self {
        self.parser = None;
        self
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Extract the article of `doc` without touching `doc` itself.
    ///
    /// `Ok(None)` means the extractor found nothing worth reading.
    #[instrument(skip_all, fields(url = doc.url().map(|url| url.as_str())))]
    pub fn extract_from_document(
        &self,
        doc: &Document,
        options: &ExtractOptions,
    ) -> Result<Option<ReadingResult>, ReaderError> {
        let isolated = document::isolate(doc)?;

        let Some(article) = self.extractor.parse(isolated, options) else {
            info!("no extractable article content");
            return Ok(None);
        };
        debug!(
            title = %article.title,
            length = article.length,
            "article extracted"
        );

        let content = self.rebuilder.build_content_document(doc, &article.content)?;
        let images = images::extract_images(&content);

        Ok(Some(ReadingResult::new(article, images)))
    }

    /// Parse `html` and run [`Reader::extract_from_document`] on it.
    #[instrument(skip_all, fields(html_len = html.len()))]
    pub fn extract_from_html(
        &self,
        html: &str,
        options: &ExtractOptions,
    ) -> Result<Option<ReadingResult>, ReaderError> {
        let doc = self.parse_html(html)?;
        self.extract_from_document(&doc, options)
    }

    /// Parse `html` with the configured markup parser.
    pub fn parse_html(&self, html: &str) -> Result<Document, ReaderError> {
        let parser = self.parser.as_ref().ok_or_else(|| {
            ReaderError::environment_unsupported("no markup parser is available")
        })?;
        Ok(parser.parse(html))
    }
}
