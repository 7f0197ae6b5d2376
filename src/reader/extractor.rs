use crate::document::Document;
use crate::reader::model::{ExtractOptions, ExtractionResult};

/// The article extraction algorithm, treated as a black box.
///
/// It receives a private copy of the page and may mutate it at will.
/// Returning `None` means the page has no extractable article.
#[cfg_attr(test, mockall::automock)]
pub trait ArticleExtractor {
    fn parse(&self, document: Document, options: &ExtractOptions) -> Option<ExtractionResult>;
}

impl<F> ArticleExtractor for F
where
    F: Fn(Document, &ExtractOptions) -> Option<ExtractionResult>,
{
    fn parse(&self, document: Document, options: &ExtractOptions) -> Option<ExtractionResult> {
        self(document, options)
    }
}
