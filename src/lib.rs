pub mod article;
pub mod config;
pub mod document;
pub mod images;
pub mod reader;
pub mod source;

pub use article::ReadabilityExtractor;
pub use document::Document;
pub use images::ImageRecord;
pub use reader::{
    ArticleExtractor, ExtractOptions, ExtractionResult, Reader, ReaderError, ReadingResult,
    TextDirection,
};
