//! An [`ArticleExtractor`] backed by the `readability` crate.
//!
//! Recognized options: `url` (base address for links), `charThreshold`,
//! `sanitize` and `rejectBoilerplate`. Anything else is ignored.

pub mod cleaner;
pub mod language;
pub mod metadata;
pub mod model;
pub mod reader;
pub mod reject;

#[cfg(test)]
mod tests;

use tracing::{debug, instrument};
use url::Url;

use crate::article::model::first_paragraph;
use crate::article::reject::RejectPolicy;
use crate::document::Document;
use crate::reader::{ArticleExtractor, ExtractOptions, ExtractionResult};

pub const OPTION_URL: &str = "url";
pub const OPTION_CHAR_THRESHOLD: &str = "charThreshold";
pub const OPTION_SANITIZE: &str = "sanitize";
pub const OPTION_REJECT_BOILERPLATE: &str = "rejectBoilerplate";

pub const DEFAULT_CHAR_THRESHOLD: usize = 250;
const BLANK_URL: &str = "about:blank";

#[derive(Debug, Clone, Copy, Default)]
pub struct ReadabilityExtractor;

#[derive(Debug, Clone, PartialEq)]
struct Settings {
    base_url: Url,
    sanitize: bool,
    reject: RejectPolicy,
}

impl Settings {
    fn from_options(options: &ExtractOptions, document_url: Option<&Url>) -> Self {
        let base_url = options
            .get_str(OPTION_URL)
            .and_then(|url| Url::parse(url).ok())
            .or_else(|| document_url.cloned())
            .unwrap_or_else(blank_url);

        Self {
            base_url,
            sanitize: options.get_bool(OPTION_SANITIZE).unwrap_or(true),
            reject: RejectPolicy {
                min_length: options
                    .get_u64(OPTION_CHAR_THRESHOLD)
                    .and_then(|threshold| usize::try_from(threshold).ok())
                    .unwrap_or(DEFAULT_CHAR_THRESHOLD),
                check_boilerplate: options.get_bool(OPTION_REJECT_BOILERPLATE).unwrap_or(true),
            },
        }
    }
}

fn blank_url() -> Url {
    Url::parse(BLANK_URL).expect("about:blank is a valid url")
}

impl ArticleExtractor for ReadabilityExtractor {
    #[instrument(skip_all, name = "readability")]
    fn parse(&self, document: Document, options: &ExtractOptions) -> Option<ExtractionResult> {
        let settings = Settings::from_options(options, document.url());
        let html = document.to_html();

        let mut draft = reader::extract(&html, &settings.base_url)?;
        cleaner::clean(&mut draft, &settings.base_url, settings.sanitize);

        if settings.reject.rejects(&draft.title, &draft.text) {
            debug!(text_len = draft.text.len(), "article rejected");
            return None;
        }

        let page = metadata::read(&html);
        let lang = page.lang.or_else(|| language::detect_language(&draft.text));
        let dir = page
            .dir
            .unwrap_or_else(|| language::script_direction(&draft.text));
        let excerpt = page
            .description
            .unwrap_or_else(|| first_paragraph(&draft.text));

        Some(ExtractionResult {
            title: draft.title.trim().to_string(),
            byline: page.byline,
            dir,
            site_name: page.site_name,
            length: draft.text.chars().count(),
            excerpt,
            text_content: draft.text,
            content: draft.html,
            lang,
        })
    }
}
