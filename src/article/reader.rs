use readability::extractor;
use scraper::{Html, Selector};
use tracing::{debug, warn};
use url::Url;

use crate::article::model::ArticleDraft;

const CONTENT_SELECTORS: [&str; 9] = [
    "article",
    "main",
    "[role='main']",
    ".content",
    ".post",
    ".article",
    "#content",
    "#main",
    ".entry-content",
];

const MIN_FALLBACK_TEXT: usize = 100;

pub fn extract(html: &str, url: &Url) -> Option<ArticleDraft> {
    match extractor::extract(&mut html.as_bytes(), url) {
        Ok(product) if !product.text.trim().is_empty() => {
            return Some(ArticleDraft {
                title: product.title,
                text: product.text,
                html: product.content,
            });
        }
        Ok(_) => debug!("readability found no text"),
        Err(err) => warn!(error = ?err, "readability failed"),
    }

    fallback_extract(html)
}

fn fallback_extract(html: &str) -> Option<ArticleDraft> {
    let document = Html::parse_document(html);
    let title = extract_title(&document)?;
    let (text, html) = extract_main_content(&document);

    if text.trim().is_empty() {
        return None;
    }

    debug!(text_len = text.len(), "used fallback content");
    Some(ArticleDraft { title, text, html })
}

fn extract_title(document: &Html) -> Option<String> {
    if let Ok(selector) = Selector::parse("meta[property='og:title']")
        && let Some(content) = document
            .select(&selector)
            .find_map(|element| element.value().attr("content"))
    {
        return Some(content.trim().to_string());
    }

    ["title", "h1"].into_iter().find_map(|name| {
        let selector = Selector::parse(name).ok()?;
        document
            .select(&selector)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .find(|title| !title.is_empty())
    })
}

fn extract_main_content(document: &Html) -> (String, String) {
    for selector in CONTENT_SELECTORS {
        let Ok(selector) = Selector::parse(selector) else {
            continue;
        };
        for element in document.select(&selector) {
            let text = element.text().collect::<String>();
            if text.trim().len() > MIN_FALLBACK_TEXT {
                return (text, element.inner_html());
            }
        }
    }

    if let Ok(selector) = Selector::parse("body")
        && let Some(body) = document.select(&selector).next()
    {
        return (body.text().collect(), body.inner_html());
    }

    (String::new(), String::new())
}
