//! Page-level metadata readability leaves out: site name, byline,
//! description, language and text direction.

use scraper::{ElementRef, Html, Selector};

use crate::reader::TextDirection;

#[derive(Debug, Default, PartialEq)]
pub struct PageMetadata {
    pub site_name: Option<String>,
    pub byline: Option<String>,
    pub description: Option<String>,
    pub lang: Option<String>,
    pub dir: Option<TextDirection>,
}

pub fn read(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);

    PageMetadata {
        site_name: site_name(&document),
        byline: byline(&document),
        description: meta_content(&document, "meta[property='og:description']")
            .or_else(|| meta_content(&document, "meta[name='description']")),
        lang: attribute(&document, "html[lang]", "lang"),
        dir: ["html[dir]", "body[dir]"]
            .into_iter()
            .filter_map(|selector| attribute(&document, selector, "dir"))
            .map(|dir| TextDirection::from_attr(&dir))
            .find(|dir| *dir != TextDirection::Unset),
    }
}

fn site_name(document: &Html) -> Option<String> {
    if let Some(name) = meta_content(document, "meta[property='og:site_name']") {
        return Some(name);
    }

    // "Article Title - Site Name" or "Article Title | Site Name"
    let selector = Selector::parse("title").ok()?;
    let title = document.select(&selector).next()?.text().collect::<String>();
    [" - ", " | "]
        .into_iter()
        .find_map(|separator| title.rfind(separator).map(|pos| &title[pos + separator.len()..]))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

fn byline(document: &Html) -> Option<String> {
    meta_content(document, "meta[name='author']")
        .or_else(|| meta_content(document, "meta[property='article:author']"))
        .or_else(|| {
            ["[rel='author']", ".byline"].into_iter().find_map(|selector| {
                let selector = Selector::parse(selector).ok()?;
                document
                    .select(&selector)
                    .map(element_text)
                    .find(|text| !text.is_empty())
            })
        })
}

fn meta_content(document: &Html, selector: &str) -> Option<String> {
    attribute(document, selector, "content")
}

fn attribute(document: &Html, selector: &str, name: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .filter_map(|element| element.value().attr(name))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
