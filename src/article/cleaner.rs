use ammonia::Builder;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use url::Url;

use crate::article::model::{ArticleDraft, normalize_whitespace};

static LINK_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\b(href|src)="([^"]+)""#).unwrap());

/// Optionally sanitize the draft markup, then make its links absolute and
/// tidy the text.
pub fn clean(draft: &mut ArticleDraft, base_url: &Url, sanitize: bool) {
    if sanitize {
        // drops scripts, styles and event handlers
        draft.html = Builder::default().clean(&draft.html).to_string();
    }

    draft.html = resolve_links(&draft.html, base_url);
    draft.text = normalize_whitespace(&draft.text);
}

fn resolve_links(html: &str, base_url: &Url) -> String {
    LINK_ATTRIBUTE
        .replace_all(html, |caps: &Captures| match base_url.join(&caps[2]) {
            Ok(absolute) => format!(r#"{}="{}""#, &caps[1], absolute),
            Err(_) => caps[0].to_string(),
        })
        .into_owned()
}
