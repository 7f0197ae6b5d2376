//! Decoding raw HTML bytes of unknown encoding into text.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Bytes scanned for a `<meta>` charset declaration.
const SNIFF_LIMIT: usize = 4096;

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

/// Decode `bytes` as HTML text.
///
/// A byte-order mark wins, then a `<meta>` declaration in the first 4KB,
/// then chardetng's guess. Malformed sequences are replaced rather than
/// rejected.
pub fn decode_html(bytes: &[u8]) -> String {
    let encoding = Encoding::for_bom(bytes)
        .map(|(encoding, _)| encoding)
        .unwrap_or_else(|| detect_encoding(bytes));

    let (decoded, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!(encoding = used.name(), "input contained malformed sequences");
    }
    debug!(encoding = used.name(), bytes = bytes.len(), "decoded html");
    decoded.into_owned()
}

fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    let head = &bytes[..bytes.len().min(SNIFF_LIMIT)];
    let head_text = String::from_utf8_lossy(head);

    let declared = [&*META_CHARSET_REGEX, &*META_HTTP_EQUIV_REGEX]
        .into_iter()
        .filter_map(|regex| regex.captures(&head_text))
        .filter_map(|captures| captures.get(1))
        .find_map(|label| Encoding::for_label(label.as_str().to_lowercase().as_bytes()));
    if let Some(encoding) = declared {
        return encoding;
    }

    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}
