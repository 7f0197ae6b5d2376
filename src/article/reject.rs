const MIN_WORD_COUNT: usize = 50;
const MAX_BOILERPLATE_RATIO: f64 = 0.3;

const BOILERPLATE_KEYWORDS: [&str; 24] = [
    "cookie",
    "privacy",
    "terms",
    "policy",
    "gdpr",
    "consent",
    "accept",
    "preferences",
    "tracking",
    "advertisement",
    "subscribe",
    "newsletter",
    "login",
    "sign up",
    "password",
    "404",
    "not found",
    "access denied",
    "please wait",
    "javascript",
    "enable",
    "browser",
    "click here",
    "read more",
];

/// When an extracted article is not worth showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectPolicy {
    /// Minimum text length in characters.
    pub min_length: usize,
    pub check_boilerplate: bool,
}

impl RejectPolicy {
    pub fn rejects(&self, title: &str, text: &str) -> bool {
        if text.chars().count() < self.min_length {
            return true;
        }

        let word_count = text.split_whitespace().count();
        if title.trim().is_empty() && word_count < MIN_WORD_COUNT {
            return true;
        }

        self.check_boilerplate && boilerplate_ratio(text, word_count) > MAX_BOILERPLATE_RATIO
    }
}

fn boilerplate_ratio(text: &str, total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }

    let text = text.to_lowercase();
    let hits: usize = BOILERPLATE_KEYWORDS
        .iter()
        .map(|keyword| text.matches(keyword).count())
        .sum();

    hits as f64 / total_words as f64
}
