use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::images::ImageRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
    #[default]
    Unset,
}

impl TextDirection {
    /// Read an HTML `dir` attribute value. `auto` and unknown values are unset.
    pub fn from_attr(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "ltr" => Self::Ltr,
            "rtl" => Self::Rtl,
            _ => Self::Unset,
        }
    }
}

/// What an [`ArticleExtractor`](crate::reader::ArticleExtractor) hands back.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub title: String,
    pub byline: Option<String>,
    pub dir: TextDirection,
    pub site_name: Option<String>,
    /// Length of `text_content` in characters.
    pub length: usize,
    pub excerpt: String,
    pub text_content: String,
    /// Article body markup.
    pub content: String,
    pub lang: Option<String>,
}

/// Extraction output plus the image inventory of its markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingResult {
    #[serde(flatten)]
    pub article: ExtractionResult,
    pub images: Vec<ImageRecord>,
    pub lead_image: Option<ImageRecord>,
}

impl ReadingResult {
    pub fn new(article: ExtractionResult, images: Vec<ImageRecord>) -> Self {
        let lead_image = images.first().cloned();
        Self {
            article,
            images,
            lead_image,
        }
    }
}

/// Open configuration passed through to the extractor untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractOptions(Map<String, Value>);

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(Value::as_u64)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ExtractOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
