use crate::models::{Asset, AssetDictionary, RecognitionContext, Recognizer};
use crate::Error;
use regex::Regex;
use std::sync::Arc;

/// Recognizes standalone uppercase tokens which appear in the known-ticker list.
pub struct KnownTickerRecognizer {
    dictionary: Arc<AssetDictionary>,
    pattern: Regex,
}

impl KnownTickerRecognizer {
    pub fn new(dictionary: Arc<AssetDictionary>) -> Result<Self, Error> {
        Ok(Self {
            dictionary,
            pattern: Regex::new(r"(?-u:\b)([A-Z]{1,5})(?-u:\b)")?,
        })
    }
}

impl Recognizer for KnownTickerRecognizer {
    fn name(&self) -> &'static str {
        "known_ticker"
    }

    fn recognize(&self, text: &str, _context: &RecognitionContext) -> Vec<Asset> {
        self.pattern
            .find_iter(text)
            .map(|token| token.as_str())
            .filter(|token| {
                self.dictionary.is_known_ticker(token)
                    && !self.dictionary.is_economic_indicator_code(token)
            })
            .map(|token| Asset::stock(token, token))
            .collect()
    }
}
