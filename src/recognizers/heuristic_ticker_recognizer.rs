use crate::models::{Asset, AssetDictionary, RecognitionContext, Recognizer};
use crate::utils::is_ticker_shaped;
use crate::Error;
use regex::Regex;
use std::sync::Arc;

/// Recognizes lesser-known tickers: standalone 2-5 letter uppercase tokens which are
/// neither blocklisted English words nor already known, and which look like a ticker
/// (see `is_ticker_shaped`).
///
/// Short tokens need a rare or doubled letter to pass; tokens of `min_length` or more
/// are accepted on length alone, so the blocklist carries most of the precision there.
pub struct HeuristicTickerRecognizer {
    dictionary: Arc<AssetDictionary>,
    min_length: usize,
    pattern: Regex,
}

impl HeuristicTickerRecognizer {
    pub fn new(dictionary: Arc<AssetDictionary>, min_length: usize) -> Result<Self, Error> {
        Ok(Self {
            dictionary,
            min_length,
            pattern: Regex::new(r"(?-u:\b)([A-Z]{2,5})(?-u:\b)")?,
        })
    }

    fn is_candidate(&self, token: &str) -> bool {
        !self.dictionary.is_blocklisted_word(token)
            && !self.dictionary.is_known_ticker(token)
            && !self.dictionary.is_economic_indicator_code(token)
            && is_ticker_shaped(token, self.min_length)
    }
}

impl Recognizer for HeuristicTickerRecognizer {
    fn name(&self) -> &'static str {
        "heuristic_ticker"
    }

    fn recognize(&self, text: &str, _context: &RecognitionContext) -> Vec<Asset> {
        self.pattern
            .find_iter(text)
            .map(|token| token.as_str())
            .filter(|token| self.is_candidate(token))
            .map(|token| Asset::stock(token, token))
            .collect()
    }
}
