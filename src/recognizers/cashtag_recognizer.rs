use crate::models::{Asset, RecognitionContext, Recognizer};
use crate::Error;
use regex::Regex;

/// Recognizes `$TICKER` cashtags. Cashtags are always accepted.
pub struct CashtagRecognizer {
    pattern: Regex,
}

impl CashtagRecognizer {
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            pattern: Regex::new(r"\$([A-Za-z]{1,5})(?-u:\b)")?,
        })
    }
}

impl Recognizer for CashtagRecognizer {
    fn name(&self) -> &'static str {
        "cashtag"
    }

    fn recognize(&self, text: &str, _context: &RecognitionContext) -> Vec<Asset> {
        self.pattern
            .captures_iter(text)
            .map(|captures| {
                let ticker_symbol = captures[1].to_uppercase();
                Asset::stock(&ticker_symbol, &captures[0])
            })
            .collect()
    }
}
