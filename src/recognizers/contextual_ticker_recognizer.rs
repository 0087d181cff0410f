use crate::models::{Asset, RecognitionContext, Recognizer};
use crate::Error;
use regex::Regex;

/// Trading verbs which, directly followed by an uppercase token, mark that token as a ticker.
const VERB_THEN_TICKER_PATTERN: &str = r"(?-u:\b)(?i:long|short(?:ing)?|bullish(?:\s+on)?|bearish(?:\s+on)?|buy(?:ing)?|bought|sell(?:ing)?|sold|hold(?:ing)?|loading(?:\s+up)?(?:\s+on)?|loaded\s+up\s+on|watch(?:ing)?|adding|added|trimm?(?:ing|ed)?|accumulating)\s+([A-Z]{1,5})(?-u:\b)";

/// Trading nouns and phrases which, directly preceded by an uppercase token, mark that
/// token as a ticker.
const TICKER_THEN_NOUN_PATTERN: &str = r"(?-u:\b)([A-Z]{1,5})\s+(?i:calls|puts|shares|stock|earnings|options|leaps|position|to\s+the\s+moon|is\s+(?:mooning|ripping|pumping|dumping|tanking))(?-u:\b)";

/// Recognizes bare tickers from the trading vocabulary around them ("long XYZ",
/// "XYZ calls", "bullish on XYZ").
///
/// The surrounding context is taken as sufficient evidence: matches are not checked
/// against the known-ticker list or the word blocklist.
pub struct ContextualTickerRecognizer {
    patterns: Vec<Regex>,
}

impl ContextualTickerRecognizer {
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            patterns: vec![
                Regex::new(VERB_THEN_TICKER_PATTERN)?,
                Regex::new(TICKER_THEN_NOUN_PATTERN)?,
            ],
        })
    }
}

impl Recognizer for ContextualTickerRecognizer {
    fn name(&self) -> &'static str {
        "contextual_ticker"
    }

    fn recognize(&self, text: &str, _context: &RecognitionContext) -> Vec<Asset> {
        self.patterns
            .iter()
            .flat_map(|pattern| pattern.captures_iter(text))
            .map(|captures| Asset::stock(&captures[1], &captures[0]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizers::fixtures::fixture_context;

    fn recognize_symbols(text: &str) -> Vec<String> {
        ContextualTickerRecognizer::new()
            .unwrap()
            .recognize(text, &fixture_context())
            .into_iter()
            .map(|asset| asset.symbol)
            .collect()
    }

    #[test]
    fn test_verb_then_ticker() {
        assert_eq!(recognize_symbols("Long TSLA into the close"), vec!["TSLA"]);
        assert_eq!(recognize_symbols("very bullish on PLTR"), vec!["PLTR"]);
        assert_eq!(recognize_symbols("Bearish on RIVN here"), vec!["RIVN"]);
        assert_eq!(recognize_symbols("loading up on SOFI"), vec!["SOFI"]);
        assert_eq!(recognize_symbols("still watching HOOD"), vec!["HOOD"]);
        assert_eq!(recognize_symbols("trimmed COST today"), vec!["COST"]);
    }

    #[test]
    fn test_ticker_then_noun() {
        assert_eq!(recognize_symbols("NVDA calls are printing"), vec!["NVDA"]);
        assert_eq!(recognize_symbols("grabbed some AMD shares"), vec!["AMD"]);
        assert_eq!(recognize_symbols("ORCL earnings tonight"), vec!["ORCL"]);
        assert_eq!(recognize_symbols("GME to the moon"), vec!["GME"]);
        assert_eq!(recognize_symbols("SMCI is ripping"), vec!["SMCI"]);
    }

    #[test]
    fn test_matched_text_covers_phrase() {
        let assets = ContextualTickerRecognizer::new()
            .unwrap()
            .recognize("so bullish on PLTR", &fixture_context());

        assert_eq!(assets[0].matched_text, "bullish on PLTR");
    }

    #[test]
    fn test_ticker_must_be_uppercase() {
        assert!(recognize_symbols("buy the dip").is_empty());
        assert!(recognize_symbols("long term thinking").is_empty());
        assert!(recognize_symbols("belong TSLA").is_empty());
    }

    #[test]
    fn test_context_bypasses_blocklist() {
        assert_eq!(recognize_symbols("Hold THE line"), vec!["THE"]);
    }

    #[test]
    fn test_verb_matches_precede_noun_matches() {
        assert_eq!(
            recognize_symbols("AMD calls, then I bought MSFT"),
            vec!["MSFT", "AMD"]
        );
    }
}
