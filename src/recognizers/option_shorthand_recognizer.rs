use crate::models::{Asset, CallPut, OptionMetadata, RecognitionContext, Recognizer};
use crate::utils::resolve_expiry;
use crate::Error;
use regex::{Captures, Regex};

/// `TICKER <strike>[.<decimals>] <C|P> <month>/<day>[/<year>]`
const OPTION_SHORTHAND_PATTERN: &str =
    r"(?-u:\b)([A-Za-z]{1,5})\s+(\d+(?:\.\d+)?)\s*([CcPp])\s+(\d{1,2})/(\d{1,2})(?:/(\d{4}|\d{2}))?(?-u:\b)";

/// Recognizes options written in trader shorthand, e.g. `AAPL 150C 1/19` or
/// `spy 420.5p 12/20/24`. The underlying is upper-cased.
pub struct OptionShorthandRecognizer {
    roll_past_expiries: bool,
    pattern: Regex,
}

impl OptionShorthandRecognizer {
    pub fn new(roll_past_expiries: bool) -> Result<Self, Error> {
        Ok(Self {
            roll_past_expiries,
            pattern: Regex::new(OPTION_SHORTHAND_PATTERN)?,
        })
    }

    fn parse_captures(&self, captures: &Captures, context: &RecognitionContext) -> Option<Asset> {
        let strike: f64 = captures[2]
            .parse()
            .ok()
            .filter(|strike: &f64| strike.is_finite())?;
        let call_put = CallPut::parse(&captures[3])?;
        let month: u32 = captures[4].parse().ok()?;
        let day: u32 = captures[5].parse().ok()?;

        let expiry = resolve_expiry(
            month,
            day,
            captures.get(6).map(|year| year.as_str()),
            context.today,
            self.roll_past_expiries,
        )?;

        Some(Asset::option(
            OptionMetadata {
                underlying: captures[1].to_uppercase(),
                strike,
                call_put,
                expiry,
            },
            &captures[0],
        ))
    }
}

impl Recognizer for OptionShorthandRecognizer {
    fn name(&self) -> &'static str {
        "option_shorthand"
    }

    fn recognize(&self, text: &str, context: &RecognitionContext) -> Vec<Asset> {
        self.pattern
            .captures_iter(text)
            .filter_map(|captures| self.parse_captures(&captures, context))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetKind;
    use crate::recognizers::fixtures::fixture_context;

    fn recognize_keys(text: &str) -> Vec<String> {
        OptionShorthandRecognizer::new(false)
            .unwrap()
            .recognize(text, &fixture_context())
            .iter()
            .map(|asset| asset.key().to_string())
            .collect()
    }

    #[test]
    fn test_recognizes_shorthand_without_year() {
        let assets = OptionShorthandRecognizer::new(false)
            .unwrap()
            .recognize("grabbed AAPL 200C 3/21 this morning", &fixture_context());

        assert_eq!(assets.len(), 1);

        let asset = &assets[0];
        assert_eq!(asset.symbol, "AAPL");
        assert_eq!(asset.display_symbol, "AAPL $200C 03/21");
        assert_eq!(asset.matched_text, "AAPL 200C 3/21");

        match &asset.kind {
            AssetKind::Option(metadata) => {
                assert_eq!(metadata.underlying, "AAPL");
                assert_eq!(metadata.strike, 200.0);
                assert_eq!(metadata.call_put, CallPut::Call);
                assert_eq!(metadata.expiry.to_string(), "2025-03-21");
            }
            other => panic!("Unexpected asset kind: {:?}", other),
        }
    }

    #[test]
    fn test_recognizes_puts_decimals_and_years() {
        assert_eq!(
            recognize_keys("SPY 420.5p 12/20/24"),
            vec!["option:SPY:420.5:put:2024-12-20"]
        );
        assert_eq!(
            recognize_keys("TSLA 250 C 01/17/2026"),
            vec!["option:TSLA:250:call:2026-01-17"]
        );
        assert_eq!(
            recognize_keys("IBM 100P 1/19/99"),
            vec!["option:IBM:100:put:1999-01-19"]
        );
    }

    #[test]
    fn test_lowercase_underlying_is_upper_cased() {
        let assets = OptionShorthandRecognizer::new(false)
            .unwrap()
            .recognize("aapl 150c 1/19", &fixture_context());

        assert_eq!(assets.len(), 1);
        assert_eq!(
            assets[0].key().to_string(),
            "option:AAPL:150:call:2025-01-19"
        );
        assert_eq!(assets[0].display_symbol, "AAPL $150C 01/19");
        assert_eq!(assets[0].matched_text, "aapl 150c 1/19");
    }

    #[test]
    fn test_drops_impossible_dates() {
        assert!(recognize_keys("AAPL 150C 13/45").is_empty());
        assert!(recognize_keys("AAPL 150C 2/30").is_empty());
    }

    #[test]
    fn test_rolls_past_expiries_when_enabled() {
        let keys: Vec<String> = OptionShorthandRecognizer::new(true)
            .unwrap()
            .recognize("AAPL 150C 1/19 and AAPL 150C 7/18", &fixture_context())
            .iter()
            .map(|asset| asset.key().to_string())
            .collect();

        assert_eq!(
            keys,
            vec![
                "option:AAPL:150:call:2026-01-19",
                "option:AAPL:150:call:2025-07-18"
            ]
        );
    }
}
