use crate::constants::FALLBACK_MONTH_NUMBER;
use crate::models::{Asset, CallPut, OptionMetadata, RecognitionContext, Recognizer};
use crate::utils::{lookup_month_number, resolve_expiry};
use crate::Error;
use log::warn;
use regex::{Captures, Regex};

/// `TICKER <month-name> <day> [$]<strike> (call|put|calls|puts|c|p)`
const OPTION_PHRASE_PATTERN: &str = r"(?-u:\b)([A-Za-z]{1,5})\s+(?i:(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?))\s+(\d{1,2})\s*\$?\s*(\d+(?:\.\d+)?)\s*(?i:(calls?|puts?|c|p))(?-u:\b)";

/// Recognizes options written out as a phrase, e.g. `TSLA Jan 19 $150 call`.
///
/// The phrase carries no year; the reference year is used (see `resolve_expiry`).
pub struct OptionPhraseRecognizer {
    roll_past_expiries: bool,
    pattern: Regex,
}

impl OptionPhraseRecognizer {
    pub fn new(roll_past_expiries: bool) -> Result<Self, Error> {
        Ok(Self {
            roll_past_expiries,
            pattern: Regex::new(OPTION_PHRASE_PATTERN)?,
        })
    }

    fn parse_captures(&self, captures: &Captures, context: &RecognitionContext) -> Option<Asset> {
        let month_name = &captures[2];
        let month = lookup_month_number(month_name).unwrap_or_else(|| {
            warn!(
                "Unrecognized month name {:?} in {:?}; falling back to month {}",
                month_name, &captures[0], FALLBACK_MONTH_NUMBER
            );
            FALLBACK_MONTH_NUMBER
        });

        let day: u32 = captures[3].parse().ok()?;
        let strike: f64 = captures[4]
            .parse()
            .ok()
            .filter(|strike: &f64| strike.is_finite())?;
        let call_put = CallPut::parse(&captures[5])?;

        let expiry = resolve_expiry(month, day, None, context.today, self.roll_past_expiries)?;

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

impl Recognizer for OptionPhraseRecognizer {
    fn name(&self) -> &'static str {
        "option_phrase"
    }

    fn recognize(&self, text: &str, context: &RecognitionContext) -> Vec<Asset> {
        self.pattern
            .captures_iter(text)
            .filter_map(|captures| self.parse_captures(&captures, context))
            .collect()
    }
}
