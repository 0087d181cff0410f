use crate::models::{Asset, AssetDictionary, EconomicIndicator, RecognitionContext, Recognizer};
use crate::Error;
use regex::Regex;
use std::sync::Arc;

/// Recognizes economic indicator codes from the dictionary as whole words, in any case.
/// Hyphenated codes also match with a single space (`case shiller`). Matches are
/// upper-cased with spaces turned into hyphens, and must then name a code exactly, so
/// `caseshiller` is not an indicator.
pub struct EconomicIndicatorRecognizer {
    dictionary: Arc<AssetDictionary>,
    pattern: Option<Regex>,
}

impl EconomicIndicatorRecognizer {
    pub fn new(dictionary: Arc<AssetDictionary>) -> Result<Self, Error> {
        let pattern = Self::build_pattern(dictionary.economic_indicators())?;

        Ok(Self {
            dictionary,
            pattern,
        })
    }

    fn build_pattern(economic_indicators: &[EconomicIndicator]) -> Result<Option<Regex>, Error> {
        let mut alternatives: Vec<String> = economic_indicators
            .iter()
            .map(|indicator| {
                indicator
                    .code
                    .split('-')
                    .filter(|part| !part.is_empty())
                    .map(regex::escape)
                    .collect::<Vec<String>>()
                    .join("[- ]?")
            })
            .filter(|alternative| !alternative.is_empty())
            .collect();

        if alternatives.is_empty() {
            return Ok(None);
        }

        // Longest first, so no code is shadowed by one of its prefixes
        alternatives.sort_by(|a, b| b.len().cmp(&a.len()));

        let pattern = Regex::new(&format!(
            r"(?i)(?-u:\b)(?:{})(?-u:\b)",
            alternatives.join("|")
        ))?;

        Ok(Some(pattern))
    }
}

impl Recognizer for EconomicIndicatorRecognizer {
    fn name(&self) -> &'static str {
        "economic_indicator"
    }

    fn recognize(&self, text: &str, _context: &RecognitionContext) -> Vec<Asset> {
        let pattern = match &self.pattern {
            Some(pattern) => pattern,
            None => return vec![],
        };

        pattern
            .find_iter(text)
            .filter_map(|found| {
                let code = found.as_str().to_uppercase().replace(' ', "-");

                self.dictionary
                    .economic_indicators()
                    .iter()
                    .find(|indicator| indicator.code == code)
                    .map(|indicator| Asset::economic(&indicator.code, found.as_str()))
            })
            .collect()
    }
}
