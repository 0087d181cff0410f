use crate::models::{Asset, AssetDictionary, RecognitionContext, Recognizer};
use crate::types::TickerSymbol;
use crate::Error;
use regex::{Regex, RegexSet};
use std::sync::Arc;

/// Recognizes company names from the dictionary, case-insensitively and on word
/// boundaries, so `apple` matches "Apple" but never "applesauce".
///
/// Word boundaries are ASCII only, so accented letters next to a name do not join it to
/// a word. Candidates are emitted in dictionary order rather than text order.
pub struct CompanyNameRecognizer {
    prefilter: RegexSet,
    patterns: Vec<(Regex, TickerSymbol)>,
}

impl CompanyNameRecognizer {
    pub fn new(dictionary: Arc<AssetDictionary>) -> Result<Self, Error> {
        let mut sources: Vec<String> = Vec::with_capacity(dictionary.company_names().len());
        let mut patterns: Vec<(Regex, TickerSymbol)> =
            Vec::with_capacity(dictionary.company_names().len());

        for (company_name, ticker_symbol) in dictionary.company_names() {
            let source = Self::build_pattern_source(company_name);

            patterns.push((Regex::new(&source)?, ticker_symbol.clone()));
            sources.push(source);
        }

        let prefilter = RegexSet::new(&sources)?;

        Ok(Self {
            prefilter,
            patterns,
        })
    }

    fn build_pattern_source(company_name: &str) -> String {
        let is_word_char =
            |c: Option<char>| c.map_or(false, |c| c.is_ascii_alphanumeric() || c == '_');

        let leading_boundary = if is_word_char(company_name.chars().next()) {
            r"(?-u:\b)"
        } else {
            ""
        };
        let trailing_boundary = if is_word_char(company_name.chars().last()) {
            r"(?-u:\b)"
        } else {
            ""
        };

        format!(
            "(?i){}{}{}",
            leading_boundary,
            regex::escape(company_name),
            trailing_boundary
        )
    }
}

impl Recognizer for CompanyNameRecognizer {
    fn name(&self) -> &'static str {
        "company_name"
    }

    fn recognize(&self, text: &str, _context: &RecognitionContext) -> Vec<Asset> {
        // `SetMatches` iterates in ascending pattern index, which is dictionary order
        self.prefilter
            .matches(text)
            .into_iter()
            .filter_map(|index| {
                let (pattern, ticker_symbol) = &self.patterns[index];

                pattern
                    .find(text)
                    .map(|found| Asset::stock(ticker_symbol, found.as_str()))
            })
            .collect()
    }
}
