use crate::models::{Asset, RecognitionContext, Recognizer};
use crate::utils::validate_cusip;
use crate::Error;
use regex::Regex;

/// Recognizes standalone nine character CUSIPs. A token must mix letters and digits and
/// carry a valid check digit; anything else is silently skipped.
pub struct CusipRecognizer {
    pattern: Regex,
}

impl CusipRecognizer {
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            pattern: Regex::new(r"(?-u:\b)[A-Za-z0-9]{9}(?-u:\b)")?,
        })
    }
}

impl Recognizer for CusipRecognizer {
    fn name(&self) -> &'static str {
        "cusip"
    }

    fn recognize(&self, text: &str, _context: &RecognitionContext) -> Vec<Asset> {
        self.pattern
            .find_iter(text)
            .filter_map(|found| {
                let cusip = found.as_str().to_uppercase();

                let has_letter = cusip.chars().any(|c| c.is_ascii_alphabetic());
                let has_digit = cusip.chars().any(|c| c.is_ascii_digit());

                if has_letter && has_digit && validate_cusip(&cusip) {
                    Some(Asset::bond(&cusip, found.as_str()))
                } else {
                    None
                }
            })
            .collect()
    }
}
