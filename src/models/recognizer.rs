use crate::models::Asset;
use chrono::NaiveDate;

/// Per-extraction state handed to every recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognitionContext {
    /// Date used to fill in missing option expiry years.
    pub today: NaiveDate,
}

impl RecognitionContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

/// A single strategy for spotting assets in text.
///
/// Recognizers are independent of each other: each scans the full text and returns
/// its candidates in the order it found them. Priority between recognizers, and
/// de-duplication, is handled by `AssetExtractor`.
pub trait Recognizer: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Scans `text` for candidates. Never fails; text without matches yields no
    /// candidates.
    fn recognize(&self, text: &str, context: &RecognitionContext) -> Vec<Asset>;
}
