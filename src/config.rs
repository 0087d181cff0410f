use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetExtractorConfig {
    /// Bare uppercase tokens at least this long are accepted by the heuristic ticker
    /// recognizer without needing a rare or doubled letter.
    pub heuristic_min_length: usize,

    /// When an option expiry has no explicit year and its month/day has already passed
    /// relative to the reference date, roll it over to the following year.
    pub roll_past_expiries: bool,

    /// Date used to fill in missing option expiry years. `None` uses the local date at
    /// the time of each extraction.
    pub reference_date: Option<NaiveDate>,
}

pub const DEFAULT_ASSET_EXTRACTOR_CONFIG: AssetExtractorConfig = AssetExtractorConfig {
    heuristic_min_length: 4,
    roll_past_expiries: false,
    reference_date: None,
};

impl Default for AssetExtractorConfig {
    fn default() -> Self {
        DEFAULT_ASSET_EXTRACTOR_CONFIG
    }
}
