use crate::types::{CompanyNameList, IndicatorCode, KnownTickerSet, TickerSymbol, WordBlocklist};
use crate::utils::{decompress_gzip_to_string, read_csv_columns};
use crate::Error;
use log::info;
use std::sync::{Arc, OnceLock};

// Compressed by `build.rs` from the CSV files under `data/`
const COMPRESSED_COMPANY_NAME_LIST: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/company_name_list.csv.gz"));
const COMPRESSED_KNOWN_TICKER_LIST: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/known_ticker_list.csv.gz"));
const COMPRESSED_ENGLISH_WORD_BLOCKLIST: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/english_word_blocklist.csv.gz"));
const COMPRESSED_ECONOMIC_INDICATOR_LIST: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/economic_indicator_list.csv.gz"));

static EMBEDDED_DICTIONARY: OnceLock<Arc<AssetDictionary>> = OnceLock::new();

/// An entry of the economic indicator directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EconomicIndicator {
    /// Canonical code, e.g. `VIX` or `CASE-SHILLER`.
    pub code: IndicatorCode,

    /// FRED series identifier.
    pub series_id: String,

    pub name: String,

    /// Symbol used by the market data provider, if it carries the series.
    pub provider_symbol: Option<String>,
}

impl EconomicIndicator {
    pub fn new(code: &str, series_id: &str, name: &str, provider_symbol: Option<&str>) -> Self {
        Self {
            code: code.trim().to_uppercase(),
            series_id: series_id.trim().to_string(),
            name: name.trim().to_string(),
            provider_symbol: provider_symbol
                .map(|symbol| symbol.trim().to_string())
                .filter(|symbol| !symbol.is_empty()),
        }
    }

    /// The code with separators removed (`CASE-SHILLER` -> `CASESHILLER`).
    pub fn compact_code(&self) -> String {
        compact_indicator_code(&self.code)
    }
}

/// Immutable lookup tables used by the recognizers.
///
/// Constructed once and shared (via `Arc`) between the recognizers of an
/// `AssetExtractor`. Tests may construct small fixture dictionaries with
/// `AssetDictionary::new`.
#[derive(Debug, Clone)]
pub struct AssetDictionary {
    company_names: CompanyNameList,
    known_tickers: KnownTickerSet,
    word_blocklist: WordBlocklist,
    economic_indicators: Vec<EconomicIndicator>,
}

impl AssetDictionary {
    /// Creates a dictionary from in-memory tables.
    ///
    /// Company names are lower-cased; tickers and blocklist words are upper-cased.
    /// Duplicate company names keep their first mapping.
    pub fn new<N, T, W>(
        company_names: Vec<(N, T)>,
        known_tickers: Vec<T>,
        word_blocklist: Vec<W>,
        economic_indicators: Vec<EconomicIndicator>,
    ) -> Self
    where
        N: AsRef<str>,
        T: AsRef<str>,
        W: AsRef<str>,
    {
        let mut normalized_company_names: CompanyNameList = Vec::with_capacity(company_names.len());

        for (company_name, ticker_symbol) in &company_names {
            let company_name = company_name.as_ref().trim().to_lowercase();

            if company_name.is_empty()
                || normalized_company_names
                    .iter()
                    .any(|(existing, _)| *existing == company_name)
            {
                continue;
            }

            normalized_company_names
                .push((company_name, ticker_symbol.as_ref().trim().to_uppercase()));
        }

        Self {
            company_names: normalized_company_names,
            known_tickers: known_tickers
                .iter()
                .map(|ticker_symbol| ticker_symbol.as_ref().trim().to_uppercase())
                .collect(),
            word_blocklist: word_blocklist
                .iter()
                .map(|word| word.as_ref().trim().to_uppercase())
                .collect(),
            economic_indicators,
        }
    }

    /// Parses a dictionary from CSV documents shaped like the files under `data/`.
    pub fn from_csv_strings(
        company_name_list_csv: &str,
        known_ticker_list_csv: &str,
        english_word_blocklist_csv: &str,
        economic_indicator_list_csv: &str,
    ) -> Result<Self, Error> {
        let company_names: Vec<(String, TickerSymbol)> =
            read_csv_columns(company_name_list_csv, &["Company Name", "Symbol"])?
                .into_iter()
                .map(|mut row| {
                    let ticker_symbol = row.pop().unwrap_or_default();
                    let company_name = row.pop().unwrap_or_default();
                    (company_name, ticker_symbol)
                })
                .filter(|(_, ticker_symbol)| !ticker_symbol.is_empty())
                .collect();

        let known_tickers: Vec<TickerSymbol> =
            read_csv_columns(known_ticker_list_csv, &["Symbol"])?
                .into_iter()
                .flatten()
                .collect();

        let word_blocklist: Vec<String> =
            read_csv_columns(english_word_blocklist_csv, &["Word"])?
                .into_iter()
                .flatten()
                .collect();

        let economic_indicators: Vec<EconomicIndicator> = read_csv_columns(
            economic_indicator_list_csv,
            &["Code", "Series Id", "Name", "Provider Symbol"],
        )?
        .iter()
        .map(|row| {
            EconomicIndicator::new(
                &row[0],
                &row[1],
                &row[2],
                Some(row[3].as_str()),
            )
        })
        .collect();

        Ok(Self::new(
            company_names,
            known_tickers,
            word_blocklist,
            economic_indicators,
        ))
    }

    /// Decompresses and parses the dictionaries embedded into the library at build time.
    pub fn embedded() -> Result<Self, Error> {
        info!("Loading embedded asset dictionaries...");

        let dictionary = Self::from_csv_strings(
            &decompress_gzip_to_string(COMPRESSED_COMPANY_NAME_LIST)?,
            &decompress_gzip_to_string(COMPRESSED_KNOWN_TICKER_LIST)?,
            &decompress_gzip_to_string(COMPRESSED_ENGLISH_WORD_BLOCKLIST)?,
            &decompress_gzip_to_string(COMPRESSED_ECONOMIC_INDICATOR_LIST)?,
        )?;

        info!(
            "Loaded {} company names, {} known tickers, {} blocklisted words, {} economic indicators",
            dictionary.company_names.len(),
            dictionary.known_tickers.len(),
            dictionary.word_blocklist.len(),
            dictionary.economic_indicators.len()
        );

        Ok(dictionary)
    }

    /// The embedded dictionary, loaded on first use and shared for the rest of the process.
    pub fn shared_embedded() -> Result<Arc<Self>, Error> {
        if let Some(dictionary) = EMBEDDED_DICTIONARY.get() {
            return Ok(Arc::clone(dictionary));
        }

        let dictionary = Arc::new(Self::embedded()?);

        Ok(Arc::clone(EMBEDDED_DICTIONARY.get_or_init(|| dictionary)))
    }

    pub fn company_names(&self) -> &CompanyNameList {
        &self.company_names
    }

    pub fn is_known_ticker(&self, token: &str) -> bool {
        self.known_tickers.contains(token)
    }

    pub fn is_blocklisted_word(&self, token: &str) -> bool {
        self.word_blocklist.contains(token)
    }

    pub fn economic_indicators(&self) -> &[EconomicIndicator] {
        &self.economic_indicators
    }

    /// Looks up an indicator by code, ignoring case and separators (`case shiller`,
    /// `Case-Shiller` and `CASESHILLER` all resolve to `CASE-SHILLER`).
    pub fn economic_indicator(&self, code: &str) -> Option<&EconomicIndicator> {
        let compact_code = compact_indicator_code(code);

        self.economic_indicators
            .iter()
            .find(|indicator| indicator.compact_code() == compact_code)
    }

    pub fn is_economic_indicator_code(&self, token: &str) -> bool {
        self.economic_indicator(token).is_some()
    }
}

fn compact_indicator_code(code: &str) -> String {
    code.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_case() {
        let dictionary = AssetDictionary::new(
            vec![("  Apple ", "aapl"), ("AT&T", "t")],
            vec!["nvda"],
            vec!["the"],
            vec![],
        );

        assert_eq!(
            dictionary.company_names(),
            &vec![
                ("apple".to_string(), "AAPL".to_string()),
                ("at&t".to_string(), "T".to_string())
            ]
        );
        assert!(dictionary.is_known_ticker("NVDA"));
        assert!(!dictionary.is_known_ticker("nvda"));
        assert!(dictionary.is_blocklisted_word("THE"));
    }

    #[test]
    fn test_new_keeps_first_mapping_of_duplicate_names() {
        let dictionary = AssetDictionary::new(
            vec![("square", "SQ"), ("Square", "XYZ")],
            vec![],
            Vec::<&str>::new(),
            vec![],
        );

        assert_eq!(
            dictionary.company_names(),
            &vec![("square".to_string(), "SQ".to_string())]
        );
    }

    #[test]
    fn test_from_csv_strings() {
        let dictionary = AssetDictionary::from_csv_strings(
            "Company Name,Symbol\napple,AAPL\njohnson & johnson,JNJ\n",
            "Symbol\nNVDA\nMSFT\n",
            "Word\nTHE\n",
            "Code,Series Id,Name,Provider Symbol\nVIX,VIXCLS,CBOE Volatility Index,^VIX\nCPI,CPIAUCSL,Consumer Price Index,\n",
        )
        .unwrap();

        assert_eq!(dictionary.company_names().len(), 2);
        assert!(dictionary.is_known_ticker("MSFT"));
        assert!(dictionary.is_blocklisted_word("THE"));

        let vix = dictionary.economic_indicator("vix").unwrap();
        assert_eq!(vix.provider_symbol.as_deref(), Some("^VIX"));

        let cpi = dictionary.economic_indicator("CPI").unwrap();
        assert_eq!(cpi.provider_symbol, None);
        assert_eq!(cpi.series_id, "CPIAUCSL");
    }

    #[test]
    fn test_from_csv_strings_rejects_missing_columns() {
        let result = AssetDictionary::from_csv_strings(
            "Name,Ticker\napple,AAPL\n",
            "Symbol\n",
            "Word\n",
            "Code,Series Id,Name,Provider Symbol\n",
        );

        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_economic_indicator_lookup_ignores_separators() {
        let dictionary = AssetDictionary::new(
            Vec::<(&str, &str)>::new(),
            vec![],
            Vec::<&str>::new(),
            vec![EconomicIndicator::new(
                "CASE-SHILLER",
                "CSUSHPINSA",
                "Case-Shiller Home Price Index",
                None,
            )],
        );

        for code in ["CASE-SHILLER", "case shiller", "Case Shiller", "caseshiller"] {
            assert_eq!(
                dictionary.economic_indicator(code).map(|i| i.code.as_str()),
                Some("CASE-SHILLER"),
                "{}",
                code
            );
        }
        assert!(!dictionary.is_economic_indicator_code("CASE"));
    }

    #[test]
    fn test_embedded_dictionary_loads() {
        let dictionary = AssetDictionary::embedded().unwrap();

        assert!(dictionary.company_names().len() > 400);
        assert_eq!(
            dictionary.company_names().first(),
            Some(&("apple".to_string(), "AAPL".to_string()))
        );
        assert!(dictionary.is_known_ticker("NVDA"));
        assert!(dictionary.is_blocklisted_word("THE"));
        assert_eq!(dictionary.economic_indicators().len(), 12);
        assert!(!dictionary.is_known_ticker("ZNGA"));
        assert!(!dictionary.is_blocklisted_word("ZNGA"));
    }
}
