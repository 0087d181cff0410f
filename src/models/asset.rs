use crate::models::AssetDictionary;
use crate::types::{Cusip, IndicatorCode, TickerSymbol};
use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallPut {
    Call,
    Put,
}

impl CallPut {
    /// Parses `c`, `call`, `calls`, `p`, `put` or `puts` in any case.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "c" | "call" | "calls" => Some(CallPut::Call),
            "p" | "put" | "puts" => Some(CallPut::Put),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CallPut::Call => "call",
            CallPut::Put => "put",
        }
    }

    /// Single letter form used in display symbols.
    pub fn letter(&self) -> char {
        match self {
            CallPut::Call => 'C',
            CallPut::Put => 'P',
        }
    }
}

impl fmt::Display for CallPut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionMetadata {
    pub underlying: TickerSymbol,
    pub strike: f64,
    pub call_put: CallPut,
    pub expiry: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BondMetadata {
    pub cusip: Cusip,
}

/// The kind of a recognized asset, carrying the metadata relevant to that kind only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "metadata", rename_all = "lowercase")]
pub enum AssetKind {
    Stock,
    Option(OptionMetadata),
    Bond(BondMetadata),
    Economic,
}

impl AssetKind {
    pub fn name(&self) -> &'static str {
        match self {
            AssetKind::Stock => "stock",
            AssetKind::Option(_) => "option",
            AssetKind::Bond(_) => "bond",
            AssetKind::Economic => "economic",
        }
    }
}

/// A financial asset recognized in a text document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(flatten)]
    pub kind: AssetKind,

    /// Ticker for stocks and option underlyings, CUSIP for bonds, indicator code for
    /// economic indicators.
    pub symbol: String,

    pub display_symbol: String,

    /// The literal text which triggered the recognition.
    pub matched_text: String,
}

impl Asset {
    pub fn stock(symbol: &str, matched_text: &str) -> Self {
        Self {
            kind: AssetKind::Stock,
            symbol: symbol.to_string(),
            display_symbol: symbol.to_string(),
            matched_text: matched_text.to_string(),
        }
    }

    pub fn economic(code: &str, matched_text: &str) -> Self {
        Self {
            kind: AssetKind::Economic,
            symbol: code.to_string(),
            display_symbol: code.to_string(),
            matched_text: matched_text.to_string(),
        }
    }

    pub fn bond(cusip: &str, matched_text: &str) -> Self {
        Self {
            kind: AssetKind::Bond(BondMetadata {
                cusip: cusip.to_string(),
            }),
            symbol: cusip.to_string(),
            display_symbol: format!("CUSIP: {}", cusip),
            matched_text: matched_text.to_string(),
        }
    }

    /// Creates an option asset, displayed as e.g. `AAPL $150C 01/19`.
    pub fn option(metadata: OptionMetadata, matched_text: &str) -> Self {
        let display_symbol = format!(
            "{} ${}{} {}",
            metadata.underlying,
            metadata.strike,
            metadata.call_put.letter(),
            metadata.expiry.format("%m/%d")
        );

        Self {
            symbol: metadata.underlying.clone(),
            display_symbol,
            kind: AssetKind::Option(metadata),
            matched_text: matched_text.to_string(),
        }
    }

    /// The identity used to de-duplicate assets.
    pub fn key(&self) -> AssetKey {
        match &self.kind {
            AssetKind::Stock => AssetKey::Stock(self.symbol.clone()),
            AssetKind::Option(metadata) => AssetKey::Option {
                underlying: metadata.underlying.clone(),
                strike: OrderedFloat(metadata.strike),
                call_put: metadata.call_put,
                expiry: metadata.expiry,
            },
            AssetKind::Bond(metadata) => AssetKey::Bond(metadata.cusip.clone()),
            AssetKind::Economic => AssetKey::Economic(self.symbol.clone()),
        }
    }

    /// Determines how market data for this asset is requested. Bonds have no live
    /// data source and return `None`.
    pub fn quote_lookup(&self, dictionary: &AssetDictionary) -> Option<QuoteLookup> {
        match &self.kind {
            AssetKind::Stock => Some(QuoteLookup::Provider(self.symbol.clone())),
            AssetKind::Option(metadata) => Some(QuoteLookup::OptionContract(metadata.clone())),
            AssetKind::Bond(_) => None,
            AssetKind::Economic => match dictionary.economic_indicator(&self.symbol) {
                Some(indicator) => match &indicator.provider_symbol {
                    Some(provider_symbol) => Some(QuoteLookup::Provider(provider_symbol.clone())),
                    None => Some(QuoteLookup::FredSeries(indicator.series_id.clone())),
                },
                None => Some(QuoteLookup::Provider(self.symbol.clone())),
            },
        }
    }
}

/// De-duplication identity of an asset. Two assets with equal keys are the same asset,
/// regardless of the text which produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetKey {
    Stock(TickerSymbol),
    Option {
        underlying: TickerSymbol,
        strike: OrderedFloat<f64>,
        call_put: CallPut,
        expiry: NaiveDate,
    },
    Bond(Cusip),
    Economic(IndicatorCode),
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKey::Stock(symbol) => write!(f, "stock:{}", symbol),
            AssetKey::Option {
                underlying,
                strike,
                call_put,
                expiry,
            } => write!(
                f,
                "option:{}:{}:{}:{}",
                underlying,
                strike.into_inner(),
                call_put,
                expiry.format("%Y-%m-%d")
            ),
            AssetKey::Bond(cusip) => write!(f, "bond:{}", cusip),
            AssetKey::Economic(code) => write!(f, "economic:{}", code),
        }
    }
}

/// How a caller should request market data for a recognized asset.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteLookup {
    /// Quote this symbol with the market data provider.
    Provider(String),
    /// Quote a single option contract on its underlying.
    OptionContract(OptionMetadata),
    /// Economic series which the market data provider does not carry; fetch from FRED.
    FredSeries(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EconomicIndicator;
    use serde_json::json;

    fn sample_option(strike: f64) -> Asset {
        Asset::option(
            OptionMetadata {
                underlying: "AAPL".to_string(),
                strike,
                call_put: CallPut::Call,
                expiry: NaiveDate::from_ymd_opt(2025, 1, 19).unwrap(),
            },
            "AAPL 150C 1/19",
        )
    }

    #[test]
    fn test_call_put_parse() {
        assert_eq!(CallPut::parse("C"), Some(CallPut::Call));
        assert_eq!(CallPut::parse("calls"), Some(CallPut::Call));
        assert_eq!(CallPut::parse("Put"), Some(CallPut::Put));
        assert_eq!(CallPut::parse("p"), Some(CallPut::Put));
        assert_eq!(CallPut::parse("x"), None);
    }

    #[test]
    fn test_option_display_symbol() {
        assert_eq!(sample_option(150.0).display_symbol, "AAPL $150C 01/19");
        assert_eq!(sample_option(152.5).display_symbol, "AAPL $152.5C 01/19");
        assert_eq!(sample_option(150.0).symbol, "AAPL");
    }

    #[test]
    fn test_bond_display_symbol() {
        let asset = Asset::bond("38259P508", "38259p508");
        assert_eq!(asset.display_symbol, "CUSIP: 38259P508");
        assert_eq!(asset.matched_text, "38259p508");
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Asset::stock("AAPL", "$AAPL").key().to_string(), "stock:AAPL");
        assert_eq!(
            sample_option(150.0).key().to_string(),
            "option:AAPL:150:call:2025-01-19"
        );
        assert_eq!(
            Asset::bond("38259P508", "38259P508").key().to_string(),
            "bond:38259P508"
        );
        assert_eq!(
            Asset::economic("CASE-SHILLER", "case shiller").key().to_string(),
            "economic:CASE-SHILLER"
        );
    }

    #[test]
    fn test_key_ignores_matched_text() {
        assert_eq!(
            Asset::stock("AAPL", "$AAPL").key(),
            Asset::stock("AAPL", "Apple").key()
        );
        assert_ne!(
            Asset::stock("DXY", "DXY").key(),
            Asset::economic("DXY", "DXY").key()
        );
    }

    #[test]
    fn test_option_keys_distinguish_strikes() {
        assert_eq!(sample_option(150.0).key(), sample_option(150.00).key());
        assert_ne!(sample_option(150.0).key(), sample_option(160.0).key());
    }

    #[test]
    fn test_serializes_metadata_only_for_options_and_bonds() {
        let stock = serde_json::to_value(Asset::stock("AAPL", "$AAPL")).unwrap();
        assert_eq!(
            stock,
            json!({
                "type": "stock",
                "symbol": "AAPL",
                "displaySymbol": "AAPL",
                "matchedText": "$AAPL"
            })
        );

        let option = serde_json::to_value(sample_option(150.0)).unwrap();
        assert_eq!(option["type"], "option");
        assert_eq!(option["metadata"]["underlying"], "AAPL");
        assert_eq!(option["metadata"]["strike"], 150.0);
        assert_eq!(option["metadata"]["callPut"], "call");
        assert_eq!(option["metadata"]["expiry"], "2025-01-19");

        let bond = serde_json::to_value(Asset::bond("38259P508", "38259P508")).unwrap();
        assert_eq!(bond["metadata"], json!({ "cusip": "38259P508" }));
    }

    #[test]
    fn test_quote_lookup() {
        let dictionary = AssetDictionary::new(
            Vec::<(&str, &str)>::new(),
            vec![],
            Vec::<&str>::new(),
            vec![
                EconomicIndicator::new("VIX", "VIXCLS", "CBOE Volatility Index", Some("^VIX")),
                EconomicIndicator::new("CPI", "CPIAUCSL", "Consumer Price Index", None),
            ],
        );

        assert_eq!(
            Asset::stock("MSFT", "MSFT").quote_lookup(&dictionary),
            Some(QuoteLookup::Provider("MSFT".to_string()))
        );
        assert_eq!(
            Asset::economic("VIX", "vix").quote_lookup(&dictionary),
            Some(QuoteLookup::Provider("^VIX".to_string()))
        );
        assert_eq!(
            Asset::economic("CPI", "CPI").quote_lookup(&dictionary),
            Some(QuoteLookup::FredSeries("CPIAUCSL".to_string()))
        );
        assert_eq!(
            Asset::bond("38259P508", "38259P508").quote_lookup(&dictionary),
            None
        );

        match sample_option(150.0).quote_lookup(&dictionary) {
            Some(QuoteLookup::OptionContract(metadata)) => {
                assert_eq!(metadata.underlying, "AAPL");
                assert_eq!(metadata.strike, 150.0);
            }
            other => panic!("Unexpected quote lookup: {:?}", other),
        }
    }
}
