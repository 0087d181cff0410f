//! Extracts financial assets from free-form text: stock tickers, options contracts,
//! CUSIP-identified bonds and economic indicators.
//!
//! Every recognizer scans the whole text independently; results are merged in a fixed
//! priority order and de-duplicated by asset identity, so the first (highest priority)
//! sighting of an asset is the one reported.

mod config;
pub use config::{AssetExtractorConfig, DEFAULT_ASSET_EXTRACTOR_CONFIG};
mod constants;
pub use constants::DEFAULT_MAX_ASSETS;
pub mod models;
pub use models::{
    Asset, AssetDictionary, AssetExtractor, AssetKey, AssetKind, BondMetadata, CallPut,
    EconomicIndicator, Error, OptionMetadata, QuoteLookup, RecognitionContext, Recognizer,
};
pub mod recognizers;
pub mod types;
pub use types::{CompanyName, Cusip, IndicatorCode, TickerSymbol};
mod utils;
pub use utils::validate_cusip;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

static DEFAULT_ASSET_EXTRACTOR: OnceLock<AssetExtractor> = OnceLock::new();

/// Extracts assets using the embedded dictionaries and the default configuration.
///
/// The underlying extractor is built on first use and shared afterwards. The only error
/// this can return is a failure to load the embedded dictionaries.
pub fn extract_assets_from_text(text: &str) -> Result<Vec<Asset>, Error> {
    if let Some(asset_extractor) = DEFAULT_ASSET_EXTRACTOR.get() {
        return Ok(asset_extractor.extract(text));
    }

    let asset_extractor = AssetExtractor::new(
        AssetDictionary::shared_embedded()?,
        DEFAULT_ASSET_EXTRACTOR_CONFIG,
    )?;

    // A concurrent caller may have won the race; either extractor is equivalent
    let asset_extractor = DEFAULT_ASSET_EXTRACTOR.get_or_init(|| asset_extractor);

    Ok(asset_extractor.extract(text))
}

/// Extracts assets using the embedded dictionaries and a caller supplied configuration.
///
/// Building an extractor compiles every dictionary pattern, which is far slower than a
/// single extraction. Extractors are therefore cached per distinct configuration, so
/// only the first call with a given configuration pays that cost.
pub fn extract_assets_from_text_with_custom_config(
    text: &str,
    asset_extractor_config: &AssetExtractorConfig,
) -> Result<Vec<Asset>, Error> {
    let asset_extractor = cached_asset_extractor(asset_extractor_config)?;

    Ok(asset_extractor.extract(text))
}

type AssetExtractorCache = Mutex<HashMap<AssetExtractorConfig, Arc<AssetExtractor>>>;

static CUSTOM_ASSET_EXTRACTORS: OnceLock<AssetExtractorCache> = OnceLock::new();

fn cached_asset_extractor(
    asset_extractor_config: &AssetExtractorConfig,
) -> Result<Arc<AssetExtractor>, Error> {
    let asset_extractors = CUSTOM_ASSET_EXTRACTORS.get_or_init(|| Mutex::new(HashMap::new()));

    // The map is only ever inserted into, so a poisoned lock still holds valid entries
    let mut asset_extractors = asset_extractors
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(asset_extractor) = asset_extractors.get(asset_extractor_config) {
        return Ok(Arc::clone(asset_extractor));
    }

    let asset_extractor = Arc::new(AssetExtractor::new(
        AssetDictionary::shared_embedded()?,
        *asset_extractor_config,
    )?);

    asset_extractors.insert(*asset_extractor_config, Arc::clone(&asset_extractor));

    Ok(asset_extractor)
}
