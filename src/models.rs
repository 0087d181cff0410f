pub mod asset;
pub use asset::{Asset, AssetKey, AssetKind, BondMetadata, CallPut, OptionMetadata, QuoteLookup};

pub mod asset_collector;
pub use asset_collector::AssetCollector;

pub mod asset_dictionary;
pub use asset_dictionary::{AssetDictionary, EconomicIndicator};

pub mod asset_extractor;
pub use asset_extractor::AssetExtractor;

pub mod error;
pub use error::Error;

pub mod recognizer;
pub use recognizer::{RecognitionContext, Recognizer};
