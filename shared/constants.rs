#![allow(unused)] // Ignore due to all constants not being utilized across all environments

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static DATA_DIRECTORY: LazyLock<PathBuf> = LazyLock::new(|| define_path!("data"));

/// Dictionary CSV files which are compressed into `OUT_DIR` at build time.
///
/// Note: The library embeds these by literal name (`include_bytes!` cannot take
/// a constant), so renaming an entry here must be mirrored in
/// `src/models/asset_dictionary.rs`.
pub static DICTIONARY_CSV_FILE_NAMES: &[&str] = &[
    "company_name_list.csv",
    "known_ticker_list.csv",
    "english_word_blocklist.csv",
    "economic_indicator_list.csv",
];

pub static COMPRESSED_FILE_EXTENSION: &str = "gz";
